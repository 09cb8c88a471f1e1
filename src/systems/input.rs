use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use bitflags::bitflags;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::{Keycode, Scancode},
    EventPump,
};
use tracing::debug;

use crate::{
    events::{GameCommand, GameEvent},
    systems::WindowFocus,
};

bitflags! {
    /// Steering keys held down during the current frame.
    #[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct HeldDirections: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
    }
}

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
    left_keys: Vec<Scancode>,
    right_keys: Vec<Scancode>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Screen transitions
        key_bindings.insert(Keycode::Return, GameCommand::Confirm);
        key_bindings.insert(Keycode::KpEnter, GameCommand::Confirm);

        // Game actions
        key_bindings.insert(Keycode::M, GameCommand::MuteAudio);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        Self {
            key_bindings,
            left_keys: vec![Scancode::Left, Scancode::A],
            right_keys: vec![Scancode::Right, Scancode::D],
        }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }

    /// Collapses the pressed state of every steering key into a set of held directions.
    pub fn held_directions(&self, is_pressed: impl Fn(Scancode) -> bool) -> HeldDirections {
        let mut held = HeldDirections::empty();
        if self.left_keys.iter().any(|&key| is_pressed(key)) {
            held |= HeldDirections::LEFT;
        }
        if self.right_keys.iter().any(|&key| is_pressed(key)) {
            held |= HeldDirections::RIGHT;
        }
        held
    }
}

/// A keyboard event stripped of everything but the key, used to drive the bindings without SDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKeyEvent {
    KeyDown(Keycode),
    /// Auto-repeat of a key that is still held
    KeyRepeat(Keycode),
    KeyUp(Keycode),
}

impl SimpleKeyEvent {
    /// Converts an SDL keyboard event, or `None` for anything else.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match *event {
            Event::KeyDown {
                keycode: Some(key),
                repeat,
                ..
            } => Some(if repeat {
                SimpleKeyEvent::KeyRepeat(key)
            } else {
                SimpleKeyEvent::KeyDown(key)
            }),
            Event::KeyUp { keycode: Some(key), .. } => Some(SimpleKeyEvent::KeyUp(key)),
            _ => None,
        }
    }
}

/// Translates a frame's worth of key events into game events.
///
/// Only fresh presses produce commands. Auto-repeat would turn one held confirm
/// into several screen changes, and steering is sampled from the keyboard state.
pub fn process_simple_key_events(bindings: &Bindings, events: &[SimpleKeyEvent]) -> Vec<GameEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            SimpleKeyEvent::KeyDown(key) => bindings.command_for(*key),
            SimpleKeyEvent::KeyRepeat(_) | SimpleKeyEvent::KeyUp(_) => None,
        })
        .map(GameEvent::from)
        .collect()
}

pub fn input_system(
    bindings: Res<Bindings>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
    mut held: ResMut<HeldDirections>,
    mut focus: ResMut<WindowFocus>,
) {
    let mut keys = Vec::new();

    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::FocusGained => {
                    debug!("Window focus gained");
                    focus.0 = true;
                }
                WindowEvent::FocusLost => {
                    debug!("Window focus lost");
                    focus.0 = false;
                }
                _ => {}
            },
            other => keys.extend(SimpleKeyEvent::from_sdl(&other)),
        }
    }

    for event in process_simple_key_events(&bindings, &keys) {
        writer.write(event);
    }

    let keyboard = pump.keyboard_state();
    *held = bindings.held_directions(|scancode| keyboard.is_scancode_pressed(scancode));
}
