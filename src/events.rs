use bevy_ecs::event::Event;

use crate::audio::Sound;

/// Discrete commands produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Leave the game loop, from any stage.
    Exit,
    /// Start a run from the menu, or return to the menu after a crash.
    Confirm,
    MuteAudio,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// Requests for the audio collaborator. The simulation never waits on these.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioEvent {
    PlaySound(Sound),
}
