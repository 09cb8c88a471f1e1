//! Bridges gameplay audio requests to the SDL2_mixer backed [`Audio`] player.
//!
//! SDL2 audio handles are not `Send`, so the player lives in a non-send resource
//! and this system always runs on the main thread.

use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::{NonSendMut, Res},
};
use tracing::debug;

use crate::{audio::Audio, events::AudioEvent};

/// Resource for tracking audio state
#[derive(Resource, Debug, Clone, Default)]
pub struct AudioState {
    /// Whether audio is currently muted
    pub muted: bool,
}

pub struct AudioResource(pub Audio);

/// System that keeps the player in sync with `AudioState` and plays requested sounds.
///
/// Sounds requested while muted are dropped by [`Audio::play`].
pub fn audio_system(mut audio: NonSendMut<AudioResource>, state: Res<AudioState>, mut events: EventReader<AudioEvent>) {
    if audio.0.is_muted() != state.muted {
        debug!(muted = state.muted, "Audio mute state changed");
        audio.0.set_mute(state.muted);
    }

    for event in events.read() {
        match event {
            AudioEvent::PlaySound(sound) => audio.0.play(*sound),
        }
    }
}
