use bevy_ecs::{
    event::EventReader,
    system::ResMut,
};
use tracing::{error, info};

use crate::{
    error::GameError,
    events::{GameCommand, GameEvent},
    systems::{audio::AudioState, GlobalState},
};

/// Handles commands that apply regardless of the current stage.
pub fn control_system(mut events: EventReader<GameEvent>, mut state: ResMut<GlobalState>, mut audio_state: ResMut<AudioState>) {
    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::Exit) => {
                info!("Exit requested");
                state.exit = true;
            }
            GameEvent::Command(GameCommand::MuteAudio) => {
                audio_state.muted = !audio_state.muted;
                info!(muted = audio_state.muted, "Audio mute toggled");
            }
            GameEvent::Command(GameCommand::Confirm) => {}
        }
    }
}

/// Logs any errors raised by systems during the frame.
pub fn error_log_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        error!("Unhandled game error: {}", error);
    }
}
