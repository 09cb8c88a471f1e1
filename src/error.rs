//! Centralized error types for the game.
//!
//! Startup failures (missing assets, SDL subsystems that refuse to initialize) are
//! fatal and surface through `GameResult`. Failures inside a running frame are
//! written as `GameError` events and logged, never propagated.

use std::io;
use std::path::PathBuf;

use bevy_ecs::event::Event;

/// Main error type for the game.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Console initialization failed: {0}")]
    ConsoleInit(String),
}

/// Errors related to texture and text operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Errors raised while bringing up the mixer or loading sounds.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Failed to open audio device: {0}")]
    DeviceOpen(String),

    #[error("Failed to load {name}: {reason}")]
    LoadFailed { name: &'static str, reason: String },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
