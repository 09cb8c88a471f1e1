//! This module handles the audio playback for the game.
use std::collections::HashMap;

use anyhow::{anyhow, Result};
use sdl2::{
    mixer::{self, Channel, Chunk, LoaderRWops, Music, DEFAULT_FORMAT, MAX_VOLUME},
    rwops::RWops,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::{debug, trace, warn};

use crate::asset::Asset;
use crate::constants::audio::{CHANNELS, CHUNK_SIZE, EFFECT_CHANNELS, FREQUENCY};
use crate::error::AudioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sound {
    /// The player ran into an obstacle.
    Crash,
    /// The player picked up a bonus star.
    Collect,
}

impl Sound {
    fn asset(self) -> Asset {
        match self {
            Sound::Crash => Asset::CrashSound,
            Sound::Collect => Asset::StarSound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled,
    Muted,
}

/// The audio system for the game.
///
/// Owns the looping engine music and the sound effect chunks. Every sound is
/// required; failing to load any of them aborts startup.
pub struct Audio {
    music: Music<'static>,
    sounds: HashMap<Sound, Chunk>,
    state: AudioState,
}

impl Audio {
    /// Opens the audio device and loads the music and every sound effect.
    pub fn new() -> Result<Self, AudioError> {
        mixer::open_audio(FREQUENCY, DEFAULT_FORMAT, CHANNELS, CHUNK_SIZE).map_err(AudioError::DeviceOpen)?;
        mixer::allocate_channels(EFFECT_CHANNELS);

        let music = Music::from_file(Asset::EngineMusic.path()).map_err(|reason| AudioError::LoadFailed {
            name: Asset::EngineMusic.file_name(),
            reason,
        })?;

        let mut sounds = HashMap::new();
        for sound in Sound::iter() {
            let chunk = Self::load_sound(sound).map_err(|e| AudioError::LoadFailed {
                name: sound.asset().file_name(),
                reason: e.to_string(),
            })?;
            sounds.insert(sound, chunk);
        }

        debug!(sounds = sounds.len(), "Audio initialized");
        Ok(Audio {
            music,
            sounds,
            state: AudioState::Enabled,
        })
    }

    fn load_sound(sound: Sound) -> Result<Chunk> {
        let data = sound
            .asset()
            .get_bytes()
            .map_err(|e| anyhow!("Failed to get bytes for {:?}: {}", sound, e))?;
        let rwops = RWops::from_bytes(&data).map_err(|e| anyhow!("Failed to create RWops for {:?}: {}", sound, e))?;
        rwops.load_wav().map_err(|e| anyhow!("Failed to decode {:?}: {}", sound, e))
    }

    /// Starts the background music, looping forever.
    pub fn start_music(&self) {
        Music::set_volume(self.music_volume());
        match self.music.play(-1) {
            Ok(()) => debug!("Background music started"),
            Err(e) => warn!("Could not start background music: {}", e),
        }
    }

    /// Plays a sound effect on the first free channel. Does nothing while muted.
    pub fn play(&self, sound: Sound) {
        if self.state == AudioState::Muted {
            trace!(?sound, "Skipping sound while muted");
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            match Channel::all().play(chunk, 0) {
                Ok(channel) => trace!(?sound, ?channel, "Playing sound"),
                Err(e) => warn!(?sound, "Could not play sound: {}", e),
            }
        }
    }

    /// Instantly mute or unmute the music and every effect channel.
    pub fn set_mute(&mut self, mute: bool) {
        self.state = if mute { AudioState::Muted } else { AudioState::Enabled };
        Channel::all().set_volume(if mute { 0 } else { MAX_VOLUME });
        Music::set_volume(self.music_volume());
    }

    /// Returns `true` if the audio is muted.
    pub fn is_muted(&self) -> bool {
        self.state == AudioState::Muted
    }

    fn music_volume(&self) -> i32 {
        match self.state {
            AudioState::Enabled => MAX_VOLUME,
            AudioState::Muted => 0,
        }
    }
}
