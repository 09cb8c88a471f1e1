//! Asset lookup.
//!
//! Assets live next to the executable in an `assets/` directory, which can be
//! relocated with the `CAR_DODGE_ASSETS` environment variable.

use std::borrow::Cow;
use std::env;
use std::fs;
use std::path::PathBuf;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::AssetError;

/// Environment variable that overrides the asset directory.
pub const ASSET_DIR_ENV: &str = "CAR_DODGE_ASSETS";
const DEFAULT_ASSET_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
    Font,
    EngineMusic,
    StarSound,
    CrashSound,
    PlayerTexture,
    EnemyTexture,
}

impl Asset {
    /// File name of the asset inside the asset directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Asset::Font => "font.ttf",
            Asset::EngineMusic => "engine.wav",
            Asset::StarSound => "star.wav",
            Asset::CrashSound => "crash.wav",
            Asset::PlayerTexture => "player.png",
            Asset::EnemyTexture => "enemy.png",
        }
    }

    /// Full path of the asset, honoring `CAR_DODGE_ASSETS`.
    pub fn path(&self) -> PathBuf {
        asset_dir().join(self.file_name())
    }

    pub fn get_bytes(&self) -> Result<Cow<'static, [u8]>, AssetError> {
        let path = self.path();
        let bytes = fs::read(&path).map_err(|source| AssetError::Io { path, source })?;
        Ok(Cow::Owned(bytes))
    }
}

/// Checks that every asset exists before any of them is loaded.
///
/// Returns the error for the first missing or unreadable file.
pub fn verify_assets() -> Result<(), AssetError> {
    for asset in Asset::iter() {
        let path = asset.path();
        fs::metadata(&path).map_err(|source| AssetError::Io { path, source })?;
    }
    Ok(())
}

fn asset_dir() -> PathBuf {
    env::var_os(ASSET_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR))
}
