use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use tracing::trace;

use crate::asset::Asset;
use crate::error::{GameResult, TextureError};

pub mod ttf;

/// Decodes an image asset into a GPU texture.
pub fn load_texture(texture_creator: &TextureCreator<WindowContext>, asset: Asset) -> GameResult<Texture> {
    let bytes = asset.get_bytes()?;
    let texture = texture_creator
        .load_texture_bytes(&bytes)
        .map_err(|e| TextureError::LoadFailed(format!("{}: {e}", asset.file_name())))?;

    let query = texture.query();
    trace!(asset = asset.file_name(), width = query.width, height = query.height, "Loaded texture");
    Ok(texture)
}
