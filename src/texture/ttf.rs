//! TTF font rendering using a pre-rendered character atlas.
//!
//! Every glyph the HUD can show is rasterized once at startup into a single
//! texture. Drawing a string is then a sequence of texture copies, so the
//! score and timer can change every frame without creating new textures.

use std::collections::HashMap;

use glam::{IVec2, UVec2};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;

use crate::error::{GameError, TextureError};

/// Character atlas tile representing a single rendered character
#[derive(Clone, Copy, Debug)]
pub struct TtfCharTile {
    pub pos: UVec2,
    pub size: UVec2,
    pub advance: u32,
}

/// Pre-rendered glyphs for every character the game prints.
pub struct TtfAtlas {
    texture: Texture,
    char_tiles: HashMap<char, TtfCharTile>,
    last_modulation: Option<Color>,
}

const TTF_CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz.,:!-() ";

/// Horizontal advance used for characters missing from the atlas.
const FALLBACK_ADVANCE: u32 = 12;

impl TtfAtlas {
    /// Measures every glyph and allocates the atlas texture.
    ///
    /// The atlas is blank until [`TtfAtlas::populate_atlas`] is called.
    pub fn new(texture_creator: &TextureCreator<WindowContext>, font: &Font) -> Result<Self, GameError> {
        let mut char_tiles = HashMap::new();
        let mut max_height = 0u32;
        let mut current_x = 0u32;

        for c in TTF_CHARS.chars() {
            let (advance, height) = font.size_of_char(c).map_err(|e| GameError::Sdl(e.to_string()))?;
            // Spaces only contribute their advance
            let width = if c == ' ' { 0 } else { advance };

            char_tiles.insert(
                c,
                TtfCharTile {
                    pos: UVec2::new(current_x, 0),
                    size: UVec2::new(width, height),
                    advance,
                },
            );
            max_height = max_height.max(height);
            current_x += width;
        }

        let mut texture = texture_creator
            .create_texture_target(None, current_x.max(1), max_height.max(1))
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        texture.set_blend_mode(BlendMode::Blend);

        Ok(Self {
            texture,
            char_tiles,
            last_modulation: None,
        })
    }

    /// Renders every glyph into the atlas texture.
    pub fn populate_atlas<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        texture_creator: &TextureCreator<WindowContext>,
        font: &Font,
    ) -> Result<(), GameError> {
        let mut render_error: Option<GameError> = None;
        let char_tiles = &self.char_tiles;

        canvas
            .with_texture_canvas(&mut self.texture, |atlas_canvas| {
                atlas_canvas.set_draw_color(Color::RGBA(0, 0, 0, 0));
                atlas_canvas.clear();

                for (c, tile) in char_tiles.iter().filter(|(_, tile)| tile.size.x > 0) {
                    let rendered = font
                        .render_char(*c)
                        .blended(Color::WHITE)
                        .map_err(|e| GameError::Sdl(e.to_string()))
                        .and_then(|surface| {
                            texture_creator
                                .create_texture_from_surface(&surface)
                                .map_err(|e| GameError::Sdl(e.to_string()))
                        });

                    let glyph = match rendered {
                        Ok(glyph) => glyph,
                        Err(e) => {
                            render_error = Some(e);
                            return;
                        }
                    };

                    let dest = Rect::new(tile.pos.x as i32, tile.pos.y as i32, tile.size.x, tile.size.y);
                    let copied = atlas_canvas.copy(&glyph, None, dest);
                    // Glyph textures are only needed until they are copied into the atlas
                    unsafe { glyph.destroy() };

                    if let Err(e) = copied {
                        render_error = Some(GameError::Sdl(e));
                        return;
                    }
                }
            })
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        match render_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Draws `text` with its top-left corner at `position`.
    pub fn render_text<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        text: &str,
        position: IVec2,
        color: Color,
    ) -> Result<(), TextureError> {
        if self.last_modulation != Some(color) {
            self.texture.set_color_mod(color.r, color.g, color.b);
            self.texture.set_alpha_mod(color.a);
            self.last_modulation = Some(color);
        }

        let mut x = position.x;
        for c in text.chars() {
            let Some(tile) = self.char_tiles.get(&c).copied() else {
                x += FALLBACK_ADVANCE as i32;
                continue;
            };

            if tile.size.x > 0 && tile.size.y > 0 {
                let src = Rect::new(tile.pos.x as i32, tile.pos.y as i32, tile.size.x, tile.size.y);
                let dest = Rect::new(x, position.y, tile.size.x, tile.size.y);
                canvas.copy(&self.texture, src, dest).map_err(TextureError::RenderFailed)?;
            }
            x += tile.advance as i32;
        }

        Ok(())
    }
}
