use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{NonSend, NonSendMut, Query, Res},
};
use glam::IVec2;
use sdl2::{
    pixels::Color,
    rect::Rect,
    render::{Canvas, Texture},
    video::Window,
};

use crate::constants::{
    lane_origin,
    screen::{HEIGHT, LANE_COUNT, LANE_MARKING_WIDTH},
    ui::{self, layout},
};
use crate::error::{GameError, TextureError};
use crate::systems::{
    state::GameStage, Active, Bonus, Bounds, HighScoreResource, Obstacle, PlayerControlled, ScoreResource, SurvivalTime,
};
use crate::texture::ttf::TtfAtlas;

/// A non-send resource wrapping the glyph atlas used for every piece of text.
pub struct TtfAtlasResource(pub TtfAtlas);

/// The car textures, loaded once at startup.
pub struct EntityTextures {
    pub player: Texture,
    pub obstacle: Texture,
}

/// A single line of text to draw this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub position: IVec2,
    pub color: Color,
}

impl TextLine {
    fn new(text: impl Into<String>, position: IVec2, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            color,
        }
    }
}

/// The text shown on the given screen.
pub fn screen_text(stage: GameStage, score: u32, high_score: u32, seconds: u32) -> Vec<TextLine> {
    match stage {
        GameStage::Menu => vec![
            TextLine::new("Press ENTER to Start", layout::MENU_PROMPT, ui::TEXT),
            TextLine::new(format!("High Score: {high_score}"), layout::MENU_HIGH_SCORE, ui::TEXT),
        ],
        GameStage::Playing => vec![
            TextLine::new(format!("Score: {score}"), layout::HUD_SCORE, ui::TEXT),
            TextLine::new(format!("Time: {seconds}s"), layout::HUD_TIME, ui::TEXT),
        ],
        GameStage::GameOver => vec![
            TextLine::new("Game Over!", layout::GAME_OVER_TITLE, ui::GAME_OVER_TEXT),
            TextLine::new(format!("Score: {score}"), layout::GAME_OVER_SCORE, ui::GAME_OVER_TEXT),
            TextLine::new("Press ENTER", layout::GAME_OVER_PROMPT, ui::GAME_OVER_TEXT),
        ],
    }
}

/// The separators drawn between neighbouring lanes, centered on each boundary.
pub fn lane_markings() -> impl Iterator<Item = Rect> {
    (1..LANE_COUNT).map(|lane| {
        let x = lane_origin(lane) - LANE_MARKING_WIDTH as i32 / 2;
        Rect::new(x, 0, LANE_MARKING_WIDTH, HEIGHT as u32)
    })
}

fn draw_road(
    canvas: &mut Canvas<Window>,
    textures: &EntityTextures,
    players: &Query<&Bounds, With<PlayerControlled>>,
    obstacles: &Query<(&Bounds, &Active), With<Obstacle>>,
    bonuses: &Query<(&Bounds, &Active), With<Bonus>>,
) -> Result<(), TextureError> {
    canvas.set_draw_color(ui::LANE_MARKING);
    for marking in lane_markings() {
        canvas.fill_rect(marking).map_err(TextureError::RenderFailed)?;
    }

    for bounds in players.iter() {
        canvas
            .copy(&textures.player, None, bounds.to_rect())
            .map_err(TextureError::RenderFailed)?;
    }

    for (bounds, _) in obstacles.iter().filter(|(_, active)| active.0) {
        canvas
            .copy(&textures.obstacle, None, bounds.to_rect())
            .map_err(TextureError::RenderFailed)?;
    }

    canvas.set_draw_color(ui::BONUS);
    for (bounds, _) in bonuses.iter().filter(|(_, active)| active.0) {
        canvas.fill_rect(bounds.to_rect()).map_err(TextureError::RenderFailed)?;
    }

    Ok(())
}

/// Draws the current screen into the backbuffer. Presentation happens separately.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    mut atlas: NonSendMut<TtfAtlasResource>,
    textures: NonSend<EntityTextures>,
    stage: Res<GameStage>,
    score: Res<ScoreResource>,
    high_score: Res<HighScoreResource>,
    survival: Res<SurvivalTime>,
    players: Query<&Bounds, With<PlayerControlled>>,
    obstacles: Query<(&Bounds, &Active), With<Obstacle>>,
    bonuses: Query<(&Bounds, &Active), With<Bonus>>,
    mut errors: EventWriter<GameError>,
) {
    canvas.set_draw_color(ui::BACKGROUND);
    canvas.clear();

    if stage.is_playing() {
        if let Err(e) = draw_road(&mut *canvas, &textures, &players, &obstacles, &bonuses) {
            errors.write(e.into());
        }
    }

    for line in screen_text(*stage, score.0, high_score.0, survival.seconds) {
        if let Err(e) = atlas.0.render_text(&mut *canvas, &line.text, line.position, line.color) {
            errors.write(e.into());
        }
    }
}

pub fn present_system(mut canvas: NonSendMut<Canvas<Window>>) {
    canvas.present();
}
