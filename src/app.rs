use std::time::{Duration, Instant};

use sdl2::{AudioSubsystem, Sdl};
use tracing::{debug, info, trace, warn};

use crate::constants::{screen, LOOP_TIME, TITLE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::platform;

/// Launch options read from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Start with the music and every sound effect muted.
    pub muted: bool,
}

impl LaunchOptions {
    /// Reads options from program arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = LaunchOptions::default();
        for arg in args {
            match arg.as_ref() {
                "--mute" | "-m" => options.muted = true,
                other => warn!(argument = other, "Ignoring unknown argument"),
            }
        }
        options
    }
}

/// Owns SDL, the window and the game, and drives the fixed-rate frame loop.
pub struct App {
    pub game: Game,
    started: Instant,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or propagates
    /// errors from `Game::new()` while loading assets.
    pub fn new(options: LaunchOptions) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        let ttf_context = sdl2::ttf::init().map_err(|e| GameError::Sdl(e.to_string()))?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        trace!(width = screen::SIZE.x, height = screen::SIZE.y, "Creating game window");
        let window = video_subsystem
            .window(TITLE, screen::SIZE.x, screen::SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!("Creating hardware-accelerated canvas");
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let texture_creator = canvas.texture_creator();
        let game = Game::new(canvas, ttf_context, texture_creator, event_pump, options.muted)?;

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            started: Instant::now(),
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Runs a single frame, then sleeps off whatever remains of `LOOP_TIME`.
    ///
    /// Returns `false` once the game has asked to exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        formatter::increment_tick();

        let now_ms = start.duration_since(self.started).as_millis() as u64;
        if self.game.tick(now_ms) {
            return false;
        }

        let elapsed = start.elapsed();
        let remaining = LOOP_TIME.saturating_sub(elapsed);
        if remaining != Duration::ZERO {
            platform::sleep(remaining, self.game.is_focused());
        } else {
            warn!(elapsed = ?elapsed, frame_time = ?LOOP_TIME, "Frame took longer than expected");
        }

        true
    }
}
