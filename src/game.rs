//! This module contains the main game logic and state.

use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use sdl2::event::EventType;
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info, trace};

use crate::asset::{self, Asset};
use crate::audio::Audio;
use crate::constants;
use crate::error::{GameError, GameResult};
use crate::systems::{
    self, audio_system, input_system, present_system, render_system, AudioResource, AudioState, EntityTextures, GameClock,
    GameplaySet, GlobalState, LaneRng, RenderSet, TtfAtlasResource, WindowFocus,
};
use crate::texture::{load_texture, ttf::TtfAtlas};

/// Core game state built on the Bevy ECS.
///
/// The `World` holds the session: stage, score, timers and the road's entities.
/// SDL2 handles (canvas, event pump, glyph atlas, textures, audio) are stored as
/// `NonSend` resources so they stay on the main thread.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Loads every asset, builds the world and configures the schedule.
    ///
    /// # Errors
    ///
    /// Any asset that cannot be read or decoded, and any SDL failure while
    /// building the glyph atlas or opening the audio device, aborts startup.
    pub fn new(
        mut canvas: Canvas<Window>,
        ttf_context: Sdl2TtfContext,
        texture_creator: TextureCreator<WindowContext>,
        mut event_pump: EventPump,
        muted: bool,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!("Checking assets");
        asset::verify_assets()?;

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        debug!("Building glyph atlas");
        let ttf_atlas = Self::setup_font(&mut canvas, &texture_creator, &ttf_context)?;

        debug!("Loading car textures");
        let textures = EntityTextures {
            player: load_texture(&texture_creator, Asset::PlayerTexture)?,
            obstacle: load_texture(&texture_creator, Asset::EnemyTexture)?,
        };

        debug!("Initializing audio subsystem");
        let mut audio = Audio::new()?;
        audio.set_mute(muted);
        audio.start_music();

        debug!("Initializing ECS world and system schedule");
        let mut world = World::default();
        let mut schedule = Schedule::default();

        systems::setup_gameplay_world(&mut world, LaneRng::from_wall_clock());
        world.insert_resource(AudioState { muted });

        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(TtfAtlasResource(ttf_atlas));
        world.insert_non_send_resource(textures);
        world.insert_non_send_resource(AudioResource(audio));

        Self::configure_schedule(&mut schedule);

        info!("Game initialization completed");
        Ok(Game { world, schedule })
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::JoyAxisMotion,
            EventType::JoyBallMotion,
            EventType::JoyHatMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::JoyDeviceAdded,
            EventType::JoyDeviceRemoved,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::ControllerDeviceAdded,
            EventType::ControllerDeviceRemoved,
            EventType::ControllerDeviceRemapped,
            EventType::FingerDown,
            EventType::FingerUp,
            EventType::FingerMotion,
            EventType::MouseMotion,
            EventType::MouseButtonDown,
            EventType::MouseButtonUp,
            EventType::MouseWheel,
            EventType::DropFile,
            EventType::DropText,
            EventType::DropBegin,
            EventType::DropComplete,
            EventType::TextInput,
            EventType::TextEditing,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    /// Rasterizes the font into a glyph atlas. The font itself is dropped afterwards.
    fn setup_font(
        canvas: &mut Canvas<Window>,
        texture_creator: &TextureCreator<WindowContext>,
        ttf_context: &Sdl2TtfContext,
    ) -> GameResult<TtfAtlas> {
        trace!("Loading font");
        let font_data = Asset::Font.get_bytes()?;
        let font_asset = RWops::from_bytes(&font_data).map_err(GameError::Sdl)?;
        let font = ttf_context
            .load_font_from_rwops(font_asset, constants::ui::FONT_SIZE)
            .map_err(GameError::Sdl)?;

        trace!("Creating TTF atlas");
        let mut ttf_atlas = TtfAtlas::new(texture_creator, &font)?;

        trace!("Populating TTF atlas");
        ttf_atlas.populate_atlas(canvas, texture_creator, &font)?;

        canvas.set_blend_mode(BlendMode::Blend);
        Ok(ttf_atlas)
    }

    fn configure_schedule(schedule: &mut Schedule) {
        systems::configure_gameplay(schedule);

        schedule.add_systems((
            input_system.in_set(GameplaySet::Input),
            render_system.in_set(RenderSet::Draw),
            (present_system, audio_system).chain().in_set(RenderSet::Present),
        ));
    }

    /// Runs one frame at `now_ms` milliseconds since startup.
    ///
    /// Returns `true` once the game has been asked to exit.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.world.insert_resource(GameClock { now_ms });
        self.schedule.run(&mut self.world);

        self.world.get_resource::<GlobalState>().is_none_or(|state| state.exit)
    }

    /// Whether the window currently has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.world.get_resource::<WindowFocus>().is_none_or(|focus| focus.0)
    }
}
