//! The Entity-Component-System (ECS) module.
//!
//! Every gameplay rule lives here as a system over plain resources and
//! components. Only `input`, `render` and `audio` touch SDL; the rest can run
//! in a headless world.

pub mod audio;
pub mod collision;
pub mod components;
pub mod control;
pub mod difficulty;
pub mod input;
pub mod movement;
pub mod player;
pub mod render;
pub mod spawner;
pub mod state;

pub use self::audio::*;
pub use self::collision::*;
pub use self::components::*;
pub use self::control::*;
pub use self::difficulty::*;
pub use self::input::*;
pub use self::movement::*;
pub use self::player::*;
pub use self::render::*;
pub use self::spawner::*;
pub use self::state::*;

use bevy_ecs::{
    event::{event_update_system, EventRegistry},
    schedule::{IntoScheduleConfigs, Schedule, SystemSet},
    world::World,
};

use crate::error::GameError;
use crate::events::{AudioEvent, GameEvent};

/// System sets for the simulation, in execution order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Reads the platform and emits commands
    Input,
    /// Applies commands: exit, mute and stage changes
    Command,
    /// Advances a run in progress; skipped outside `Playing`
    Update,
    /// Removes entities retired during the frame
    Cleanup,
}

/// System sets for output, always after the simulation.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSet {
    Draw,
    Present,
}

/// Registers the events and inserts every resource the simulation reads, then spawns the player.
pub fn setup_gameplay_world(world: &mut World, rng: LaneRng) {
    EventRegistry::register_event::<GameError>(world);
    EventRegistry::register_event::<GameEvent>(world);
    EventRegistry::register_event::<AudioEvent>(world);

    world.insert_resource(GlobalState { exit: false });
    world.insert_resource(GameStage::default());
    world.insert_resource(GameClock::default());
    world.insert_resource(ScoreResource::default());
    world.insert_resource(HighScoreResource::default());
    world.insert_resource(SurvivalTime::default());
    world.insert_resource(SpawnTimers::default());
    world.insert_resource(Difficulty::default());
    world.insert_resource(HeldDirections::empty());
    world.insert_resource(Bindings::default());
    world.insert_resource(WindowFocus::default());
    world.insert_resource(AudioState::default());
    world.insert_resource(rng);

    world.spawn(PlayerBundle::default());
}

/// Adds the platform-independent systems and orders every set, including the
/// SDL-facing ones added by the caller.
pub fn configure_gameplay(schedule: &mut Schedule) {
    schedule
        .add_systems((
            (control_system, stage_system).chain().in_set(GameplaySet::Command),
            (
                player_steering_system,
                difficulty_system,
                spawn_system,
                movement_system,
                collision_system,
            )
                .chain()
                .in_set(GameplaySet::Update),
            purge_system.in_set(GameplaySet::Cleanup),
            error_log_system.after(RenderSet::Present),
            // Events must outlive every reader of the frame before their buffers swap.
            event_update_system.after(error_log_system),
        ))
        .configure_sets(
            (
                GameplaySet::Input,
                GameplaySet::Command,
                GameplaySet::Update.run_if(is_playing),
                GameplaySet::Cleanup,
                RenderSet::Draw,
                RenderSet::Present,
            )
                .chain(),
        );
}
