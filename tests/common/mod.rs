#![allow(dead_code)]

use bevy_ecs::{
    entity::Entity,
    event::Events,
    query::With,
    schedule::Schedule,
    system::RunSystemOnce,
    world::World,
};
use car_dodge::{
    error::GameError,
    events::{AudioEvent, GameCommand, GameEvent},
    systems::{
        configure_gameplay, setup_gameplay_world, stage_system, Active, Bonus, BonusBundle, Bounds, GameClock, GameStage,
        LaneRng, Obstacle, ObstacleBundle, PlayerControlled,
    },
};
use glam::IVec2;

/// A headless world with every gameplay resource and the player car, on the menu screen.
pub fn create_test_world() -> World {
    let mut world = World::new();
    setup_gameplay_world(&mut world, LaneRng::seeded(0x5EED));
    world
}

/// A world that has just started a run at `now_ms`.
pub fn create_playing_world(now_ms: u64) -> World {
    let mut world = create_test_world();
    set_clock(&mut world, now_ms);
    send_command(&mut world, GameCommand::Confirm);
    world.run_system_once(stage_system).expect("System should run successfully");
    assert_eq!(*world.resource::<GameStage>(), GameStage::Playing);
    world
}

/// The platform-independent schedule, as the game runs it minus input, drawing and sound.
pub fn create_gameplay_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    configure_gameplay(&mut schedule);
    schedule
}

pub fn set_clock(world: &mut World, now_ms: u64) {
    world.insert_resource(GameClock { now_ms });
}

/// Replaces any pending commands with `command`, so a system run once sees only this press.
pub fn send_command(world: &mut World, command: GameCommand) {
    send_commands(world, &[command]);
}

pub fn send_commands(world: &mut World, commands: &[GameCommand]) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.clear();
    for command in commands {
        events.send(GameEvent::Command(*command));
    }
}

pub fn spawn_obstacle_at(world: &mut World, position: IVec2) -> Entity {
    let mut bundle = ObstacleBundle::in_lane(0);
    bundle.bounds.position = position;
    world.spawn(bundle).id()
}

pub fn spawn_bonus_at(world: &mut World, position: IVec2) -> Entity {
    let mut bundle = BonusBundle::in_lane(0);
    bundle.bounds.position = position;
    world.spawn(bundle).id()
}

pub fn player_bounds(world: &mut World) -> Bounds {
    *world
        .query_filtered::<&Bounds, With<PlayerControlled>>()
        .single(world)
        .expect("Exactly one player should exist")
}

pub fn set_player_x(world: &mut World, x: i32) {
    let mut bounds = world
        .query_filtered::<&mut Bounds, With<PlayerControlled>>()
        .single_mut(world)
        .expect("Exactly one player should exist");
    bounds.position.x = x;
}

pub fn obstacles(world: &mut World) -> Vec<(Entity, Bounds, bool)> {
    world
        .query_filtered::<(Entity, &Bounds, &Active), With<Obstacle>>()
        .iter(world)
        .map(|(entity, bounds, active)| (entity, *bounds, active.0))
        .collect()
}

pub fn bonuses(world: &mut World) -> Vec<(Entity, Bounds, bool)> {
    world
        .query_filtered::<(Entity, &Bounds, &Active), With<Bonus>>()
        .iter(world)
        .map(|(entity, bounds, active)| (entity, *bounds, active.0))
        .collect()
}

/// Audio requests written since the last event buffer update.
pub fn audio_events(world: &World) -> Vec<AudioEvent> {
    world
        .resource::<Events<AudioEvent>>()
        .iter_current_update_events()
        .copied()
        .collect()
}

/// Error messages written since the last event buffer update.
pub fn game_errors(world: &World) -> Vec<String> {
    world
        .resource::<Events<GameError>>()
        .iter_current_update_events()
        .map(|error| error.to_string())
        .collect()
}

pub fn despawn_player(world: &mut World) {
    let player = world
        .query_filtered::<Entity, With<PlayerControlled>>()
        .single(world)
        .expect("Exactly one player should exist");
    world.despawn(player);
}
