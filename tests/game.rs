use bevy_ecs::{schedule::Schedule, world::World};
use car_dodge::events::GameCommand;
use car_dodge::systems::{GameStage, GlobalState, HeldDirections, HighScoreResource, ScoreResource, SurvivalTime};
use glam::IVec2;
use speculoos::prelude::*;

mod common;

fn tick(world: &mut World, schedule: &mut Schedule, now_ms: u64) {
    common::set_clock(world, now_ms);
    schedule.run(world);
}

#[test]
fn test_menu_does_not_simulate() {
    let mut world = common::create_test_world();
    let mut schedule = common::create_gameplay_schedule();

    for frame in 0..200u64 {
        tick(&mut world, &mut schedule, frame * 16);
    }

    assert_that(world.resource::<GameStage>()).is_equal_to(&GameStage::Menu);
    assert_that(&common::obstacles(&mut world)).is_empty();
    assert_that(&common::bonuses(&mut world)).is_empty();
}

#[test]
fn test_confirm_starts_a_run_in_the_same_frame() {
    let mut world = common::create_test_world();
    let mut schedule = common::create_gameplay_schedule();

    common::send_command(&mut world, GameCommand::Confirm);
    tick(&mut world, &mut schedule, 500);

    assert_that(world.resource::<GameStage>()).is_equal_to(&GameStage::Playing);
    assert_that(&world.resource::<SurvivalTime>().started_ms).is_equal_to(500);

    tick(&mut world, &mut schedule, 1500);
    assert_that(&common::obstacles(&mut world)).is_empty();

    tick(&mut world, &mut schedule, 1501);
    let obstacles = common::obstacles(&mut world);
    assert_that(&obstacles).has_length(1);
    // Spawned and moved within the same frame
    assert_that(&obstacles[0].1.position.y).is_equal_to(-74);
}

#[test]
fn test_full_run_until_crash() {
    let mut world = common::create_test_world();
    let mut schedule = common::create_gameplay_schedule();

    common::send_command(&mut world, GameCommand::Confirm);
    tick(&mut world, &mut schedule, 0);

    // Park an obstacle right above the player; it reaches the car within a few frames
    common::spawn_obstacle_at(&mut world, IVec2::new(175, 400));

    let mut now_ms = 0;
    for _ in 0..20 {
        now_ms += 16;
        tick(&mut world, &mut schedule, now_ms);
        if *world.resource::<GameStage>() == GameStage::GameOver {
            break;
        }
    }

    assert_that(world.resource::<GameStage>()).is_equal_to(&GameStage::GameOver);
    assert_that(&world.resource::<HighScoreResource>().0).is_equal_to(world.resource::<ScoreResource>().0);

    // The crashed obstacle is gone at the end of the frame
    assert_that(&common::obstacles(&mut world).iter().any(|(_, bounds, _)| bounds.position.x == 175)).is_false();

    // Nothing moves after the crash
    let before: Vec<_> = common::obstacles(&mut world).into_iter().map(|(_, bounds, _)| bounds).collect();
    tick(&mut world, &mut schedule, now_ms + 16);
    let after: Vec<_> = common::obstacles(&mut world).into_iter().map(|(_, bounds, _)| bounds).collect();
    assert_that(&after).is_equal_to(&before);
}

#[test]
fn test_steering_only_applies_while_playing() {
    let mut world = common::create_test_world();
    let mut schedule = common::create_gameplay_schedule();
    world.insert_resource(HeldDirections::LEFT);

    tick(&mut world, &mut schedule, 0);
    assert_that(&common::player_bounds(&mut world).position.x).is_equal_to(175);

    common::send_command(&mut world, GameCommand::Confirm);
    tick(&mut world, &mut schedule, 16);
    assert_that(&common::player_bounds(&mut world).position.x).is_equal_to(165);
}

#[test]
fn test_exit_from_any_stage() {
    let mut world = common::create_playing_world(0);
    let mut schedule = common::create_gameplay_schedule();

    common::send_command(&mut world, GameCommand::Exit);
    tick(&mut world, &mut schedule, 16);

    assert_that(&world.resource::<GlobalState>().exit).is_true();
}
