use bevy_ecs::system::RunSystemOnce;
use car_dodge::constants::{bonus, obstacle};
use car_dodge::systems::{interval_elapsed, spawn_system, LaneRng, SpawnTimers};
use speculoos::prelude::*;

mod common;

#[test]
fn test_interval_must_be_strictly_exceeded() {
    assert_that(&interval_elapsed(1000, 0, 1000)).is_false();
    assert_that(&interval_elapsed(1001, 0, 1000)).is_true();
    assert_that(&interval_elapsed(500, 900, 1000)).is_false();
}

#[test]
fn test_lanes_are_in_range() {
    let mut rng = LaneRng::seeded(42);
    for _ in 0..1000 {
        assert_that(&rng.next_lane()).is_less_than(4);
    }
}

#[test]
fn test_same_seed_same_lanes() {
    let mut a = LaneRng::seeded(7);
    let mut b = LaneRng::seeded(7);
    let lanes_a: Vec<u32> = (0..32).map(|_| a.next_lane()).collect();
    let lanes_b: Vec<u32> = (0..32).map(|_| b.next_lane()).collect();
    assert_that(&lanes_a).is_equal_to(&lanes_b);
}

#[test]
fn test_nothing_spawns_at_exactly_one_second() {
    let mut world = common::create_playing_world(0);
    common::set_clock(&mut world, 1000);

    world.run_system_once(spawn_system).expect("System should run successfully");

    assert_that(&common::obstacles(&mut world)).is_empty();
    assert_that(&common::bonuses(&mut world)).is_empty();
}

#[test]
fn test_obstacle_spawns_after_one_second() {
    let mut world = common::create_playing_world(0);
    common::set_clock(&mut world, 1001);

    world.run_system_once(spawn_system).expect("System should run successfully");

    let obstacles = common::obstacles(&mut world);
    assert_that(&obstacles).has_length(1);
    let (_, bounds, active) = obstacles[0];
    assert_that(&active).is_true();
    assert_that(&bounds.position.y).is_equal_to(obstacle::SPAWN_Y);
    assert_that(&bounds.size).is_equal_to(obstacle::SIZE);
    assert_that(&world.resource::<SpawnTimers>().last_obstacle_ms).is_equal_to(1001);
    assert_that(&common::bonuses(&mut world)).is_empty();
}

#[test]
fn test_bonus_spawns_after_three_seconds() {
    let mut world = common::create_playing_world(0);
    common::set_clock(&mut world, 3001);

    world.run_system_once(spawn_system).expect("System should run successfully");

    let bonuses = common::bonuses(&mut world);
    assert_that(&bonuses).has_length(1);
    assert_that(&bonuses[0].1.position.y).is_equal_to(bonus::SPAWN_Y);
    assert_that(&bonuses[0].1.size).is_equal_to(bonus::SIZE);
    assert_that(&world.resource::<SpawnTimers>().last_bonus_ms).is_equal_to(3001);
}

#[test]
fn test_spawned_entities_use_lane_positions() {
    let mut world = common::create_playing_world(0);

    for step in 1..=60u64 {
        common::set_clock(&mut world, step * 3001);
        world.run_system_once(spawn_system).expect("System should run successfully");
    }

    let obstacles = common::obstacles(&mut world);
    let bonuses = common::bonuses(&mut world);
    assert_that(&obstacles).has_length(60);
    assert_that(&bonuses).has_length(60);

    for (_, bounds, _) in obstacles {
        assert_that(&[25, 125, 225, 325].contains(&bounds.position.x)).is_true();
    }
    for (_, bounds, _) in bonuses {
        assert_that(&[35, 135, 235, 335].contains(&bounds.position.x)).is_true();
    }
}
