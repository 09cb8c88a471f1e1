use bevy_ecs::system::RunSystemOnce;
use car_dodge::systems::{fall, movement_system, purge_system, Bounds, Difficulty};
use glam::{IVec2, UVec2};
use speculoos::prelude::*;

mod common;

#[test]
fn test_fall_reports_when_off_screen() {
    let mut bounds = Bounds::new(IVec2::new(25, 594), UVec2::new(50, 80));
    assert_that(&fall(&mut bounds, 6)).is_true();
    assert_that(&bounds.position.y).is_equal_to(600);

    assert_that(&fall(&mut bounds, 1)).is_false();
    assert_that(&bounds.position.y).is_equal_to(601);
}

#[test]
fn test_obstacle_leaves_after_114_steps() {
    let mut world = common::create_playing_world(0);
    world.insert_resource(Difficulty::at(0));
    let entity = common::spawn_obstacle_at(&mut world, IVec2::new(25, -80));

    for _ in 0..113 {
        world.run_system_once(movement_system).expect("System should run successfully");
    }
    let (_, bounds, active) = common::obstacles(&mut world)[0];
    assert_that(&bounds.position.y).is_equal_to(598);
    assert_that(&active).is_true();

    world.run_system_once(movement_system).expect("System should run successfully");
    let (_, _, active) = common::obstacles(&mut world)[0];
    assert_that(&active).is_false();

    world.run_system_once(purge_system).expect("System should run successfully");
    assert_that(&world.get_entity(entity).is_err()).is_true();
}

#[test]
fn test_bonuses_fall_at_their_own_speed() {
    let mut world = common::create_playing_world(0);
    world.insert_resource(Difficulty::at(10));
    common::spawn_bonus_at(&mut world, IVec2::new(35, -20));
    common::spawn_obstacle_at(&mut world, IVec2::new(25, -80));

    world.run_system_once(movement_system).expect("System should run successfully");

    assert_that(&common::bonuses(&mut world)[0].1.position.y).is_equal_to(-16);
    assert_that(&common::obstacles(&mut world)[0].1.position.y).is_equal_to(-72);
}

#[test]
fn test_player_does_not_fall() {
    let mut world = common::create_playing_world(0);
    let before = common::player_bounds(&mut world);

    world.run_system_once(movement_system).expect("System should run successfully");

    assert_that(&common::player_bounds(&mut world)).is_equal_to(before);
}
