use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Query, Res},
};

use crate::constants::{player, screen};
use crate::error::GameError;
use crate::systems::{input::HeldDirections, Bounds, PlayerControlled};

/// Horizontal position after one frame of steering.
///
/// Left and right are applied one after the other, each clamped to the road,
/// so holding both keys near an edge can still move the car.
pub fn steer(x: i32, width: u32, held: HeldDirections) -> i32 {
    let max_x = screen::WIDTH - width as i32;
    let mut x = x;

    if held.contains(HeldDirections::LEFT) {
        x = (x - player::STEP).clamp(0, max_x);
    }
    if held.contains(HeldDirections::RIGHT) {
        x = (x + player::STEP).clamp(0, max_x);
    }

    x
}

pub fn player_steering_system(
    held: Res<HeldDirections>,
    mut players: Query<&mut Bounds, With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    let mut bounds = match players.single_mut() {
        Ok(bounds) => bounds,
        Err(e) => {
            errors.write(GameError::InvalidState(format!("Player not found: {}", e)));
            return;
        }
    };

    if held.is_empty() {
        return;
    }

    bounds.position.x = steer(bounds.position.x, bounds.size.x, *held);
}
