use bevy_ecs::{
    entity::Entity,
    query::{With, Without},
    system::{Commands, Query, Res},
};
use tracing::trace;

use crate::constants::screen;
use crate::systems::{Active, Bonus, Bounds, Difficulty, Obstacle};

/// Moves a falling entity down by `speed` and reports whether it is still on screen.
pub fn fall(bounds: &mut Bounds, speed: i32) -> bool {
    bounds.position.y += speed;
    bounds.position.y <= screen::HEIGHT
}

/// Advances every active obstacle and bonus, retiring those that fell past the bottom edge.
pub fn movement_system(
    difficulty: Res<Difficulty>,
    mut obstacles: Query<(&mut Bounds, &mut Active), (With<Obstacle>, Without<Bonus>)>,
    mut bonuses: Query<(&mut Bounds, &mut Active), (With<Bonus>, Without<Obstacle>)>,
) {
    for (mut bounds, mut active) in obstacles.iter_mut().filter(|(_, active)| active.0) {
        if !fall(&mut bounds, difficulty.obstacle_speed) {
            active.0 = false;
        }
    }

    for (mut bounds, mut active) in bonuses.iter_mut().filter(|(_, active)| active.0) {
        if !fall(&mut bounds, difficulty.bonus_speed) {
            active.0 = false;
        }
    }
}

/// Despawns every entity that was marked inactive this frame.
pub fn purge_system(mut commands: Commands, entities: Query<(Entity, &Active)>) {
    for (entity, _) in entities.iter().filter(|(_, active)| !active.0) {
        trace!(?entity, "Purging inactive entity");
        commands.entity(entity).despawn();
    }
}
