use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{With, Without},
    system::{Query, ResMut},
};
use tracing::{debug, info};

use crate::audio::Sound;
use crate::constants::scoring::BONUS_VALUE;
use crate::error::GameError;
use crate::events::AudioEvent;
use crate::systems::{
    state::GameStage, Active, Bonus, Bounds, HighScoreResource, Obstacle, PlayerControlled, ScoreResource,
};

/// Resolves contacts between the player and everything falling down the road.
///
/// Bonuses are settled before obstacles, so a star grabbed on the same frame as
/// a crash still counts toward the final score. Only the first obstacle hit ends
/// the run; nothing else is touched once the stage has left `Playing`.
#[allow(clippy::too_many_arguments)]
pub fn collision_system(
    mut stage: ResMut<GameStage>,
    mut score: ResMut<ScoreResource>,
    mut high_score: ResMut<HighScoreResource>,
    players: Query<&Bounds, With<PlayerControlled>>,
    mut bonuses: Query<(Entity, &Bounds, &mut Active), (With<Bonus>, Without<Obstacle>, Without<PlayerControlled>)>,
    mut obstacles: Query<(Entity, &Bounds, &mut Active), (With<Obstacle>, Without<Bonus>, Without<PlayerControlled>)>,
    mut audio: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    if !stage.is_playing() {
        return;
    }

    let player = match players.single() {
        Ok(player) => player,
        Err(e) => {
            errors.write(GameError::InvalidState(format!("Player not found: {}", e)));
            return;
        }
    };

    for (entity, bounds, mut active) in bonuses.iter_mut() {
        if !active.0 || !player.overlaps(bounds) {
            continue;
        }

        active.0 = false;
        score.0 += BONUS_VALUE;
        audio.write(AudioEvent::PlaySound(Sound::Collect));
        debug!(?entity, score = score.0, "Bonus collected");
    }

    for (entity, bounds, mut active) in obstacles.iter_mut() {
        if !active.0 || !player.overlaps(bounds) {
            continue;
        }

        let Some(next) = stage.on_crash() else {
            return;
        };

        active.0 = false;
        *stage = next;
        let new_record = high_score.record(score.0);
        audio.write(AudioEvent::PlaySound(Sound::Crash));
        info!(?entity, score = score.0, high_score = high_score.0, new_record, "Player crashed");
        return;
    }
}
