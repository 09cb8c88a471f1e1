use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::debug;

use crate::constants::difficulty::{BONUS_BASE_SPEED, OBSTACLE_BASE_SPEED, SECONDS_PER_LEVEL};
use crate::systems::{GameClock, SurvivalTime};

/// Fall speeds for the current frame, in pixels per frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    pub obstacle_speed: i32,
    pub bonus_speed: i32,
}

impl Difficulty {
    /// Speeds after surviving `seconds`. Both gain one pixel per frame every five seconds, without limit.
    pub fn at(seconds: u32) -> Self {
        let level = (seconds / SECONDS_PER_LEVEL) as i32;
        Self {
            obstacle_speed: OBSTACLE_BASE_SPEED + level,
            bonus_speed: BONUS_BASE_SPEED + level,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::at(0)
    }
}

/// Whole seconds between `started_ms` and `now_ms`.
pub fn elapsed_seconds(started_ms: u64, now_ms: u64) -> u32 {
    (now_ms.saturating_sub(started_ms) / 1000) as u32
}

/// Recomputes the survival time and the resulting fall speeds.
pub fn difficulty_system(clock: Res<GameClock>, mut survival: ResMut<SurvivalTime>, mut difficulty: ResMut<Difficulty>) {
    let seconds = elapsed_seconds(survival.started_ms, clock.now_ms);
    if seconds != survival.seconds {
        survival.seconds = seconds;
    }

    let next = Difficulty::at(seconds);
    if next != *difficulty {
        debug!(seconds, obstacle_speed = next.obstacle_speed, bonus_speed = next.bonus_speed, "Difficulty increased");
        *difficulty = next;
    }
}
