use std::time::{SystemTime, UNIX_EPOCH};

use bevy_ecs::{
    resource::Resource,
    system::{Commands, Res, ResMut},
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::debug;

use crate::constants::{screen::LANE_COUNT, spawn};
use crate::systems::{BonusBundle, GameClock, ObstacleBundle};

/// Last time each kind of entity was spawned, in clock milliseconds.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimers {
    pub last_obstacle_ms: u64,
    pub last_bonus_ms: u64,
}

impl SpawnTimers {
    /// Timers that were both just reset at `now_ms`.
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            last_obstacle_ms: now_ms,
            last_bonus_ms: now_ms,
        }
    }
}

/// Source of lane choices.
#[derive(Resource)]
pub struct LaneRng(SmallRng);

impl LaneRng {
    /// A generator seeded from the wall clock, so every launch plays differently.
    pub fn from_wall_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        debug!(seed, "Seeding lane generator");
        Self::seeded(seed)
    }

    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Picks a lane uniformly from `0..LANE_COUNT`.
    pub fn next_lane(&mut self) -> u32 {
        self.0.random_range(0..LANE_COUNT)
    }
}

/// Returns true once strictly more than `interval_ms` has passed since `last_ms`.
pub fn interval_elapsed(now_ms: u64, last_ms: u64, interval_ms: u64) -> bool {
    now_ms.saturating_sub(last_ms) > interval_ms
}

/// Drops a new obstacle every second and a new bonus every three seconds,
/// each into a random lane.
pub fn spawn_system(mut commands: Commands, clock: Res<GameClock>, mut timers: ResMut<SpawnTimers>, mut rng: ResMut<LaneRng>) {
    if interval_elapsed(clock.now_ms, timers.last_obstacle_ms, spawn::OBSTACLE_INTERVAL_MS) {
        let lane = rng.next_lane();
        let entity = commands.spawn(ObstacleBundle::in_lane(lane)).id();
        timers.last_obstacle_ms = clock.now_ms;
        debug!(?entity, lane, "Obstacle spawned");
    }

    if interval_elapsed(clock.now_ms, timers.last_bonus_ms, spawn::BONUS_INTERVAL_MS) {
        let lane = rng.next_lane();
        let entity = commands.spawn(BonusBundle::in_lane(lane)).id();
        timers.last_bonus_ms = clock.now_ms;
        debug!(?entity, lane, "Bonus spawned");
    }
}
