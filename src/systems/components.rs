use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::{IVec2, UVec2};
use sdl2::rect::Rect;

use crate::constants::{self, bonus, obstacle, player};

/// A tag component for the car steered by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// A tag component for enemy cars coming down the road.
#[derive(Default, Component)]
pub struct Obstacle;

/// A tag component for collectible stars.
#[derive(Default, Component)]
pub struct Bonus;

/// Axis-aligned bounding rectangle, in screen pixels. `position` is the top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub position: IVec2,
    pub size: UVec2,
}

impl Bounds {
    pub const fn new(position: IVec2, size: UVec2) -> Self {
        Self { position, size }
    }

    pub fn left(&self) -> i32 {
        self.position.x
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.x as i32
    }

    pub fn top(&self) -> i32 {
        self.position.y
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.y as i32
    }

    /// Returns true if the two rectangles share a non-empty area.
    ///
    /// Rectangles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        if self.size.x == 0 || self.size.y == 0 || other.size.x == 0 || other.size.y == 0 {
            return false;
        }

        self.left() < other.right() && other.left() < self.right() && self.top() < other.bottom() && other.top() < self.bottom()
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }
}

/// Whether a falling entity still takes part in the simulation.
///
/// Inactive entities are despawned at the end of the frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Active(pub bool);

impl Default for Active {
    fn default() -> Self {
        Active(true)
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub bounds: Bounds,
}

impl Default for PlayerBundle {
    fn default() -> Self {
        Self {
            player: PlayerControlled,
            bounds: Bounds::new(player::START, player::SIZE),
        }
    }
}

#[derive(Bundle)]
pub struct ObstacleBundle {
    pub obstacle: Obstacle,
    pub bounds: Bounds,
    pub active: Active,
}

impl ObstacleBundle {
    /// An obstacle sitting just above the top edge of `lane`.
    pub fn in_lane(lane: u32) -> Self {
        Self {
            obstacle: Obstacle,
            bounds: Bounds::new(
                constants::lane_spawn_position(lane, obstacle::LANE_OFFSET, obstacle::SPAWN_Y),
                obstacle::SIZE,
            ),
            active: Active::default(),
        }
    }
}

#[derive(Bundle)]
pub struct BonusBundle {
    pub bonus: Bonus,
    pub bounds: Bounds,
    pub active: Active,
}

impl BonusBundle {
    pub fn in_lane(lane: u32) -> Self {
        Self {
            bonus: Bonus,
            bounds: Bounds::new(
                constants::lane_spawn_position(lane, bonus::LANE_OFFSET, bonus::SPAWN_Y),
                bonus::SIZE,
            ),
            active: Active::default(),
        }
    }
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
}

/// The frame's timestamp, in milliseconds since the application started.
///
/// Written once per tick before the schedule runs; systems never read the real clock.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    pub now_ms: u64,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

/// Best score seen since the process started.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreResource(pub u32);

impl HighScoreResource {
    /// Raises the high score to `score` if it is better. Returns true if it changed.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

/// How long the current run has lasted.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SurvivalTime {
    /// Clock time at which the run started.
    pub started_ms: u64,
    /// Whole seconds survived so far.
    pub seconds: u32,
}

/// Tracks whether the window currently has keyboard focus.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFocus(pub bool);

impl Default for WindowFocus {
    fn default() -> Self {
        WindowFocus(true)
    }
}

