//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::IVec2;

/// Target duration of a single frame (60 FPS).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

pub mod screen {
    use glam::UVec2;

    /// The size of the window and the playfield, in pixels.
    pub const SIZE: UVec2 = UVec2::new(400, 600);
    pub const WIDTH: i32 = SIZE.x as i32;
    pub const HEIGHT: i32 = SIZE.y as i32;

    /// Number of lanes across the road.
    pub const LANE_COUNT: u32 = 4;
    /// Width of a single lane, in pixels.
    pub const LANE_WIDTH: i32 = 100;
    /// Width of the painted separator between lanes.
    pub const LANE_MARKING_WIDTH: u32 = 4;
}

pub mod player {
    use glam::{IVec2, UVec2};

    pub const SIZE: UVec2 = UVec2::new(50, 80);
    /// Centered horizontally, 100px above the bottom edge.
    pub const START: IVec2 = IVec2::new(super::screen::WIDTH / 2 - 25, super::screen::HEIGHT - 100);
    /// Horizontal distance moved per frame while a direction key is held.
    pub const STEP: i32 = 10;
}

pub mod obstacle {
    use glam::UVec2;

    pub const SIZE: UVec2 = UVec2::new(50, 80);
    /// Horizontal offset inside the lane.
    pub const LANE_OFFSET: i32 = 25;
    /// Spawned fully above the top edge.
    pub const SPAWN_Y: i32 = -80;
}

pub mod bonus {
    use glam::UVec2;

    pub const SIZE: UVec2 = UVec2::new(30, 30);
    pub const LANE_OFFSET: i32 = 35;
    pub const SPAWN_Y: i32 = -20;
}

pub mod spawn {
    /// Milliseconds that must pass (strictly) between two obstacle spawns.
    pub const OBSTACLE_INTERVAL_MS: u64 = 1000;
    /// Milliseconds that must pass (strictly) between two bonus spawns.
    pub const BONUS_INTERVAL_MS: u64 = 3000;
}

pub mod difficulty {
    pub const OBSTACLE_BASE_SPEED: i32 = 6;
    pub const BONUS_BASE_SPEED: i32 = 2;
    /// Both speeds gain one pixel per frame every this many seconds survived.
    pub const SECONDS_PER_LEVEL: u32 = 5;
}

pub mod scoring {
    /// Points awarded per collected bonus.
    pub const BONUS_VALUE: u32 = 5;
}

pub mod ui {
    use sdl2::pixels::Color;

    pub const FONT_SIZE: u16 = 24;

    pub const BACKGROUND: Color = Color::RGB(30, 30, 30);
    pub const LANE_MARKING: Color = Color::RGB(200, 200, 200);
    pub const BONUS: Color = Color::RGB(255, 255, 0);
    pub const TEXT: Color = Color::RGB(255, 255, 255);
    pub const GAME_OVER_TEXT: Color = Color::RGB(255, 50, 50);

    /// Top-left corners of each line of text, per screen.
    pub mod layout {
        use glam::IVec2;

        pub const MENU_PROMPT: IVec2 = IVec2::new(80, 250);
        pub const MENU_HIGH_SCORE: IVec2 = IVec2::new(110, 300);

        pub const HUD_SCORE: IVec2 = IVec2::new(10, 10);
        pub const HUD_TIME: IVec2 = IVec2::new(10, 40);

        pub const GAME_OVER_TITLE: IVec2 = IVec2::new(120, 230);
        pub const GAME_OVER_SCORE: IVec2 = IVec2::new(130, 270);
        pub const GAME_OVER_PROMPT: IVec2 = IVec2::new(110, 310);
    }
}

pub mod audio {
    pub const FREQUENCY: i32 = 44_100;
    /// Stereo output.
    pub const CHANNELS: i32 = 2;
    pub const CHUNK_SIZE: i32 = 2048;
    /// Mixing channels allocated for sound effects.
    pub const EFFECT_CHANNELS: i32 = 8;
}

/// Window title.
pub const TITLE: &str = "Car Dodging";

/// Horizontal pixel position of the left edge of `lane`, before any entity offset.
pub const fn lane_origin(lane: u32) -> i32 {
    lane as i32 * screen::LANE_WIDTH
}

/// Returns the top-left corner of an entity spawned into `lane`.
pub const fn lane_spawn_position(lane: u32, lane_offset: i32, spawn_y: i32) -> IVec2 {
    IVec2::new(lane_origin(lane) + lane_offset, spawn_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_lanes_cover_screen() {
        assert_eq!(screen::LANE_WIDTH * screen::LANE_COUNT as i32, screen::WIDTH);
    }

    #[test]
    fn test_player_start_is_centered() {
        assert_eq!(player::START.x, 175);
        assert_eq!(player::START.y, 500);
        assert_eq!(player::START.x * 2 + player::SIZE.x as i32, screen::WIDTH);
    }

    #[test]
    fn test_lane_spawn_positions() {
        let xs: Vec<i32> = (0..screen::LANE_COUNT)
            .map(|lane| lane_spawn_position(lane, obstacle::LANE_OFFSET, obstacle::SPAWN_Y).x)
            .collect();
        assert_eq!(xs, vec![25, 125, 225, 325]);

        let xs: Vec<i32> = (0..screen::LANE_COUNT)
            .map(|lane| lane_spawn_position(lane, bonus::LANE_OFFSET, bonus::SPAWN_Y).x)
            .collect();
        assert_eq!(xs, vec![35, 135, 235, 335]);
    }

    #[test]
    fn test_spawned_entities_fit_inside_their_lane() {
        assert!(obstacle::LANE_OFFSET + obstacle::SIZE.x as i32 <= screen::LANE_WIDTH);
        assert!(bonus::LANE_OFFSET + bonus::SIZE.x as i32 <= screen::LANE_WIDTH);
    }

    #[test]
    fn test_spawn_intervals() {
        assert!(spawn::BONUS_INTERVAL_MS > spawn::OBSTACLE_INTERVAL_MS);
    }
}
