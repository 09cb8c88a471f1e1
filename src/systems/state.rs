use bevy_ecs::{
    entity::Entity,
    event::EventReader,
    query::{Or, With},
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use tracing::{debug, info};

use crate::constants::player;
use crate::events::{GameCommand, GameEvent};
use crate::systems::{
    Bonus, Bounds, Difficulty, GameClock, Obstacle, PlayerControlled, ScoreResource, SpawnTimers, SurvivalTime,
};

/// The screen the game is currently on.
#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum GameStage {
    /// Title screen showing the high score.
    #[default]
    Menu,
    /// A run is in progress.
    Playing,
    /// The player crashed; the final score is shown until confirm is pressed.
    GameOver,
}

impl GameStage {
    /// The stage reached by pressing confirm, or `None` if confirm does nothing here.
    pub fn on_confirm(self) -> Option<GameStage> {
        match self {
            GameStage::Menu => Some(GameStage::Playing),
            GameStage::GameOver => Some(GameStage::Menu),
            GameStage::Playing => None,
        }
    }

    /// The stage reached when the player hits an obstacle, or `None` if no run is in progress.
    pub fn on_crash(self) -> Option<GameStage> {
        match self {
            GameStage::Playing => Some(GameStage::GameOver),
            GameStage::Menu | GameStage::GameOver => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameStage::Playing)
    }
}

/// Run condition for systems that only advance during a run.
pub fn is_playing(stage: Res<GameStage>) -> bool {
    stage.is_playing()
}

/// Applies confirm presses to the stage machine.
///
/// Each press is matched against the stage current at the time it is read, so a
/// single press never skips a screen. Starting a run clears the road, recenters
/// the player and restarts every timer from the current clock.
#[allow(clippy::too_many_arguments)]
pub fn stage_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    mut stage: ResMut<GameStage>,
    clock: Res<GameClock>,
    mut score: ResMut<ScoreResource>,
    mut survival: ResMut<SurvivalTime>,
    mut timers: ResMut<SpawnTimers>,
    mut difficulty: ResMut<Difficulty>,
    mut players: Query<&mut Bounds, With<PlayerControlled>>,
    road: Query<Entity, Or<(With<Obstacle>, With<Bonus>)>>,
) {
    for event in events.read() {
        let GameEvent::Command(GameCommand::Confirm) = event else {
            continue;
        };

        let Some(next) = stage.on_confirm() else {
            continue;
        };

        if next == GameStage::Playing {
            for mut bounds in players.iter_mut() {
                bounds.position.x = player::START.x;
            }

            let mut cleared = 0usize;
            for entity in road.iter() {
                commands.entity(entity).despawn();
                cleared += 1;
            }

            *timers = SpawnTimers::starting_at(clock.now_ms);
            *survival = SurvivalTime {
                started_ms: clock.now_ms,
                seconds: 0,
            };
            *difficulty = Difficulty::at(0);
            score.0 = 0;

            debug!(cleared, now_ms = clock.now_ms, "Session reset");
        }

        info!(from = ?*stage, to = ?next, "Stage transition");
        *stage = next;
    }
}
