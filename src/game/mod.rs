//! This module contains the main game logic and state.

use std::time::Duration;

use strum_macros::AsRefStr;
use tracing::{debug, info, trace};

use crate::audio::{cue, Sound, SoundSink};
use crate::constants::{score, LEVEL_TRANSITION_PAUSE};
use crate::entity::steering::Steering;
use crate::error::{GameError, GameResult};
use crate::events::GameCommand;
use crate::map::level::Levels;

use self::state::LevelState;

pub mod state;

/// The top-level mode of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum GameStage {
    Menu,
    Playing,
    GameOver,
    Win,
}

/// One run of the game, from the menu through any number of plays.
///
/// The session owns the level table, the live level, and the direction source the
/// ghosts draw from. Time is never read from a clock here: every call that depends on
/// it takes `now`, a monotonic offset supplied by the caller.
pub struct Session {
    levels: Levels,
    steering: Box<dyn Steering>,
    stage: GameStage,
    level: LevelState,
    /// Simulation is frozen until this time after a level change.
    paused_until: Option<Duration>,
}

impl Session {
    /// Creates a session sitting in the menu with the first level preloaded.
    pub fn new(levels: Levels, mut steering: Box<dyn Steering>) -> GameResult<Self> {
        let level = LevelState::load(&levels, 0, 0, steering.as_mut())
            .ok_or_else(|| GameError::InvalidState("level table has no first level".to_string()))?;

        Ok(Self {
            levels,
            steering,
            stage: GameStage::Menu,
            level,
            paused_until: None,
        })
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn level(&self) -> &LevelState {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut LevelState {
        &mut self.level
    }

    /// Zero-based index of the level being played.
    pub fn level_index(&self) -> usize {
        self.level.index
    }

    pub fn score(&self) -> u32 {
        self.level.player.score
    }

    pub fn paused_until(&self) -> Option<Duration> {
        self.paused_until
    }

    pub fn is_paused(&self, now: Duration) -> bool {
        self.paused_until.is_some_and(|until| now < until)
    }

    fn set_stage(&mut self, stage: GameStage) {
        if self.stage != stage {
            info!(from = self.stage.as_ref(), to = stage.as_ref(), "Stage changed");
            self.stage = stage;
        }
    }

    /// Replaces the live level with a fresh copy of `index`, keeping `score`.
    ///
    /// Returns `false`, leaving the current level untouched, if there is no such level.
    fn load_level(&mut self, index: usize, score: u32) -> bool {
        match LevelState::load(&self.levels, index, score, self.steering.as_mut()) {
            Some(level) => {
                self.level = level;
                self.paused_until = None;
                true
            }
            None => false,
        }
    }

    /// Applies one input. Returns `false` when the game should exit.
    pub fn handle_command(&mut self, command: GameCommand) -> bool {
        match (self.stage, command) {
            (GameStage::Menu, GameCommand::Start) => {
                if self.load_level(0, 0) {
                    self.set_stage(GameStage::Playing);
                }
            }
            (GameStage::Menu, GameCommand::Quit) => {
                info!("Quit requested from the menu");
                return false;
            }
            (GameStage::Playing, GameCommand::Move(direction)) => {
                trace!(direction = direction.as_ref(), "Turn buffered");
                self.level.player.request(direction);
            }
            (GameStage::GameOver | GameStage::Win, GameCommand::Restart) => {
                let (index, score) = (self.level.index, self.score());
                if self.load_level(index, score) {
                    self.set_stage(GameStage::Playing);
                }
            }
            (GameStage::GameOver | GameStage::Win, GameCommand::ReturnToMenu) => {
                self.set_stage(GameStage::Menu);
            }
            (stage, command) => {
                trace!(stage = stage.as_ref(), ?command, "Command ignored");
            }
        }
        true
    }

    /// Advances the simulation by one frame.
    ///
    /// Does nothing unless a level is being played and any level-change pause has
    /// elapsed.
    pub fn tick(&mut self, now: Duration, audio: &mut dyn SoundSink) {
        if self.stage != GameStage::Playing {
            return;
        }
        if let Some(until) = self.paused_until {
            if now < until {
                return;
            }
            self.paused_until = None;
        }

        let level = &mut self.level;
        level.player.update(&level.walls);

        // Every ghost moves and collides, even after a lethal hit earlier in the frame.
        let mut caught = false;
        for ghost in level.ghosts.iter_mut() {
            ghost.update(&level.walls, now, self.steering.as_mut());
            if !ghost.rect.overlaps(&level.player.rect) {
                continue;
            }

            if ghost.is_vulnerable() {
                debug!(spawn = ?ghost.spawn(), "Ghost eaten");
                ghost.reset(self.steering.as_mut());
                level.player.score += score::GHOST;
                cue(audio, Sound::EatGhost);
            } else {
                caught = true;
                cue(audio, Sound::Death);
            }
        }

        let player = level.player.rect;
        let before = level.dots.len();
        level.dots.retain(|dot| !dot.overlaps(&player));
        let eaten = (before - level.dots.len()) as u32;
        if eaten > 0 {
            trace!(eaten, remaining = level.dots.len(), "Dots eaten");
            level.player.score += eaten * score::DOT;
        }

        let before = level.power_pellets.len();
        level.power_pellets.retain(|pellet| !pellet.overlaps(&player));
        for _ in level.power_pellets.len()..before {
            debug!(remaining = level.power_pellets.len(), "Power pellet eaten");
            level.player.score += score::POWER_PELLET;
            cue(audio, Sound::Powerup);
            for ghost in level.ghosts.iter_mut() {
                ghost.make_scared(now);
            }
        }

        // Pickups under the player still count on the frame it is caught.
        if caught {
            info!(score = level.player.score, "Player caught");
            self.set_stage(GameStage::GameOver);
            return;
        }

        if level.is_cleared() {
            cue(audio, Sound::LevelComplete);
            let (next, score) = (level.index + 1, level.player.score);
            if self.load_level(next, score) {
                self.level.player.reset_position();
                self.paused_until = Some(now + LEVEL_TRANSITION_PAUSE);
                debug!(
                    level = next + 1,
                    spawn = ?self.level.player.spawn(),
                    "Level complete, pausing before the next one"
                );
            } else {
                info!(score, "Final level complete");
                self.set_stage(GameStage::Win);
            }
        }
    }
}
