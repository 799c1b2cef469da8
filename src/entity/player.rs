//! The player-controlled character.
//!
//! Movement is pixel-stepped along a tile grid. Turn requests are buffered and only
//! committed where the board allows them: a reversal applies at once, any other turn
//! waits until the character sits exactly on a tile and the neighbouring cell is free.

use glam::IVec2;

use crate::constants::{MOUTH_MAX_ANGLE, MOUTH_STEP, PLAYER_SPEED, TILE_SIZE};
use crate::entity::direction::Direction;
use crate::entity::motion;
use crate::map::rect::Rect;

/// The chomping animation: an angle that sweeps between closed and fully open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mouth {
    angle: i32,
    opening: bool,
}

impl Default for Mouth {
    fn default() -> Self {
        Self { angle: 0, opening: true }
    }
}

impl Mouth {
    /// Half-angle of the mouth opening, in degrees.
    pub fn angle(&self) -> i32 {
        self.angle
    }

    fn advance(&mut self) {
        if self.opening {
            self.angle += MOUTH_STEP;
            if self.angle >= MOUTH_MAX_ANGLE {
                self.opening = false;
            }
        } else {
            self.angle -= MOUTH_STEP;
            if self.angle <= 0 {
                self.opening = true;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub rect: Rect,
    pub direction: Option<Direction>,
    /// The most recent turn request, held until it can be applied.
    pub next_direction: Option<Direction>,
    pub score: u32,
    spawn: IVec2,
    mouth: Mouth,
}

impl Player {
    /// Creates a stationary player on `spawn`, carrying `score` over from a previous level.
    pub fn new(spawn: IVec2, score: u32) -> Self {
        Self {
            rect: Rect::tile(spawn),
            direction: None,
            next_direction: None,
            score,
            spawn,
            mouth: Mouth::default(),
        }
    }

    pub fn spawn(&self) -> IVec2 {
        self.spawn
    }

    pub fn mouth(&self) -> Mouth {
        self.mouth
    }

    pub fn is_moving(&self) -> bool {
        self.direction.is_some()
    }

    /// Buffers a turn request, replacing any earlier one.
    pub fn request(&mut self, direction: Direction) {
        self.next_direction = Some(direction);
    }

    /// Puts the player back on its spawn cell, stopped, with nothing buffered.
    pub fn reset_position(&mut self) {
        self.rect = Rect::tile(self.spawn);
        self.direction = None;
        self.next_direction = None;
        self.mouth = Mouth::default();
    }

    /// Advances the player by one frame.
    pub fn update(&mut self, walls: &[Rect]) {
        if self.is_moving() {
            self.mouth.advance();
        } else {
            self.mouth = Mouth::default();
        }

        // Reversing never needs a wall check: the cell behind is the one we came from.
        if let (Some(current), Some(next)) = (self.direction, self.next_direction) {
            if next == current.opposite() {
                self.direction = Some(next);
                self.next_direction = None;
            }
        }

        if let Some(next) = self.next_direction {
            if self.rect.is_aligned() {
                let neighbour = self.rect.translate(next.as_ivec2() * TILE_SIZE);
                if !motion::collides(&neighbour, walls) {
                    self.direction = Some(next);
                    self.next_direction = None;
                }
            }
        }

        if let Some(direction) = self.direction {
            match motion::try_move(&self.rect, direction, PLAYER_SPEED, walls) {
                Some(moved) => self.rect = moved,
                None => {
                    self.rect = self.rect.snapped();
                    self.direction = None;
                }
            }
        }
    }
}
