//! Ghosts: wall-bouncing wanderers that can be turned vulnerable for a while.

use std::time::Duration;

use glam::IVec2;
use tracing::trace;

use crate::constants::{palette, GHOST_NORMAL_SPEED, GHOST_SCARED_SPEED, SCARED_DURATION};
use crate::entity::direction::Direction;
use crate::entity::motion;
use crate::entity::steering::Steering;
use crate::map::rect::Rect;
use crate::render::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    pub rect: Rect,
    pub direction: Direction,
    color: Color,
    spawn: IVec2,
    /// Clock reading at which vulnerable mode ends. `None` while hunting.
    vulnerable_until: Option<Duration>,
}

impl Ghost {
    /// Creates a ghost on `spawn` heading in a direction drawn from `steering`.
    pub fn new(spawn: IVec2, color: Color, steering: &mut dyn Steering) -> Self {
        Self {
            rect: Rect::tile(spawn),
            direction: steering.choose(),
            color,
            spawn,
            vulnerable_until: None,
        }
    }

    pub fn spawn(&self) -> IVec2 {
        self.spawn
    }

    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable_until.is_some()
    }

    pub fn vulnerable_until(&self) -> Option<Duration> {
        self.vulnerable_until
    }

    /// Pixels travelled per frame in the current mode.
    pub fn speed(&self) -> i32 {
        if self.is_vulnerable() {
            GHOST_SCARED_SPEED
        } else {
            GHOST_NORMAL_SPEED
        }
    }

    /// The color the body is drawn in right now.
    pub fn color(&self) -> Color {
        if self.is_vulnerable() {
            palette::DARK_BLUE
        } else {
            self.color
        }
    }

    /// The body color used while hunting.
    pub fn base_color(&self) -> Color {
        self.color
    }

    /// Makes the ghost vulnerable until `now` plus the scared duration.
    pub fn make_scared(&mut self, now: Duration) {
        self.vulnerable_until = Some(now + SCARED_DURATION);
    }

    /// Sends the ghost back to its spawn cell in hunting mode with a fresh heading.
    pub fn reset(&mut self, steering: &mut dyn Steering) {
        self.rect = Rect::tile(self.spawn);
        self.vulnerable_until = None;
        self.direction = steering.choose();
    }

    /// Advances the ghost by one frame.
    pub fn update(&mut self, walls: &[Rect], now: Duration, steering: &mut dyn Steering) {
        if self.vulnerable_until.is_some_and(|until| now >= until) {
            trace!(spawn = ?self.spawn, "Ghost recovered");
            self.vulnerable_until = None;
        }

        match motion::try_move(&self.rect, self.direction, self.speed(), walls) {
            Some(moved) => self.rect = moved,
            None => self.direction = steering.choose(),
        }
    }
}
