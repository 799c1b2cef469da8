//! The movement primitive shared by the player and the ghosts.

use crate::entity::direction::Direction;
use crate::map::rect::Rect;

/// Whether `rect` overlaps any wall.
pub fn collides(rect: &Rect, walls: &[Rect]) -> bool {
    walls.iter().any(|wall| rect.overlaps(wall))
}

/// Translates `rect` one step of `speed` pixels, or returns `None` if the result would
/// overlap a wall.
pub fn try_move(rect: &Rect, direction: Direction, speed: i32, walls: &[Rect]) -> Option<Rect> {
    let candidate = rect.translate(direction.as_ivec2() * speed);
    (!collides(&candidate, walls)).then_some(candidate)
}
