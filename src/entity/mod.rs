//! The moving pieces on the board: the player, the ghosts, and what steers them.

pub mod direction;
pub mod ghost;
pub mod motion;
pub mod player;
pub mod steering;
