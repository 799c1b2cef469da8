use glam::IVec2;
use strum_macros::{AsRefStr, EnumIter};

/// One of the four cardinal directions. "Not moving" is `Option<Direction>::None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The unit step in screen space, where `y` grows downward.
    pub const fn as_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    /// Facing angle in degrees, counter-clockwise from the positive x axis.
    pub const fn angle_degrees(self) -> i32 {
        match self {
            Direction::Right => 0,
            Direction::Up => 90,
            Direction::Left => 180,
            Direction::Down => 270,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(direction: Direction) -> Self {
        direction.as_ivec2()
    }
}

pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
