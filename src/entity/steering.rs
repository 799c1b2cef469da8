//! Direction sources for ghosts.
//!
//! Ghosts never look at the board when they turn; they ask a [`Steering`] for a fresh
//! direction whenever they bump into a wall. Production play uses [`RandomSteering`],
//! tests and replays use [`ScriptedSteering`] to get exact trajectories.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::entity::direction::{Direction, DIRECTIONS};

/// Supplies the next direction a ghost should try.
pub trait Steering {
    fn choose(&mut self) -> Direction;
}

/// Picks uniformly among the four directions. It may repeat the direction that just
/// failed, or reverse.
#[derive(Debug, Clone)]
pub struct RandomSteering<R: Rng = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomSteering<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSteering<SmallRng> {
    /// A reproducible source, used when a seed is configured.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> Steering for RandomSteering<R> {
    fn choose(&mut self) -> Direction {
        DIRECTIONS[self.rng.random_range(0..DIRECTIONS.len())]
    }
}

/// Replays a fixed sequence of directions, wrapping around at the end.
///
/// An empty script always yields [`Direction::Up`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedSteering {
    script: Vec<Direction>,
    cursor: usize,
}

impl ScriptedSteering {
    pub fn new(script: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// A source that always answers with the same direction.
    pub fn constant(direction: Direction) -> Self {
        Self::new([direction])
    }

    /// How many directions have been handed out so far.
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl Steering for ScriptedSteering {
    fn choose(&mut self) -> Direction {
        let direction = match self.script.len() {
            0 => Direction::Up,
            len => self.script[self.cursor % len],
        };
        self.cursor += 1;
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_scripted_wraps() {
        let mut steering = ScriptedSteering::new([Direction::Left, Direction::Down]);
        let picks: Vec<_> = (0..5).map(|_| steering.choose()).collect();
        assert_eq!(
            picks,
            vec![Direction::Left, Direction::Down, Direction::Left, Direction::Down, Direction::Left]
        );
        assert_eq!(steering.calls(), 5);
    }

    #[test]
    fn test_empty_script() {
        let mut steering = ScriptedSteering::default();
        assert_eq!(steering.choose(), Direction::Up);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomSteering::seeded(42);
        let mut b = RandomSteering::seeded(42);
        for _ in 0..64 {
            assert_eq!(a.choose(), b.choose());
        }
    }

    #[test]
    fn test_random_covers_every_direction() {
        let mut steering = RandomSteering::seeded(7);
        let seen: HashSet<_> = (0..256).map(|_| steering.choose()).collect();
        assert_eq!(seen.len(), 4);
    }
}
