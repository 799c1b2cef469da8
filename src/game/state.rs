//! The live contents of the level being played.

use smallvec::SmallVec;
use tracing::info;

use crate::constants::GHOST_COLORS;
use crate::entity::ghost::Ghost;
use crate::entity::player::Player;
use crate::entity::steering::Steering;
use crate::map::level::Levels;
use crate::map::rect::Rect;

/// Everything that changes while a level is played: what is left to eat, the ghosts,
/// and the player. Walls are fixed for the level's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelState {
    pub index: usize,
    pub walls: Vec<Rect>,
    pub dots: Vec<Rect>,
    pub power_pellets: Vec<Rect>,
    pub ghosts: SmallVec<[Ghost; 4]>,
    pub player: Player,
}

impl LevelState {
    /// Builds a fresh level from the table, with a new player carrying `score`.
    ///
    /// Returns `None` when there is no level at `index`, which is how running out of
    /// levels is signalled. Ghost colors follow layout scan order, and each ghost's
    /// first heading is drawn from `steering`.
    pub fn load(levels: &Levels, index: usize, score: u32, steering: &mut dyn Steering) -> Option<Self> {
        let layout = levels.layout(index)?;

        let ghosts = layout
            .ghost_spawns
            .iter()
            .zip(GHOST_COLORS.iter().cycle())
            .map(|(spawn, color)| Ghost::new(*spawn, *color, steering))
            .collect();

        info!(
            level = index + 1,
            dots = layout.dots.len(),
            power_pellets = layout.power_pellets.len(),
            ghosts = layout.ghost_spawns.len(),
            score,
            "Level loaded"
        );

        Some(Self {
            index,
            walls: layout.walls,
            dots: layout.dots,
            power_pellets: layout.power_pellets,
            ghosts,
            player: Player::new(layout.player_spawn, score),
        })
    }

    /// Whether every dot and every power pellet has been eaten.
    pub fn is_cleared(&self) -> bool {
        self.dots.is_empty() && self.power_pellets.is_empty()
    }
}
