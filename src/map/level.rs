//! The validated level table and the per-level collections derived from it.

use glam::{IVec2, UVec2};
use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{pickup, FALLBACK_PLAYER_CELL, LEVELS, TILE_SIZE};
use crate::error::ParseError;
use crate::map::parser::{LevelParser, ParsedLevel, Tile};
use crate::map::rect::Rect;

/// Static geometry of one level, in pixel space.
///
/// Every collection is ordered row-major (top-to-bottom, left-to-right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub walls: Vec<Rect>,
    pub dots: Vec<Rect>,
    pub power_pellets: Vec<Rect>,
    pub ghost_spawns: SmallVec<[IVec2; 4]>,
    pub player_spawn: IVec2,
}

impl Layout {
    fn from_parsed(parsed: &ParsedLevel) -> Self {
        let mut walls = Vec::new();
        let mut dots = Vec::new();
        let mut power_pellets = Vec::new();

        for (cell, tile) in parsed.cells() {
            match tile {
                Tile::Wall => walls.push(Rect::tile(cell)),
                Tile::Dot => dots.push(Rect::centered_in(cell, pickup::DOT_SIZE)),
                Tile::PowerPellet => power_pellets.push(Rect::centered_in(cell, pickup::POWER_PELLET_SIZE)),
                Tile::Empty | Tile::PlayerSpawn | Tile::GhostSpawn => {}
            }
        }

        let (x, y) = FALLBACK_PLAYER_CELL;
        Self {
            walls,
            dots,
            power_pellets,
            ghost_spawns: parsed.ghost_starts.clone(),
            player_spawn: parsed.player_start.unwrap_or(IVec2::new(x, y)),
        }
    }
}

/// All playable levels, parsed once and checked to share the geometry of the first.
#[derive(Debug, Clone)]
pub struct Levels {
    parsed: Vec<ParsedLevel>,
    dimensions: UVec2,
}

impl Levels {
    /// Parses and validates a level table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, if any layout fails to parse, or if a
    /// layout's row or column count differs from the first level's.
    pub fn new(layouts: &[&[&str]]) -> Result<Self, ParseError> {
        if layouts.is_empty() {
            return Err(ParseError::NoLevels);
        }

        let parsed = layouts
            .iter()
            .enumerate()
            .map(|(index, rows)| LevelParser::parse(index, rows))
            .collect::<Result<Vec<_>, _>>()?;

        let (columns, rows) = (parsed[0].columns, parsed[0].rows());
        for (index, level) in parsed.iter().enumerate().skip(1) {
            if level.columns != columns || level.rows() != rows {
                return Err(ParseError::DimensionMismatch {
                    level: index,
                    expected_columns: columns,
                    expected_rows: rows,
                    found_columns: level.columns,
                    found_rows: level.rows(),
                });
            }
        }

        debug!(levels = parsed.len(), columns, rows, "Level table validated");
        Ok(Self {
            parsed,
            dimensions: UVec2::new(columns as u32, rows as u32),
        })
    }

    /// The levels compiled into the game.
    pub fn authored() -> Result<Self, ParseError> {
        Self::new(&LEVELS)
    }

    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }

    /// Columns and rows shared by every level.
    pub fn dimensions(&self) -> UVec2 {
        self.dimensions
    }

    /// Size of the playfield in pixels.
    pub fn pixel_size(&self) -> UVec2 {
        self.dimensions * TILE_SIZE as u32
    }

    /// Builds the geometry of a level, or `None` if there is no level at `index`.
    pub fn layout(&self, index: usize) -> Option<Layout> {
        self.parsed.get(index).map(Layout::from_parsed)
    }
}
