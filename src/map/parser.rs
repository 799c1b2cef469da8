//! Map parsing functionality for converting raw level layouts into structured data.

use glam::IVec2;
use smallvec::SmallVec;

use crate::error::ParseError;

/// An enum representing the different types of tiles in a level layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Walkable floor with nothing on it.
    Empty,
    /// A wall tile.
    Wall,
    /// Floor holding a dot.
    Dot,
    /// Floor holding a power pellet.
    PowerPellet,
    /// The player's starting cell.
    PlayerSpawn,
    /// A ghost's starting cell.
    GhostSpawn,
}

/// Represents the parsed data from a raw level layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLevel {
    /// Tiles in row-major order, `tiles[row][column]`.
    pub tiles: Vec<Vec<Tile>>,
    /// Number of columns in every row.
    pub columns: usize,
    /// The player's starting cell, if the layout marks one. The last marker wins.
    pub player_start: Option<IVec2>,
    /// Ghost starting cells in scan order (top-to-bottom, left-to-right).
    pub ghost_starts: SmallVec<[IVec2; 4]>,
}

impl ParsedLevel {
    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    /// Every tile with its cell coordinate, in scan order.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (IVec2::new(x as i32, y as i32), *tile))
        })
    }
}

/// Parser for converting raw level layouts into structured level data.
pub struct LevelParser;

impl LevelParser {
    /// Parses a single layout character, or `None` if it is not part of the alphabet.
    pub fn parse_character(c: char) -> Option<Tile> {
        match c {
            'W' => Some(Tile::Wall),
            '.' => Some(Tile::Dot),
            'O' => Some(Tile::PowerPellet),
            'P' => Some(Tile::PlayerSpawn),
            'G' => Some(Tile::GhostSpawn),
            ' ' => Some(Tile::Empty),
            _ => None,
        }
    }

    /// Parses the rows of one level.
    ///
    /// `level` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, if its rows differ in width, or if it
    /// contains a character outside the level alphabet.
    pub fn parse(level: usize, rows: &[&str]) -> Result<ParsedLevel, ParseError> {
        let first = rows.first().ok_or(ParseError::EmptyLayout(level))?;
        let columns = first.chars().count();

        let mut tiles = Vec::with_capacity(rows.len());
        let mut player_start = None;
        let mut ghost_starts = SmallVec::new();

        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(ParseError::RaggedRow {
                    level,
                    row: y,
                    expected: columns,
                    found,
                });
            }

            let mut row = Vec::with_capacity(columns);
            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character).ok_or(ParseError::UnknownCharacter {
                    level,
                    row: y,
                    column: x,
                    character,
                })?;

                let cell = IVec2::new(x as i32, y as i32);
                match tile {
                    Tile::PlayerSpawn => player_start = Some(cell),
                    Tile::GhostSpawn => ghost_starts.push(cell),
                    _ => {}
                }
                row.push(tile);
            }
            tiles.push(row);
        }

        Ok(ParsedLevel {
            tiles,
            columns,
            player_start,
            ghost_starts,
        })
    }
}
