//! This module contains all the constants used in the game.

use std::time::Duration;

use crate::render::Color;

/// The target simulation rate, in frames per second.
pub const DEFAULT_FPS: u32 = 60;

/// The size of each cell, in pixels.
pub const TILE_SIZE: i32 = 30;

/// How far the player moves each frame, in pixels. Must divide [`TILE_SIZE`].
pub const PLAYER_SPEED: i32 = 5;
/// Ghost speed while hunting.
pub const GHOST_NORMAL_SPEED: i32 = 2;
/// Ghost speed while vulnerable.
pub const GHOST_SCARED_SPEED: i32 = 1;

/// The widest the player's mouth opens, in degrees.
pub const MOUTH_MAX_ANGLE: i32 = 45;
/// How much the mouth opens or closes per frame, in degrees.
pub const MOUTH_STEP: i32 = 5;

/// How long ghosts stay vulnerable after a power pellet is eaten.
pub const SCARED_DURATION: Duration = Duration::from_millis(5000);
/// Freeze between a completed level and the next one.
pub const LEVEL_TRANSITION_PAUSE: Duration = Duration::from_millis(1000);

pub mod score {
    pub const DOT: u32 = 10;
    pub const POWER_PELLET: u32 = 50;
    pub const GHOST: u32 = 200;
}

/// Edge lengths of collectible hitboxes, in pixels. Both are centered in their cell.
pub mod pickup {
    pub const DOT_SIZE: i32 = 4;
    pub const POWER_PELLET_SIZE: i32 = 12;
}

pub mod palette {
    use crate::render::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const PINK: Color = Color::rgb(255, 182, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const ORANGE: Color = Color::rgb(255, 182, 85);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 139);
}

/// Ghost body colors, handed out round-robin in layout scan order.
pub const GHOST_COLORS: [Color; 4] = [palette::RED, palette::PINK, palette::CYAN, palette::ORANGE];

/// Where the player starts when a layout has no `P` marker.
pub const FALLBACK_PLAYER_CELL: (i32, i32) = (1, 1);

/// The authored levels, played in order. Every level must share the dimensions of the first.
pub const LEVELS: [&[&str]; 2] = [
    &[
        "WWWWWWWWWWWWWWWWWWWW",
        "W..................W",
        "W.WW.WWW.WW.WWW.WW.W",
        "W.WW.WWW.WW.WWW.WW.W",
        "W.O................W",
        "W.WW.W.WWWWWW.W.WW.W",
        "W....W...WW...W....W",
        "WWWW.WWW.WW.WWW.WWWW",
        "   W.W...GG...W.W   ",
        "WWWW.W.WWWWWW.W.WWWW",
        "W..........P.......W",
        "W.WW.WWWWWWWWWW.WW.W",
        "W..W.....WW.....W..W",
        "WW.W.WWW.WW.WWW.W.WW",
        "W....W...O....W....W",
        "W.WWWW.WWWWWW.WWWW.W",
        "W..................W",
        "WWWWWWWWWWWWWWWWWWWW",
    ],
    &[
        "WWWWWWWWWWWWWWWWWWWW",
        "W.O..W........W..O.W",
        "W.WW.W.WWWWWW.W.WW.W",
        "W..................W",
        "WW.W.WW.WWWW.WW.W.WW",
        "W..W....G..G....W..W",
        "W.WWWWWW.WW.WWWWWW.W",
        "W........WW........W",
        "WWWWWW.W.WW.W.WWWWWW",
        "W......W.GG.W......W",
        "W.WWWW.W.WW.W.WWWW.W",
        "W.O....W.P..W....O.W",
        "WWWWWW.WWWWWW.WWWWWW",
        "W..................W",
        "W.WW.WWWWWWWWWW.WW.W",
        "W..................W",
        "WWWWWWWWWWWWWWWWWWWW",
        "WWWWWWWWWWWWWWWWWWWW",
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_speed_divides_tile() {
        assert_eq!(TILE_SIZE % PLAYER_SPEED, 0);
    }

    #[test]
    fn test_level_dimensions_match_first_level() {
        let rows = LEVELS[0].len();
        let columns = LEVELS[0][0].len();
        for level in LEVELS.iter() {
            assert_eq!(level.len(), rows);
            for row in level.iter() {
                assert_eq!(row.len(), columns);
            }
        }
    }

    #[test]
    fn test_levels_have_player_and_ghosts() {
        for level in LEVELS.iter() {
            let players: usize = level.iter().map(|row| row.matches('P').count()).sum();
            let ghosts: usize = level.iter().map(|row| row.matches('G').count()).sum();
            assert_eq!(players, 1);
            assert!((1..=GHOST_COLORS.len()).contains(&ghosts));
        }
    }

    #[test]
    fn test_scared_duration() {
        assert_eq!(SCARED_DURATION.as_millis(), 5000);
    }

    #[test]
    fn test_score_ordering() {
        assert!(score::DOT < score::POWER_PELLET);
        assert!(score::POWER_PELLET < score::GHOST);
    }
}
