use glam::IVec2;
use pacman_3002::entity::direction::{Direction, DIRECTIONS};
use pacman_3002::entity::motion::collides;
use pacman_3002::entity::player::Player;
use pacman_3002::map::level::Levels;
use pacman_3002::map::rect::Rect;
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use speculoos::prelude::*;

const JUNCTION: &[&str] = &["WWWWWW", "WP   W", "WW WWW", "WW WWW", "WWWWWW"];

fn walls(layout: &[&str]) -> Vec<Rect> {
    Levels::new(&[layout]).unwrap().layout(0).unwrap().walls
}

#[test]
fn test_reversal_is_immediate_off_grid() {
    let walls = walls(JUNCTION);
    let mut player = Player::new(IVec2::new(1, 1), 0);
    player.request(Direction::Right);
    player.update(&walls);
    player.update(&walls);
    assert_that(&player.rect.is_aligned()).is_false();
    assert_eq!(player.rect.position(), IVec2::new(40, 30));

    player.request(Direction::Left);
    player.update(&walls);

    assert_eq!(player.direction, Some(Direction::Left));
    assert_eq!(player.next_direction, None);
    assert_eq!(player.rect.position(), IVec2::new(35, 30));
}

#[test]
fn test_turn_waits_for_alignment() {
    let walls = walls(JUNCTION);
    let mut player = Player::new(IVec2::new(1, 1), 0);
    player.request(Direction::Right);
    player.update(&walls);

    player.request(Direction::Down);
    for _ in 0..5 {
        player.update(&walls);
        assert_eq!(player.direction, Some(Direction::Right));
        assert_eq!(player.next_direction, Some(Direction::Down));
    }
    assert_eq!(player.rect.position(), IVec2::new(60, 30));

    player.update(&walls);
    assert_eq!(player.direction, Some(Direction::Down));
    assert_eq!(player.next_direction, None);
    assert_eq!(player.rect.position(), IVec2::new(60, 35));
}

#[test]
fn test_blocked_turn_is_kept() {
    let walls = walls(JUNCTION);
    let mut player = Player::new(IVec2::new(1, 1), 0);
    player.request(Direction::Up);

    for _ in 0..30 {
        player.update(&walls);
    }

    assert_eq!(player.direction, None);
    assert_eq!(player.next_direction, Some(Direction::Up));
    assert_eq!(player.rect, Rect::tile(IVec2::new(1, 1)));
}

#[test]
fn test_stops_flush_against_wall() {
    let walls = walls(JUNCTION);
    let mut player = Player::new(IVec2::new(1, 1), 0);
    player.request(Direction::Right);

    for _ in 0..20 {
        player.update(&walls);
    }

    assert_eq!(player.direction, None);
    assert_eq!(player.rect, Rect::tile(IVec2::new(4, 1)));
    assert_eq!(player.mouth().angle(), 0);
}

#[test]
fn test_never_overlaps_walls() {
    let levels = Levels::authored().unwrap();
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);

    for index in 0..levels.len() {
        let layout = levels.layout(index).unwrap();
        let mut player = Player::new(layout.player_spawn, 0);

        for frame in 0..3000 {
            if frame % 4 == 0 {
                player.request(DIRECTIONS[rng.random_range(0..DIRECTIONS.len())]);
            }
            player.update(&layout.walls);

            assert!(
                !collides(&player.rect, &layout.walls),
                "level {index} frame {frame}: {:?}",
                player.rect
            );
            if player.direction.is_none() {
                assert_that(&player.rect.is_aligned()).is_true();
            }
        }
    }
}
