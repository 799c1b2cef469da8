mod common;

use std::time::Duration;

use common::Harness;
use glam::IVec2;
use pacman_3002::constants::palette;
use pacman_3002::entity::direction::Direction;
use pacman_3002::events::GameCommand;
use pacman_3002::map::rect::Rect;
use pacman_3002::render::{draw_list, Anchor, Color, DrawCommand, TextSize};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

const ROOM: &[&str] = &["WWWWWW", "WP.O W", "W   GW", "WWWWWW"];

fn texts(commands: &[DrawCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn circles_colored(commands: &[DrawCommand], wanted: Color) -> usize {
    commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::Circle { color, .. } if *color == wanted))
        .count()
}

#[test]
fn menu_shows_title_and_prompts() {
    let game = Harness::new(&[ROOM], &[Direction::Left]);
    let commands = draw_list(&game.session);

    assert_eq!(commands[0], DrawCommand::Clear(palette::BLACK));
    assert_eq!(
        commands[1],
        DrawCommand::Text {
            text: "PAC-MAN 3002".to_string(),
            position: IVec2::new(90, 40),
            anchor: Anchor::Center,
            size: TextSize::Title,
            color: palette::YELLOW,
        }
    );
    assert_eq!(
        texts(&commands),
        vec![
            "PAC-MAN 3002",
            "Press SPACE to Start",
            "Press Q to Quit",
            "Press F11 to Toggle Fullscreen"
        ]
    );
    assert_that(&commands.len()).is_equal_to(5);
}

#[test]
fn playfield_draws_every_piece() {
    let game = Harness::playing(&[ROOM], &[Direction::Left]);
    let commands = draw_list(&game.session);
    let level = game.session.level();

    let walls = commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::RoundedRect { radius: 4, .. }))
        .count();
    assert_eq!(walls, level.walls.len());
    assert_that(&commands).contains(&DrawCommand::Circle {
        center: IVec2::new(75, 45),
        radius: 2,
        color: palette::WHITE,
    });
    assert_that(&commands).contains(&DrawCommand::Circle {
        center: IVec2::new(105, 45),
        radius: 6,
        color: palette::WHITE,
    });
    assert_that(&commands).contains(&DrawCommand::Circle {
        center: IVec2::new(45, 45),
        radius: 13,
        color: palette::YELLOW,
    });
    assert_eq!(texts(&commands), vec!["Score: 0  Level: 1"]);
}

#[test]
fn hud_sits_in_the_top_left() {
    let game = Harness::playing(&[ROOM], &[Direction::Left]);
    let commands = draw_list(&game.session);

    let hud = commands.last().unwrap();
    assert_eq!(
        hud,
        &DrawCommand::Text {
            text: "Score: 0  Level: 1".to_string(),
            position: IVec2::new(10, 10),
            anchor: Anchor::TopLeft,
            size: TextSize::Body,
            color: palette::WHITE,
        }
    );
}

#[test]
fn open_mouth_faces_the_heading() {
    let mut game = Harness::playing(&[ROOM], &[Direction::Left]);
    let closed = draw_list(&game.session);
    assert_that(&closed.iter().any(|c| matches!(c, DrawCommand::Triangle { .. }))).is_false();

    game.command(GameCommand::Move(Direction::Right));
    game.frames(2);
    assert_eq!(game.session.level().player.mouth().angle(), 5);
    let commands = draw_list(&game.session);
    let wedge = commands
        .iter()
        .find_map(|command| match command {
            DrawCommand::Triangle { points, color } => Some((*points, *color)),
            _ => None,
        })
        .unwrap();

    let center = game.session.level().player.rect.center();
    assert_eq!(wedge.1, palette::BLACK);
    assert_eq!(wedge.0[0], center);
    // Facing right, the rim points sit right of center, mirrored across it.
    assert_that(&(wedge.0[1].x > center.x)).is_true();
    assert_eq!(wedge.0[1].x, wedge.0[2].x);
    assert_eq!(wedge.0[1].y - center.y, center.y - wedge.0[2].y);
}

#[test]
fn ghost_colors_follow_vulnerability() {
    let mut game = Harness::playing(&[ROOM], &[Direction::Left]);
    let calm = draw_list(&game.session);
    let base = game.session.level().ghosts[0].base_color();
    // The dome and three feet share the body color.
    assert_eq!(circles_colored(&calm, base), 4);
    assert_eq!(circles_colored(&calm, palette::DARK_BLUE), 0);

    game.session.level_mut().ghosts[0].make_scared(Duration::ZERO);
    let scared = draw_list(&game.session);
    assert_eq!(circles_colored(&scared, base), 0);
    assert_eq!(circles_colored(&scared, palette::DARK_BLUE), 4);
    assert_that(&scared).contains(&DrawCommand::Rect {
        rect: Rect::new(120, 75, 30, 15),
        color: palette::DARK_BLUE,
    });
}

#[test]
fn pupils_look_where_the_ghost_heads() {
    let game = Harness::playing(&[ROOM], &[Direction::Left]);
    let commands = draw_list(&game.session);

    // Ghost spawns at (120, 60); the left eye is at (128, 74).
    assert_that(&commands).contains(&DrawCommand::Circle {
        center: IVec2::new(128, 74),
        radius: 6,
        color: palette::WHITE,
    });
    assert_that(&commands).contains(&DrawCommand::Circle {
        center: IVec2::new(126, 74),
        radius: 3,
        color: palette::BLUE,
    });
}

#[test]
fn game_over_and_win_banners() {
    let mut game = Harness::playing(&[ROOM], &[Direction::Left]);
    let player = game.session.level().player.rect;
    game.session.level_mut().ghosts[0].rect = player;
    game.frame();

    let commands = draw_list(&game.session);
    assert_that(&commands).contains(&DrawCommand::Text {
        text: "GAME OVER".to_string(),
        position: IVec2::new(90, 60),
        anchor: Anchor::Center,
        size: TextSize::Banner,
        color: palette::RED,
    });
    assert_that(&commands).contains(&DrawCommand::Text {
        text: "Press R to Continue Level, M for Menu".to_string(),
        position: IVec2::new(90, 110),
        anchor: Anchor::Center,
        size: TextSize::Body,
        color: palette::WHITE,
    });

    let single_dot: &[&str] = &["WWWW", "WP.W", "WWWW"];
    let mut game = Harness::playing(&[single_dot], &[]);
    game.command(GameCommand::Move(Direction::Right));
    game.frames(3);
    let commands = draw_list(&game.session);
    assert_eq!(texts(&commands), vec!["Score: 10  Level: 1", "YOU WIN!", "Press R to Restart, M for Menu"]);
}
