//! Turns a session into a list of drawing primitives.
//!
//! Nothing in here touches a window. [`draw_list`] reads the session and describes a
//! frame; a front-end executes the commands in order.

use glam::IVec2;

use crate::constants::palette;
use crate::entity::ghost::Ghost;
use crate::entity::player::Player;
use crate::formatter::hud_line;
use crate::game::{GameStage, Session};
use crate::map::rect::Rect;

const WALL_CORNER_RADIUS: i32 = 4;
const DOT_RADIUS: i32 = 2;
const POWER_PELLET_RADIUS: i32 = 6;
const HUD_POSITION: IVec2 = IVec2::new(10, 10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Relative text sizes. The front-end picks the actual glyph scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Body,
    Banner,
    Title,
}

/// Which point of the text box `position` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    RoundedRect {
        rect: Rect,
        radius: i32,
        color: Color,
    },
    Circle {
        center: IVec2,
        radius: i32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Triangle {
        points: [IVec2; 3],
        color: Color,
    },
    Text {
        text: String,
        position: IVec2,
        anchor: Anchor,
        size: TextSize,
        color: Color,
    },
}

impl DrawCommand {
    fn text(text: impl Into<String>, position: IVec2, anchor: Anchor, size: TextSize, color: Color) -> Self {
        DrawCommand::Text {
            text: text.into(),
            position,
            anchor,
            size,
            color,
        }
    }
}

/// Describes the current frame of `session`.
pub fn draw_list(session: &Session) -> Vec<DrawCommand> {
    let size = session.levels().pixel_size().as_ivec2();
    let center = size / 2;
    let mut commands = vec![DrawCommand::Clear(palette::BLACK)];

    if session.stage() == GameStage::Menu {
        push_menu(&mut commands, size);
        return commands;
    }

    let level = session.level();
    commands.extend(level.walls.iter().map(|wall| DrawCommand::RoundedRect {
        rect: *wall,
        radius: WALL_CORNER_RADIUS,
        color: palette::BLUE,
    }));
    commands.extend(level.dots.iter().map(|dot| DrawCommand::Circle {
        center: dot.center(),
        radius: DOT_RADIUS,
        color: palette::WHITE,
    }));
    commands.extend(level.power_pellets.iter().map(|pellet| DrawCommand::Circle {
        center: pellet.center(),
        radius: POWER_PELLET_RADIUS,
        color: palette::WHITE,
    }));

    push_player(&mut commands, &level.player);
    for ghost in &level.ghosts {
        push_ghost(&mut commands, ghost);
    }

    commands.push(DrawCommand::text(
        hud_line(session.score(), session.level_index()),
        HUD_POSITION,
        Anchor::TopLeft,
        TextSize::Body,
        palette::WHITE,
    ));

    let banner = match session.stage() {
        GameStage::GameOver => Some(("GAME OVER", palette::RED, "Press R to Continue Level, M for Menu")),
        GameStage::Win => Some(("YOU WIN!", palette::GREEN, "Press R to Restart, M for Menu")),
        GameStage::Menu | GameStage::Playing => None,
    };
    if let Some((title, color, prompt)) = banner {
        commands.push(DrawCommand::text(title, center, Anchor::Center, TextSize::Banner, color));
        commands.push(DrawCommand::text(
            prompt,
            center + IVec2::new(0, 50),
            Anchor::Center,
            TextSize::Body,
            palette::WHITE,
        ));
    }

    commands
}

fn push_menu(commands: &mut Vec<DrawCommand>, size: IVec2) {
    let x = size.x / 2;
    commands.push(DrawCommand::text(
        "PAC-MAN 3002",
        IVec2::new(x, size.y / 3),
        Anchor::Center,
        TextSize::Title,
        palette::YELLOW,
    ));
    for (offset, line) in [
        (0, "Press SPACE to Start"),
        (40, "Press Q to Quit"),
        (80, "Press F11 to Toggle Fullscreen"),
    ] {
        commands.push(DrawCommand::text(
            line,
            IVec2::new(x, size.y / 2 + offset),
            Anchor::Center,
            TextSize::Body,
            palette::WHITE,
        ));
    }
}

/// A yellow disc with a black wedge cut out toward the facing direction.
fn push_player(commands: &mut Vec<DrawCommand>, player: &Player) {
    let center = player.rect.center();
    let radius = player.rect.w / 2 - 2;
    commands.push(DrawCommand::Circle {
        center,
        radius,
        color: palette::YELLOW,
    });

    let mouth = player.mouth().angle();
    if mouth == 0 {
        return;
    }

    // No heading: face right.
    let facing = player.direction.map_or(0, |direction| direction.angle_degrees());
    let rim = |degrees: i32| {
        let theta = (degrees as f32).to_radians();
        IVec2::new(
            center.x + (radius as f32 * theta.cos()).round() as i32,
            center.y - (radius as f32 * theta.sin()).round() as i32,
        )
    };
    commands.push(DrawCommand::Triangle {
        points: [center, rim(facing - mouth), rim(facing + mouth)],
        color: palette::BLACK,
    });
}

/// Dome, skirt, three feet, then eyes whose pupils look where the ghost is heading.
fn push_ghost(commands: &mut Vec<DrawCommand>, ghost: &Ghost) {
    let Rect { x, y, w, h } = ghost.rect;
    let body = ghost.color();

    commands.push(DrawCommand::Circle {
        center: ghost.rect.center(),
        radius: w / 2,
        color: body,
    });
    commands.push(DrawCommand::Rect {
        rect: Rect::new(x, y + h / 2, w, h / 2),
        color: body,
    });
    let foot = w / 6;
    for i in 0..3 {
        commands.push(DrawCommand::Circle {
            center: IVec2::new(x + (2 * i + 1) * foot, y + h),
            radius: foot,
            color: body,
        });
    }

    let eye_radius = w / 5;
    let eye_y = y + h / 4 + h / 4;
    let eyes = [IVec2::new(x + w / 2 - w / 4, eye_y), IVec2::new(x + w / 2 + w / 4, eye_y)];
    let pupil_offset = ghost.direction.as_ivec2() * 2;
    let pupil_color = if ghost.is_vulnerable() {
        palette::WHITE
    } else {
        palette::BLUE
    };

    for eye in eyes {
        commands.push(DrawCommand::Circle {
            center: eye,
            radius: eye_radius,
            color: palette::WHITE,
        });
    }
    for eye in eyes {
        commands.push(DrawCommand::Circle {
            center: eye + pupil_offset,
            radius: eye_radius / 2,
            color: pupil_color,
        });
    }
}
