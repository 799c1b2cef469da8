//! Executes draw lists on an SDL2 canvas.

use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::render::{Anchor, Color, DrawCommand, TextSize};

/// Edge length of a glyph in the SDL2_gfx built-in font.
const GLYPH_SIZE: i32 = 8;

fn sdl_color(color: Color) -> pixels::Color {
    pixels::Color::RGB(color.r, color.g, color.b)
}

fn text_scale(size: TextSize) -> i32 {
    match size {
        TextSize::Body => 2,
        TextSize::Banner => 4,
        TextSize::Title => 5,
    }
}

fn to_i16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Draws `commands` in order and presents the frame.
///
/// `view_scale` maps playfield pixels to window pixels.
pub fn present(canvas: &mut Canvas<Window>, commands: &[DrawCommand], view_scale: f32) -> Result<(), String> {
    canvas.set_scale(view_scale, view_scale)?;

    for command in commands {
        match command {
            DrawCommand::Clear(color) => {
                canvas.set_draw_color(sdl_color(*color));
                canvas.clear();
            }
            DrawCommand::RoundedRect { rect, radius, color } => canvas.rounded_box(
                to_i16(rect.x),
                to_i16(rect.y),
                to_i16(rect.x + rect.w - 1),
                to_i16(rect.y + rect.h - 1),
                to_i16(*radius),
                sdl_color(*color),
            )?,
            DrawCommand::Circle { center, radius, color } => {
                canvas.filled_circle(to_i16(center.x), to_i16(center.y), to_i16(*radius), sdl_color(*color))?
            }
            DrawCommand::Rect { rect, color } => {
                canvas.set_draw_color(sdl_color(*color));
                canvas.fill_rect(sdl2::rect::Rect::new(rect.x, rect.y, rect.w.max(0) as u32, rect.h.max(0) as u32))?;
            }
            DrawCommand::Triangle { points: [a, b, c], color } => canvas.filled_trigon(
                to_i16(a.x),
                to_i16(a.y),
                to_i16(b.x),
                to_i16(b.y),
                to_i16(c.x),
                to_i16(c.y),
                sdl_color(*color),
            )?,
            DrawCommand::Text {
                text,
                position,
                anchor,
                size,
                color,
            } => {
                // Glyphs are enlarged by scaling the renderer, so coordinates shrink to match.
                let scale = text_scale(*size);
                let width = text.chars().count() as i32 * GLYPH_SIZE * scale;
                let origin = match anchor {
                    Anchor::TopLeft => *position,
                    Anchor::Center => *position - glam::IVec2::new(width / 2, GLYPH_SIZE * scale / 2),
                };
                canvas.set_scale(view_scale * scale as f32, view_scale * scale as f32)?;
                let drawn = canvas.string(
                    to_i16(origin.x / scale),
                    to_i16(origin.y / scale),
                    text,
                    sdl_color(*color),
                );
                canvas.set_scale(view_scale, view_scale)?;
                drawn?;
            }
        }
    }

    canvas.present();
    Ok(())
}
