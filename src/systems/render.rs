//! Scene rendering using Raylib.
//!
//! Draws over a light background: for each entity, the sprite texture (or a
//! grey placeholder when the texture never loaded), its speech note, and the
//! click-highlight outline. Entities are collected and sorted by [`ZIndex`]
//! so draw order is a stable painter's algorithm.
//!
//! The note box is drawn at exactly the placement the bounce coordinator
//! computed against this frame, from the same [`NoteStyle`] and measurer, so
//! what collides is what gets drawn.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::highlight::Highlight;
use crate::components::mapposition::MapPosition;
use crate::components::note::Note;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::notemetrics::{MeasureText, NoteMetrics};
use crate::resources::notestyle::NoteStyle;
use crate::resources::texturestore::TextureStore;
use crate::systems::notelayout::{NotePlacement, compute_note_placement};

const BACKGROUND: Color = Color::RAYWHITE;
const PLACEHOLDER: Color = Color::new(221, 221, 221, 255);
const SHADOW: Color = Color::new(0, 0, 0, 60);
const HIGHLIGHT_COLOR: Color = Color::new(250, 204, 21, 255);
const HIGHLIGHT_THICKNESS: f32 = 3.0;
const HIGHLIGHT_INFLATE: f32 = 2.0;

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    thread: NonSend<raylib::RaylibThread>,
    textures: NonSend<TextureStore>,
    metrics: Res<NoteMetrics>,
    style: Res<NoteStyle>,
    query: Query<(&MapPosition, &Sprite, &Note, &ZIndex, Option<&Highlight>)>,
) {
    // Collect and sort back-to-front before entering the drawing scope.
    let mut to_draw: Vec<(MapPosition, Sprite, Note, ZIndex, bool)> = query
        .iter()
        .map(|(p, s, n, z, h)| (*p, s.clone(), n.clone(), *z, h.is_some()))
        .collect();
    to_draw.sort_by_key(|(_, _, _, z, _)| *z);

    let mut d = rl.begin_drawing(&thread);
    d.clear_background(BACKGROUND);

    for (position, sprite, note, _z, highlighted) in &to_draw {
        draw_sprite(&mut d, position, sprite, &textures);

        let placement =
            compute_note_placement(metrics.0.as_ref(), note, position.pos, sprite, &style);
        if !placement.is_empty() {
            draw_note(&mut d, &placement, &style, metrics.0.as_ref(), position, sprite);
        }

        if *highlighted {
            let rect = sprite.rect(position.pos);
            let inflated = Rectangle {
                x: rect.x - HIGHLIGHT_INFLATE,
                y: rect.y - HIGHLIGHT_INFLATE,
                width: rect.width + 2.0 * HIGHLIGHT_INFLATE,
                height: rect.height + 2.0 * HIGHLIGHT_INFLATE,
            };
            d.draw_rectangle_lines_ex(inflated, HIGHLIGHT_THICKNESS, HIGHLIGHT_COLOR);
        }
    }
}

fn draw_sprite(
    d: &mut RaylibDrawHandle,
    position: &MapPosition,
    sprite: &Sprite,
    textures: &TextureStore,
) {
    let dest = sprite.rect(position.pos);
    if sprite.loaded
        && let Some(tex) = textures.get(&sprite.tex_key)
    {
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex.width() as f32,
            height: tex.height() as f32,
        };
        d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    } else {
        d.draw_rectangle_rec(dest, PLACEHOLDER);
    }
}

/// Draw one note box: drop shadow, border, fill, arrow callout pointing down
/// at the sprite, the wrapped text blocks and the divider between them.
fn draw_note(
    d: &mut RaylibDrawHandle,
    placement: &NotePlacement,
    style: &NoteStyle,
    measure: &dyn MeasureText,
    position: &MapPosition,
    sprite: &Sprite,
) {
    let rect = Rectangle {
        x: placement.desired_x,
        y: placement.desired_y,
        width: placement.box_width,
        height: placement.box_height,
    };
    let roundness = roundness_for(style.corner_radius, rect.width, rect.height);

    // Shadow, then the black border as an inflated rounded rect, then fill.
    let shadow = Rectangle {
        x: rect.x + 3.0,
        y: rect.y + 3.0,
        ..rect
    };
    d.draw_rectangle_rounded(shadow, roundness, 8, SHADOW);
    let border = Rectangle {
        x: rect.x - style.border_width,
        y: rect.y - style.border_width,
        width: rect.width + 2.0 * style.border_width,
        height: rect.height + 2.0 * style.border_width,
    };
    d.draw_rectangle_rounded(
        border,
        roundness_for(style.corner_radius, border.width, border.height),
        8,
        Color::BLACK,
    );
    d.draw_rectangle_rounded(rect, roundness, 8, Color::WHITE);

    // Arrow below the box, pointing at the sprite's horizontal center.
    // Screen-space winding: right base, left base, tip.
    let arrow_cx = (position.pos.x + sprite.width / 2.0)
        .clamp(rect.x + style.arrow_size, rect.x + rect.width - style.arrow_size);
    let base_y = rect.y + rect.height;
    let right = Vector2 {
        x: arrow_cx + style.arrow_size,
        y: base_y,
    };
    let left = Vector2 {
        x: arrow_cx - style.arrow_size,
        y: base_y,
    };
    let tip = Vector2 {
        x: arrow_cx,
        y: base_y + style.arrow_size,
    };
    d.draw_triangle(right, left, tip, Color::WHITE);
    d.draw_line_ex(left, tip, style.border_width, Color::BLACK);
    d.draw_line_ex(tip, right, style.border_width, Color::BLACK);

    // Text. A single block is padded with half the vertical padding on each
    // side; two blocks get the full padding plus the divider between them.
    let mut line_y = if placement.lines_top.is_empty() || placement.lines_bottom.is_empty() {
        rect.y + style.padding_y / 2.0
    } else {
        rect.y + style.padding_y
    };
    for line in &placement.lines_top {
        draw_centered_line(d, line, &rect, line_y, style, measure);
        line_y += style.line_height;
    }
    if !placement.lines_top.is_empty() && !placement.lines_bottom.is_empty() {
        let divider_y = line_y + style.divider_width / 2.0;
        d.draw_line_ex(
            Vector2 {
                x: rect.x + style.padding_x,
                y: divider_y,
            },
            Vector2 {
                x: rect.x + rect.width - style.padding_x,
                y: divider_y,
            },
            1.0,
            Color::BLACK,
        );
        line_y += style.divider_width;
    }
    for line in &placement.lines_bottom {
        draw_centered_line(d, line, &rect, line_y, style, measure);
        line_y += style.line_height;
    }
}

fn draw_centered_line(
    d: &mut RaylibDrawHandle,
    line: &str,
    rect: &Rectangle,
    line_y: f32,
    style: &NoteStyle,
    measure: &dyn MeasureText,
) {
    let width = measure.text_width(line, style.font_size);
    let x = rect.x + (rect.width - width) / 2.0;
    let y = line_y + (style.line_height - style.font_size as f32) / 2.0;
    d.draw_text(line, x as i32, y as i32, style.font_size, Color::BLACK);
}

/// Raylib expresses rounded corners as a 0..1 roundness fraction of the
/// rectangle's shorter side.
fn roundness_for(corner_radius: f32, width: f32, height: f32) -> f32 {
    let min_side = width.min(height).max(1.0);
    (corner_radius * 2.0 / min_side).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundness_is_fraction_of_shorter_side() {
        // radius 8 on a 120x28 box: 16 / 28.
        let r = roundness_for(8.0, 120.0, 28.0);
        assert!((r - 16.0 / 28.0).abs() < 1e-6);
    }

    #[test]
    fn roundness_clamps_for_tiny_boxes() {
        assert_eq!(roundness_for(8.0, 10.0, 10.0), 1.0);
        assert_eq!(roundness_for(0.0, 100.0, 100.0), 0.0);
    }
}
