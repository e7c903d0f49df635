//! Note placement: word-wrapping and box geometry.
//!
//! Pure functions computing where an entity's speech note goes: the text is
//! greedily word-wrapped against measured widths, the box is sized from the
//! widest wrapped line plus padding, and the desired position centers the box
//! above the sprite, offset by the gap and the arrow callout.
//!
//! The computation has no hidden state: the bounce coordinator and the
//! renderer both call it each frame and get identical results for identical
//! inputs.

use raylib::prelude::Vector2;

use crate::components::note::Note;
use crate::components::sprite::Sprite;
use crate::resources::notemetrics::MeasureText;
use crate::resources::notestyle::NoteStyle;

/// A computed note box: size plus the anchor-relative desired position.
///
/// `box_width == 0` signals an empty note: nothing to draw, nothing to
/// collide against.
#[derive(Debug, Clone, PartialEq)]
pub struct NotePlacement {
    pub box_width: f32,
    pub box_height: f32,
    /// Desired left edge of the box.
    pub desired_x: f32,
    /// Desired top edge of the box.
    pub desired_y: f32,
    pub lines_top: Vec<String>,
    pub lines_bottom: Vec<String>,
}

impl NotePlacement {
    fn empty() -> Self {
        Self {
            box_width: 0.0,
            box_height: 0.0,
            desired_x: 0.0,
            desired_y: 0.0,
            lines_top: Vec::new(),
            lines_bottom: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.box_width <= 0.0
    }
}

/// Greedily wrap `text` into lines whose measured width stays within
/// `max_width`. Words accumulate onto a line until the candidate would
/// exceed the limit, then a new line starts. Whitespace-only text wraps to
/// no lines at all.
pub fn wrap_line(
    measure: &dyn MeasureText,
    text: &str,
    font_size: i32,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure.text_width(&candidate, font_size) > max_width {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Compute the note box for an entity at `pos`.
///
/// Box width is the ceiled widest measured line plus horizontal padding on
/// both sides. With a single text block the height is the wrapped line count
/// times the line height plus one vertical padding; with both blocks present
/// the divider and a second padding are added. The desired position centers
/// the box on the sprite's horizontal midpoint, fully above the sprite with
/// room for the gap and the arrow.
pub fn compute_note_placement(
    measure: &dyn MeasureText,
    note: &Note,
    pos: Vector2,
    sprite: &Sprite,
    style: &NoteStyle,
) -> NotePlacement {
    let lines_top = wrap_line(measure, &note.line1, style.font_size, style.max_text_width);
    let lines_bottom = wrap_line(measure, &note.line2, style.font_size, style.max_text_width);
    if lines_top.is_empty() && lines_bottom.is_empty() {
        return NotePlacement::empty();
    }

    let widest = lines_top
        .iter()
        .chain(lines_bottom.iter())
        .map(|line| measure.text_width(line, style.font_size))
        .fold(0.0f32, f32::max);
    let box_width = widest.ceil() + 2.0 * style.padding_x;

    let top_height = lines_top.len() as f32 * style.line_height;
    let bottom_height = lines_bottom.len() as f32 * style.line_height;
    let box_height = if !lines_top.is_empty() && !lines_bottom.is_empty() {
        top_height + style.divider_width + bottom_height + 2.0 * style.padding_y
    } else {
        top_height + bottom_height + style.padding_y
    };

    NotePlacement {
        box_width,
        box_height,
        desired_x: pos.x + sprite.width / 2.0 - box_width / 2.0,
        desired_y: pos.y - style.gap - style.arrow_size - box_height,
        lines_top,
        lines_bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::notemetrics::FixedWidthMeasure;

    // 10 px per character makes widths trivial to reason about.
    const M: FixedWidthMeasure = FixedWidthMeasure(10.0);

    fn style() -> NoteStyle {
        NoteStyle::default()
    }

    fn sprite() -> Sprite {
        Sprite::new("maltese", 140.0, 100.0)
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        let lines = wrap_line(&M, "such maltesed", 16, 220.0);
        assert_eq!(lines, vec!["such maltesed".to_string()]);
    }

    #[test]
    fn wrap_breaks_after_longest_fitting_prefix() {
        // "aaaa bbbb cccc" is 140 px; with a 120 px limit the first two
        // words (90 px) fit, adding "cccc" would measure 140 px.
        let lines = wrap_line(&M, "aaaa bbbb cccc", 16, 120.0);
        assert_eq!(lines, vec!["aaaa bbbb".to_string(), "cccc".to_string()]);
    }

    #[test]
    fn wrap_puts_oversized_word_on_its_own_line() {
        let lines = wrap_line(&M, "a incomprehensibilities b", 16, 100.0);
        assert_eq!(
            lines,
            vec![
                "a".to_string(),
                "incomprehensibilities".to_string(),
                "b".to_string()
            ]
        );
    }

    #[test]
    fn whitespace_only_wraps_to_nothing() {
        assert!(wrap_line(&M, "   \t ", 16, 220.0).is_empty());
        assert!(wrap_line(&M, "", 16, 220.0).is_empty());
    }

    #[test]
    fn blank_note_yields_zero_size_box() {
        let note = Note::new("", "  ");
        let p = compute_note_placement(&M, &note, Vector2 { x: 0.0, y: 0.0 }, &sprite(), &style());
        assert!(p.is_empty());
        assert_eq!(p.box_height, 0.0);
    }

    #[test]
    fn single_block_box_geometry() {
        let note = Note::new("hello", "");
        let s = style();
        let p = compute_note_placement(
            &M,
            &note,
            Vector2 { x: 100.0, y: 200.0 },
            &sprite(),
            &s,
        );
        // 5 chars * 10 px = 50, plus 2 * 10 padding.
        assert_eq!(p.box_width, 70.0);
        // One line: line_height + padding_y.
        assert_eq!(p.box_height, 28.0);
        // Centered on the sprite midpoint (x 100 + 70 = 170).
        assert_eq!(p.desired_x, 170.0 - 35.0);
        // Fully above the sprite: y - gap - arrow - height.
        assert_eq!(p.desired_y, 200.0 - 10.0 - 10.0 - 28.0);
    }

    #[test]
    fn two_block_box_adds_divider_and_padding() {
        let note = Note::new("hello", "world");
        let s = style();
        let p = compute_note_placement(&M, &note, Vector2 { x: 0.0, y: 0.0 }, &sprite(), &s);
        // line1 + divider + line2 + 2 * padding_y
        assert_eq!(p.box_height, 20.0 + 9.0 + 20.0 + 16.0);
        assert_eq!(p.lines_top.len(), 1);
        assert_eq!(p.lines_bottom.len(), 1);
    }

    #[test]
    fn second_line_only_uses_single_block_height() {
        let note = Note::new("", "world");
        let p = compute_note_placement(&M, &note, Vector2 { x: 0.0, y: 0.0 }, &sprite(), &style());
        assert_eq!(p.box_height, 28.0);
        assert!(p.lines_top.is_empty());
    }

    #[test]
    fn placement_is_idempotent() {
        let note = Note::new("a somewhat longer first line that wraps", "and a second");
        let pos = Vector2 { x: 33.5, y: 71.25 };
        let a = compute_note_placement(&M, &note, pos, &sprite(), &style());
        let b = compute_note_placement(&M, &note, pos, &sprite(), &style());
        assert_eq!(a, b);
    }
}
