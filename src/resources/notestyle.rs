//! Styling constants for the speech note boxes.

use bevy_ecs::prelude::Resource;

/// Styling and layout constants consumed by the note layout engine, the
/// bounce coordinator, and the renderer. One shared value keeps the layout
/// computed for collision identical to the layout that gets drawn.
#[derive(Resource, Clone, Copy, Debug)]
pub struct NoteStyle {
    /// Font size in pixels (default raylib font).
    pub font_size: i32,
    /// Vertical advance per wrapped line, in pixels.
    pub line_height: f32,
    /// Horizontal padding on each side of the text block.
    pub padding_x: f32,
    /// Vertical padding above/below the text.
    pub padding_y: f32,
    /// Maximum content width a wrapped line may measure.
    pub max_text_width: f32,
    /// Gap between the sprite's top edge and the arrow tip.
    pub gap: f32,
    /// Height of the arrow callout pointing at the sprite.
    pub arrow_size: f32,
    /// Minimum distance the box keeps from the left/right viewport edges.
    pub margin: f32,
    /// Corner radius of the box.
    pub corner_radius: f32,
    /// Border line width.
    pub border_width: f32,
    /// Vertical space taken by the divider between the two text blocks.
    pub divider_width: f32,
}

impl Default for NoteStyle {
    fn default() -> Self {
        Self {
            font_size: 16,
            line_height: 20.0,
            padding_x: 10.0,
            padding_y: 8.0,
            max_text_width: 220.0,
            gap: 10.0,
            arrow_size: 10.0,
            margin: 8.0,
            corner_radius: 8.0,
            border_width: 2.0,
            divider_width: 9.0,
        }
    }
}
