//! Sprite rendering component and box helpers.
//!
//! A sprite is identified by a texture key and its draw size in logical
//! pixels. The `loaded` flag records whether the texture resolved at scene
//! build time; when it is false the renderer substitutes a placeholder
//! rectangle instead (missing images are a degraded-rendering condition, not
//! an error).

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// 2D sprite identified by a texture key, with its size in logical pixels.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    /// True once the texture behind `tex_key` resolved. Stays false for
    /// missing/unresolvable images; the renderer then draws a placeholder.
    pub loaded: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            loaded: false,
        }
    }

    /// The on-screen rectangle for a given top-left position.
    pub fn rect(&self, pos: Vector2) -> Rectangle {
        Rectangle {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Point containment test against the sprite's rectangle.
    pub fn contains_point(&self, pos: Vector2, point: Vector2) -> bool {
        point.x >= pos.x
            && point.x <= pos.x + self.width
            && point.y >= pos.y
            && point.y <= pos.y + self.height
    }
}

/// Clamp a sprite's top-left position so the whole box stays inside the
/// viewport. The upper bound is guarded so oversized sprites pin to 0.
pub fn clamp_position(pos: Vector2, width: f32, height: f32, vw: f32, vh: f32) -> Vector2 {
    Vector2 {
        x: pos.x.clamp(0.0, (vw - width).max(0.0)),
        y: pos.y.clamp(0.0, (vh - height).max(0.0)),
    }
}

/// Scale `natural_w × natural_h` to fit within `max_w × max_h` preserving the
/// aspect ratio. Degenerate natural sizes fall back to the maximum box.
pub fn fit_within_bounds(natural_w: f32, natural_h: f32, max_w: f32, max_h: f32) -> (f32, f32) {
    if natural_w <= 0.0 || natural_h <= 0.0 {
        return (max_w, max_h);
    }
    let scale = (max_w / natural_w).min(max_h / natural_h);
    let width = (natural_w * scale).round().max(1.0);
    let height = (natural_h * scale).round().max(1.0);
    (width, height)
}
