//! Logical viewport resource.
//!
//! Stores the current logical window dimensions in pixels. Owned by the frame
//! driver (updated only on resize events) and read by every other system.

use bevy_ecs::prelude::Resource;

/// Current logical viewport size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Dimensions are floored at 1 so later scale-factor math never divides
    /// by zero on a degenerate window.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Per-axis scale factors of `self` relative to `previous`, with the
    /// denominators guarded to a minimum of 1.
    pub fn scale_from(&self, previous: Viewport) -> (f32, f32) {
        (
            self.width / previous.width.max(1.0),
            self.height / previous.height.max(1.0),
        )
    }
}
