//! Z-index component for render ordering.
//!
//! Entities are assigned increasing values in spawn order and are never
//! reordered, so the scene draws the same way every frame and hit-testing
//! can walk back-to-front deterministically.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The renderer sorts by `ZIndex` to
/// achieve a painter's algorithm; the pointer system picks the highest value
/// among hits so the topmost drawn entity wins.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
