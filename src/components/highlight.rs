//! Highlight-flash countdown component.
//!
//! Added to an entity when it is clicked; the
//! [`highlight_system`](crate::systems::highlight::highlight_system)
//! decrements `remaining` each frame and removes the component when it runs
//! out. While present, the renderer draws a colored outline around the sprite.

use bevy_ecs::prelude::Component;

/// Remaining highlight-flash duration in seconds.
#[derive(Component, Clone, Copy, Debug)]
pub struct Highlight {
    pub remaining: f32,
}

impl Highlight {
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }
}
