use bevy_ecs::prelude::Component;

/// Speech note text payload: up to two logical text blocks rendered above
/// the sprite, separated by a divider when both are present.
///
/// Blank lines are stored as empty strings; a note whose lines are both empty
/// produces a zero-size box and is skipped by layout, bounce, and rendering.
#[derive(Component, Clone, Debug, Default)]
pub struct Note {
    pub line1: String,
    pub line2: String,
}

impl Note {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.line1.trim().is_empty() && self.line2.trim().is_empty()
    }
}
