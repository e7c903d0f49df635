//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the linear velocity of an entity in
//! logical pixels per second. Locomotion behaviors integrate it into
//! [`MapPosition`](super::mapposition::MapPosition) and edge/note bounces
//! reverse its components.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Linear velocity in logical pixels per second.
///
/// Some behaviors (orbit, rabbit, deer) drive position purely from their own
/// phase/progress state and zero this out at init; the note-bounce coordinator
/// still reverses it so a later behavior change picks up a sane direction.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Create a RigidBody with the given velocity components.
    pub fn with_velocity(vx: f32, vy: f32) -> Self {
        Self {
            velocity: Vector2 { x: vx, y: vy },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
    }

    #[test]
    fn with_velocity_stores_components() {
        let rb = RigidBody::with_velocity(100.0, -40.0);
        assert_eq!(rb.velocity.x, 100.0);
        assert_eq!(rb.velocity.y, -40.0);
    }
}
