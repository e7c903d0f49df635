//! Window resize handling.
//!
//! On resize every entity's position and behavior baselines are rescaled by
//! the viewport's growth factors, so the scene keeps its relative layout
//! instead of clustering in the old corner.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::movement::Movement;
use crate::components::sprite::Sprite;
use crate::resources::viewport::Viewport;

/// Rescale the scene to a new viewport size.
///
/// Runs as an exclusive world pass from the main loop when raylib reports a
/// resize. Positions and per-behavior checkpoints (hop baselines, orbit
/// centers and radii) are scaled by the width/height ratios; everything is
/// then re-clamped so no sprite lands outside the new bounds.
pub fn apply_viewport_resize(world: &mut World, new_width: f32, new_height: f32) {
    let previous = *world.resource::<Viewport>();
    let next = Viewport::new(new_width, new_height);
    if next == previous {
        return;
    }
    let (scale_x, scale_y) = next.scale_from(previous);
    *world.resource_mut::<Viewport>() = next;

    log::debug!(
        "viewport resized {}x{} -> {}x{} (scale {:.3}, {:.3})",
        previous.width,
        previous.height,
        next.width,
        next.height,
        scale_x,
        scale_y
    );

    let mut query = world.query::<(&mut MapPosition, &Sprite, &mut Movement)>();
    for (mut position, sprite, mut movement) in query.iter_mut(world) {
        movement.resize(&mut position, sprite, scale_x, scale_y, next.width, next.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::movement::{Movement, MovementState};
    use crate::components::rigidbody::RigidBody;

    fn spawn_slider(world: &mut World, x: f32, y: f32) -> Entity {
        world
            .spawn((
                MapPosition::new(x, y),
                RigidBody::with_velocity(50.0, -30.0),
                Sprite::new("capy", 100.0, 80.0),
                Movement {
                    state: MovementState::Slide,
                },
            ))
            .id()
    }

    #[test]
    fn doubling_the_window_doubles_positions() {
        let mut world = World::new();
        world.insert_resource(Viewport::new(800.0, 600.0));
        let entity = spawn_slider(&mut world, 200.0, 150.0);

        apply_viewport_resize(&mut world, 1600.0, 1200.0);

        let pos = world.entity(entity).get::<MapPosition>().unwrap();
        assert_eq!(pos.pos.x, 400.0);
        assert_eq!(pos.pos.y, 300.0);
        let viewport = world.resource::<Viewport>();
        assert_eq!(viewport.width, 1600.0);
    }

    #[test]
    fn shrinking_clamps_entities_into_bounds() {
        let mut world = World::new();
        world.insert_resource(Viewport::new(800.0, 600.0));
        let entity = spawn_slider(&mut world, 700.0, 500.0);

        apply_viewport_resize(&mut world, 400.0, 300.0);

        let pos = world.entity(entity).get::<MapPosition>().unwrap();
        // Scaled to (350, 250), then clamped so the 100x80 sprite fits.
        assert!(pos.pos.x <= 400.0 - 100.0);
        assert!(pos.pos.y <= 300.0 - 80.0);
    }

    #[test]
    fn same_size_is_a_noop() {
        let mut world = World::new();
        world.insert_resource(Viewport::new(800.0, 600.0));
        let entity = spawn_slider(&mut world, 123.0, 45.0);

        apply_viewport_resize(&mut world, 800.0, 600.0);

        let pos = world.entity(entity).get::<MapPosition>().unwrap();
        assert_eq!(pos.pos.x, 123.0);
        assert_eq!(pos.pos.y, 45.0);
    }
}
