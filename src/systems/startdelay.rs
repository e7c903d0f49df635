//! Startup delay system.
//!
//! Each frame, entities still in their startup-delay window get the countdown
//! decremented instead of a movement update (the movement and note-bounce
//! systems filter on `Without<StartDelay>`). When the countdown expires the
//! component is removed and the entity starts animating.

use bevy_ecs::prelude::*;

use crate::components::startdelay::StartDelay;
use crate::resources::worldtime::WorldTime;

/// Decrement startup delays and release entities whose delay expired.
pub fn start_delay_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut StartDelay)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut delay) in query.iter_mut() {
        delay.remaining -= dt;
        if delay.remaining <= 0.0 {
            commands.entity(entity).remove::<StartDelay>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_world(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed: 0.0,
            delta,
            time_scale: 1.0,
            frame_count: 0,
        });
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(start_delay_system);
        schedule.run(world);
    }

    #[test]
    fn delay_is_decremented_then_removed() {
        let mut world = make_world(0.03);
        let entity = world.spawn(StartDelay::new(0.05)).id();

        tick(&mut world);
        let remaining = world.get::<StartDelay>(entity).unwrap().remaining;
        assert!((remaining - 0.02).abs() < 1e-6);

        tick(&mut world);
        assert!(world.get::<StartDelay>(entity).is_none());
    }
}
