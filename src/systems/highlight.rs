//! Highlight-flash countdown system.
//!
//! Decrements the [`Highlight`](crate::components::highlight::Highlight)
//! countdown started by a click and removes the component when it reaches
//! zero. The renderer draws the outline while the component is present.

use bevy_ecs::prelude::*;

use crate::components::highlight::Highlight;
use crate::resources::worldtime::WorldTime;

/// Tick highlight countdowns and drop expired ones.
pub fn highlight_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Highlight)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut highlight) in query.iter_mut() {
        highlight.remaining -= dt;
        if highlight.remaining <= 0.0 {
            commands.entity(entity).remove::<Highlight>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_expires_after_its_duration() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed: 0.0,
            delta: 1.0,
            time_scale: 1.0,
            frame_count: 0,
        });
        let entity = world.spawn(Highlight::new(1.5)).id();
        let mut schedule = Schedule::default();
        schedule.add_systems(highlight_system);

        schedule.run(&mut world);
        assert!(world.get::<Highlight>(entity).is_some());
        schedule.run(&mut world);
        assert!(world.get::<Highlight>(entity).is_none());
    }
}
