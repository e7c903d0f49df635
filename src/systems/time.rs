//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, clamping the raw delta and applying `time_scale`.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Largest frame delta fed into the simulation, in seconds. Keeps entities
/// from teleporting after a stall (window drag, machine sleep).
pub const MAX_FRAME_DELTA: f32 = 0.05;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled wall-clock frame delta in seconds; it is clamped to
/// [`MAX_FRAME_DELTA`] before `time_scale` is applied.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.clamp(0.0, MAX_FRAME_DELTA) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_deltas_are_clamped() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 0.5);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta, MAX_FRAME_DELTA);
        assert_eq!(wt.elapsed, MAX_FRAME_DELTA);
        assert_eq!(wt.frame_count, 1);
    }

    #[test]
    fn time_scale_is_applied() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.5));
        update_world_time(&mut world, 0.04);
        assert_eq!(world.resource::<WorldTime>().delta, 0.02);
    }
}
