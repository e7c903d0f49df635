use bevy_ecs::prelude::Resource;

/// Simulation clock updated once per frame.
///
/// `delta` is the scaled frame delta in seconds; `elapsed` accumulates it.
/// The raw frame delta is clamped before it reaches this resource, see
/// [`crate::systems::time::update_world_time`].
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
