//! Runtime-adjustable rabbit behavior tunables.
//!
//! Exposed as a plain resource so collaborators outside the simulation can
//! read or overwrite it at any time; the rabbit behavior copies it into its
//! state at the start of every tick, so changes take effect on the next tick
//! without restarting an in-progress hop.

use bevy_ecs::prelude::Resource;

/// Tunable parameters for the rabbit behavior.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct RabbitConfig {
    /// Horizontal distance covered by one hop, in pixels.
    pub hop_distance: f32,
    /// Peak height of the hop arc, in pixels.
    pub hop_height: f32,
    /// Horizontal velocity during a hop, in pixels per second.
    pub hop_velocity: f32,
    /// Pause after a 3-hop burst, in seconds.
    pub stop_time: f32,
}

impl Default for RabbitConfig {
    fn default() -> Self {
        Self {
            hop_distance: 120.0,
            hop_height: 60.0,
            hop_velocity: 240.0,
            stop_time: 1.0,
        }
    }
}

impl RabbitConfig {
    /// Clamp all fields into sane positive ranges. Applied when values come
    /// from the configuration file.
    pub fn sanitized(self) -> Self {
        Self {
            hop_distance: self.hop_distance.clamp(20.0, 400.0),
            hop_height: self.hop_height.clamp(10.0, 200.0),
            hop_velocity: self.hop_velocity.clamp(20.0, 600.0),
            stop_time: self.stop_time.clamp(0.1, 5.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let config = RabbitConfig {
            hop_distance: 1000.0,
            hop_height: 0.0,
            hop_velocity: -5.0,
            stop_time: 99.0,
        }
        .sanitized();
        assert_eq!(config.hop_distance, 400.0);
        assert_eq!(config.hop_height, 10.0);
        assert_eq!(config.hop_velocity, 20.0);
        assert_eq!(config.stop_time, 5.0);
    }

    #[test]
    fn defaults_are_already_sane() {
        let config = RabbitConfig::default();
        assert_eq!(config, config.sanitized());
    }
}
