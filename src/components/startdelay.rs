//! Randomized startup delay component.
//!
//! Entities sharing a behavior would otherwise move in lockstep; each gets a
//! random 0–0.8 s delay at scene build. While the component is present the
//! movement and note-bounce systems skip the entity; the
//! [`start_delay_system`](crate::systems::startdelay::start_delay_system)
//! decrements the countdown and removes the component when it expires.

use bevy_ecs::prelude::Component;

/// Remaining startup delay in seconds.
#[derive(Component, Clone, Copy, Debug)]
pub struct StartDelay {
    pub remaining: f32,
}

impl StartDelay {
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }
}
