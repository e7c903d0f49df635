//! Locomotion behavior state for moving animals.
//!
//! Each entity carries exactly one [`MovementState`] variant, selected from
//! the catalog record's behavior tag at scene build. The tagged enum keeps
//! the per-behavior state blocks mutually exclusive and makes the per-frame
//! dispatch in [`crate::systems::movement`] exhaustive at compile time.
//!
//! Three operations make up the behavior contract:
//! - `init` ([`Movement::from_tag`]) – runs once when the entity enters the
//!   scene; seeds randomized parameters and may overwrite the entity's
//!   velocity and position outright.
//! - `update` – runs once per frame, see
//!   [`movement_system`](crate::systems::movement::movement_system).
//! - `resize` ([`Movement::resize`]) – rescales baseline coordinates on
//!   viewport resize and re-clamps so the bounds invariant keeps holding.
//!
//! Unknown or missing tags resolve to the default slide behavior; the parser
//! never fails.

use std::f32::consts::TAU;

use bevy_ecs::prelude::Component;
use log::warn;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::{Sprite, clamp_position};
use crate::resources::rabbitconfig::RabbitConfig;

/// State for the hop behavior: horizontal travel with a vertical arc that
/// never goes below the baseline.
#[derive(Clone, Debug)]
pub struct HopState {
    /// Ground level the arc is subtracted from.
    pub base_y: f32,
    /// Peak height of the arc in pixels.
    pub amplitude: f32,
    /// Current phase in radians.
    pub phase: f32,
    /// Angular rate in radians per second.
    pub speed: f32,
}

/// State for the zigzag behavior: horizontal travel with a signed sine wave
/// around the baseline.
#[derive(Clone, Debug)]
pub struct ZigzagState {
    pub base_y: f32,
    pub amplitude: f32,
    pub phase: f32,
    pub speed: f32,
}

/// State for the flutter behavior: random-walk heading drift plus a fast
/// vertical bob.
#[derive(Clone, Debug)]
pub struct FlutterState {
    /// Drift heading in radians; perturbed a little every frame.
    pub heading: f32,
    /// Horizontal drift speed in pixels per second.
    pub drift_speed: f32,
    /// Bob phase in radians.
    pub phase: f32,
    /// Bob angular rate in radians per second.
    pub bob_speed: f32,
    /// Bob amplitude in pixels.
    pub bob_amplitude: f32,
    /// Multiplier on the per-frame bob displacement. Kept as a tunable
    /// parameter rather than a fixed constant.
    pub bob_rate: f32,
    /// Per-entity generator for the heading perturbation.
    pub rng: fastrand::Rng,
}

/// State for the orbit behavior: the sprite circles a center point that
/// itself drifts and bounces inside radius-inset viewport bounds.
#[derive(Clone, Debug)]
pub struct OrbitState {
    pub center: Vector2,
    pub radius: f32,
    /// Current angle in radians.
    pub angle: f32,
    /// Signed angular rate in radians per second (sign is the direction).
    pub angular_speed: f32,
    pub center_velocity: Vector2,
}

/// Shared state for the rabbit and deer behaviors: bursts of eased hops
/// followed by a timed pause.
///
/// Each hop interpolates x between two checkpoints with smoothstep easing
/// while y follows `base_y - hop_height * sin(pi * t)`. Rabbit bursts are
/// 3 hops and track [`RabbitConfig`] every tick; deer bursts are a single
/// hop with fixed per-entity parameters.
#[derive(Clone, Debug)]
pub struct HopBurstState {
    pub hop_distance: f32,
    pub hop_height: f32,
    pub hop_velocity: f32,
    /// Pause duration after a burst, in seconds.
    pub stop_time: f32,
    pub hops_per_burst: u8,
    pub hops_remaining: u8,
    /// Progress through the current hop in `[0, 1]`.
    pub hop_progress: f32,
    /// Mid-hop vs paused.
    pub hopping: bool,
    /// Horizontal direction, `1.0` or `-1.0`.
    pub direction: f32,
    pub pause_remaining: f32,
    pub base_y: f32,
    pub hop_start_x: f32,
    pub hop_end_x: f32,
}

impl HopBurstState {
    /// Plan the next hop from `x`. Flips direction first if the target would
    /// leave the viewport, then clamps the target into bounds.
    pub fn plan_hop(&mut self, x: f32, sprite_width: f32, viewport_width: f32) {
        let max_x = (viewport_width - sprite_width).max(0.0);
        let mut target = x + self.direction * self.hop_distance;
        if target < 0.0 || target > max_x {
            self.direction = -self.direction;
            target = x + self.direction * self.hop_distance;
        }
        self.hop_start_x = x;
        self.hop_end_x = target.clamp(0.0, max_x);
        self.hop_progress = 0.0;
    }

    /// Overlay the runtime-adjustable rabbit tunables. Magnitude parameters
    /// take effect immediately; an in-progress hop keeps its checkpoints and
    /// its `hop_progress`, so the hop's shape is not restarted.
    pub fn apply_config(&mut self, config: &RabbitConfig) {
        self.hop_distance = config.hop_distance;
        self.hop_height = config.hop_height;
        self.hop_velocity = config.hop_velocity;
        self.stop_time = config.stop_time;
    }
}

/// The mutually-exclusive per-behavior state block.
#[derive(Clone, Debug)]
pub enum MovementState {
    /// Straight-line travel with velocity-reversal bounce off all four edges.
    /// Also the fallback for unknown behavior tags.
    Slide,
    Hop(HopState),
    Zigzag(ZigzagState),
    Flutter(FlutterState),
    Orbit(OrbitState),
    Rabbit(HopBurstState),
    Deer(HopBurstState),
}

/// Locomotion behavior component.
#[derive(Component, Clone, Debug)]
pub struct Movement {
    pub state: MovementState,
}

/// Random speed in the 40–120 px/s range used for initial velocities.
pub fn random_speed(rng: &mut fastrand::Rng) -> f32 {
    40.0 + rng.f32() * 80.0
}

fn random_sign(rng: &mut fastrand::Rng) -> f32 {
    if rng.bool() { 1.0 } else { -1.0 }
}

impl Movement {
    /// Initialize the behavior selected by `tag` for an entity at `pos`.
    ///
    /// Establishes randomized behavior parameters from `rng` and may
    /// overwrite the entity's velocity and position outright (orbit, rabbit
    /// and deer zero the linear velocity and drive position from their own
    /// state). Unknown tags log a warning and fall back to slide, leaving
    /// the spawn-time velocity untouched.
    pub fn from_tag(
        tag: &str,
        pos: &mut MapPosition,
        body: &mut RigidBody,
        sprite: &Sprite,
        viewport_width: f32,
        viewport_height: f32,
        rabbit_config: &RabbitConfig,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let max_y = (viewport_height - sprite.height).max(0.0);
        let state = match tag {
            "slide" => MovementState::Slide,
            "hop" => {
                body.velocity = Vector2 {
                    x: random_sign(rng) * (60.0 + rng.f32() * 60.0),
                    y: 0.0,
                };
                MovementState::Hop(HopState {
                    base_y: pos.pos.y.clamp(0.0, max_y),
                    amplitude: 40.0 + rng.f32() * 40.0,
                    phase: rng.f32() * TAU,
                    speed: 4.0 + rng.f32() * 3.0,
                })
            }
            "zigzag" => {
                body.velocity = Vector2 {
                    x: random_sign(rng) * (60.0 + rng.f32() * 80.0),
                    y: 0.0,
                };
                MovementState::Zigzag(ZigzagState {
                    base_y: pos.pos.y.clamp(0.0, max_y),
                    amplitude: 30.0 + rng.f32() * 50.0,
                    phase: rng.f32() * TAU,
                    speed: 2.0 + rng.f32() * 2.0,
                })
            }
            "flutter" => {
                body.velocity = Vector2 { x: 0.0, y: 0.0 };
                MovementState::Flutter(FlutterState {
                    heading: rng.f32() * TAU,
                    drift_speed: 50.0 + rng.f32() * 60.0,
                    phase: rng.f32() * TAU,
                    bob_speed: 8.0 + rng.f32() * 6.0,
                    bob_amplitude: 20.0 + rng.f32() * 30.0,
                    bob_rate: 10.0,
                    rng: rng.fork(),
                })
            }
            "orbit" => {
                body.velocity = Vector2 { x: 0.0, y: 0.0 };
                let max_radius = ((viewport_width - sprite.width) / 2.0)
                    .min((viewport_height - sprite.height) / 2.0)
                    .max(10.0);
                let radius = (40.0 + rng.f32() * 80.0).min(max_radius);
                let center = clamp_center(pos.pos, radius, sprite, viewport_width, viewport_height);
                let drift_angle = rng.f32() * TAU;
                let drift_speed = 20.0 + rng.f32() * 40.0;
                let mut state = OrbitState {
                    center,
                    radius,
                    angle: rng.f32() * TAU,
                    angular_speed: random_sign(rng) * (0.8 + rng.f32() * 1.2),
                    center_velocity: Vector2 {
                        x: drift_angle.cos() * drift_speed,
                        y: drift_angle.sin() * drift_speed,
                    },
                };
                pos.pos = project_orbit(&mut state, sprite, viewport_width, viewport_height);
                MovementState::Orbit(state)
            }
            "rabbit" => {
                body.velocity = Vector2 { x: 0.0, y: 0.0 };
                let mut state = HopBurstState {
                    hop_distance: rabbit_config.hop_distance,
                    hop_height: rabbit_config.hop_height,
                    hop_velocity: rabbit_config.hop_velocity,
                    stop_time: rabbit_config.stop_time,
                    hops_per_burst: 3,
                    hops_remaining: 3,
                    hop_progress: 0.0,
                    hopping: true,
                    direction: random_sign(rng),
                    pause_remaining: 0.0,
                    base_y: pos.pos.y.clamp(0.0, max_y),
                    hop_start_x: pos.pos.x,
                    hop_end_x: pos.pos.x,
                };
                state.plan_hop(pos.pos.x, sprite.width, viewport_width);
                pos.pos.y = state.base_y;
                MovementState::Rabbit(state)
            }
            "deer" => {
                body.velocity = Vector2 { x: 0.0, y: 0.0 };
                let mut state = HopBurstState {
                    hop_distance: 80.0 + rng.f32() * 60.0,
                    hop_height: 36.0 + rng.f32() * 30.0,
                    hop_velocity: 160.0 + rng.f32() * 80.0,
                    stop_time: 0.8 + rng.f32() * 0.8,
                    hops_per_burst: 1,
                    hops_remaining: 1,
                    hop_progress: 0.0,
                    hopping: true,
                    direction: random_sign(rng),
                    pause_remaining: 0.0,
                    base_y: pos.pos.y.clamp(0.0, max_y),
                    hop_start_x: pos.pos.x,
                    hop_end_x: pos.pos.x,
                };
                state.plan_hop(pos.pos.x, sprite.width, viewport_width);
                pos.pos.y = state.base_y;
                MovementState::Deer(state)
            }
            other => {
                warn!("unknown movement tag '{other}', falling back to slide");
                MovementState::Slide
            }
        };
        pos.pos = clamp_position(
            pos.pos,
            sprite.width,
            sprite.height,
            viewport_width,
            viewport_height,
        );
        Movement { state }
    }

    /// Rescale behavior baselines for a viewport resize and re-clamp.
    ///
    /// `scale_x`/`scale_y` are the per-axis factors relative to the previous
    /// viewport. The entity's position is rescaled here too, then every
    /// geometric state parameter follows its respective axis so the bounds
    /// invariant still holds afterwards.
    pub fn resize(
        &mut self,
        pos: &mut MapPosition,
        sprite: &Sprite,
        scale_x: f32,
        scale_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        pos.pos.x *= scale_x;
        pos.pos.y *= scale_y;
        let max_y = (viewport_height - sprite.height).max(0.0);
        match &mut self.state {
            MovementState::Slide => {}
            MovementState::Hop(hop) => {
                hop.base_y = (hop.base_y * scale_y).clamp(0.0, max_y);
                pos.pos.y = (hop.base_y - hop.amplitude * hop.phase.sin().abs()).clamp(0.0, max_y);
            }
            MovementState::Zigzag(zig) => {
                zig.base_y = (zig.base_y * scale_y).clamp(0.0, max_y);
                pos.pos.y = (zig.base_y + zig.amplitude * zig.phase.sin()).clamp(0.0, max_y);
            }
            MovementState::Flutter(_) => {}
            MovementState::Orbit(orbit) => {
                orbit.center.x *= scale_x;
                orbit.center.y *= scale_y;
                orbit.radius *= scale_x.min(scale_y);
                let max_radius = ((viewport_width - sprite.width) / 2.0)
                    .min((viewport_height - sprite.height) / 2.0)
                    .max(1.0);
                orbit.radius = orbit.radius.min(max_radius);
                pos.pos = project_orbit(orbit, sprite, viewport_width, viewport_height);
            }
            MovementState::Rabbit(burst) | MovementState::Deer(burst) => {
                burst.base_y = (burst.base_y * scale_y).clamp(0.0, max_y);
                let max_x = (viewport_width - sprite.width).max(0.0);
                burst.hop_start_x = (burst.hop_start_x * scale_x).clamp(0.0, max_x);
                burst.hop_end_x = (burst.hop_end_x * scale_x).clamp(0.0, max_x);
                if !burst.hopping {
                    pos.pos.y = burst.base_y;
                }
            }
        }
        pos.pos = clamp_position(
            pos.pos,
            sprite.width,
            sprite.height,
            viewport_width,
            viewport_height,
        );
    }
}

/// Clamp an orbit center into the radius-inset viewport bounds. When the
/// inset is wider than the viewport the center collapses to the middle.
pub fn clamp_center(
    center: Vector2,
    radius: f32,
    sprite: &Sprite,
    viewport_width: f32,
    viewport_height: f32,
) -> Vector2 {
    let max_x = (viewport_width - sprite.width - radius).max(radius);
    let max_y = (viewport_height - sprite.height - radius).max(radius);
    Vector2 {
        x: center.x.clamp(radius, max_x),
        y: center.y.clamp(radius, max_y),
    }
}

/// Project the sprite position from an orbit state and clamp into bounds.
pub fn project_orbit(
    orbit: &mut OrbitState,
    sprite: &Sprite,
    viewport_width: f32,
    viewport_height: f32,
) -> Vector2 {
    orbit.center = clamp_center(
        orbit.center,
        orbit.radius,
        sprite,
        viewport_width,
        viewport_height,
    );
    let projected = Vector2 {
        x: orbit.center.x + orbit.radius * orbit.angle.cos(),
        y: orbit.center.y + orbit.radius * orbit.angle.sin(),
    };
    clamp_position(
        projected,
        sprite.width,
        sprite.height,
        viewport_width,
        viewport_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn parts(x: f32, y: f32) -> (MapPosition, RigidBody, Sprite) {
        (
            MapPosition::new(x, y),
            RigidBody::with_velocity(50.0, 30.0),
            Sprite::new("maltese", 140.0, 100.0),
        )
    }

    fn in_bounds(pos: &MapPosition, sprite: &Sprite) -> bool {
        pos.pos.x >= 0.0
            && pos.pos.x <= W - sprite.width
            && pos.pos.y >= 0.0
            && pos.pos.y <= H - sprite.height
    }

    #[test]
    fn unknown_tag_falls_back_to_slide() {
        let (mut pos, mut body, sprite) = parts(100.0, 100.0);
        let mut rng = fastrand::Rng::with_seed(7);
        let movement = Movement::from_tag(
            "moonwalk",
            &mut pos,
            &mut body,
            &sprite,
            W,
            H,
            &RabbitConfig::default(),
            &mut rng,
        );
        assert!(matches!(movement.state, MovementState::Slide));
        // Slide keeps the spawn-time velocity.
        assert_eq!(body.velocity.x, 50.0);
        assert!(in_bounds(&pos, &sprite));
    }

    #[test]
    fn every_tag_initializes_in_bounds() {
        for tag in ["slide", "hop", "zigzag", "flutter", "orbit", "rabbit", "deer"] {
            for seed in 0..20 {
                let (mut pos, mut body, sprite) = parts(700.0, 550.0);
                let mut rng = fastrand::Rng::with_seed(seed);
                let _ = Movement::from_tag(
                    tag,
                    &mut pos,
                    &mut body,
                    &sprite,
                    W,
                    H,
                    &RabbitConfig::default(),
                    &mut rng,
                );
                assert!(in_bounds(&pos, &sprite), "{tag} seed {seed} left bounds");
            }
        }
    }

    #[test]
    fn orbit_and_burst_zero_linear_velocity() {
        for tag in ["orbit", "rabbit", "deer"] {
            let (mut pos, mut body, sprite) = parts(400.0, 300.0);
            let mut rng = fastrand::Rng::with_seed(3);
            let _ = Movement::from_tag(
                tag,
                &mut pos,
                &mut body,
                &sprite,
                W,
                H,
                &RabbitConfig::default(),
                &mut rng,
            );
            assert_eq!(body.velocity.x, 0.0, "{tag}");
            assert_eq!(body.velocity.y, 0.0, "{tag}");
        }
    }

    #[test]
    fn plan_hop_flips_direction_at_edge() {
        let mut burst = HopBurstState {
            hop_distance: 120.0,
            hop_height: 60.0,
            hop_velocity: 240.0,
            stop_time: 1.0,
            hops_per_burst: 3,
            hops_remaining: 3,
            hop_progress: 0.5,
            hopping: true,
            direction: 1.0,
            pause_remaining: 0.0,
            base_y: 500.0,
            hop_start_x: 0.0,
            hop_end_x: 0.0,
        };
        // Next hop would land beyond the right edge: direction flips.
        burst.plan_hop(700.0, 140.0, W);
        assert_eq!(burst.direction, -1.0);
        assert_eq!(burst.hop_start_x, 700.0);
        assert_eq!(burst.hop_end_x, 580.0);
        assert_eq!(burst.hop_progress, 0.0);
    }

    #[test]
    fn apply_config_keeps_progress() {
        let mut burst = HopBurstState {
            hop_distance: 120.0,
            hop_height: 60.0,
            hop_velocity: 240.0,
            stop_time: 1.0,
            hops_per_burst: 3,
            hops_remaining: 2,
            hop_progress: 0.4,
            hopping: true,
            direction: 1.0,
            pause_remaining: 0.0,
            base_y: 500.0,
            hop_start_x: 100.0,
            hop_end_x: 220.0,
        };
        burst.apply_config(&RabbitConfig {
            hop_distance: 200.0,
            hop_height: 90.0,
            hop_velocity: 400.0,
            stop_time: 2.0,
        });
        assert_eq!(burst.hop_height, 90.0);
        assert_eq!(burst.hop_velocity, 400.0);
        // Checkpoints and progress of the in-flight hop are untouched.
        assert_eq!(burst.hop_progress, 0.4);
        assert_eq!(burst.hop_start_x, 100.0);
        assert_eq!(burst.hop_end_x, 220.0);
    }

    #[test]
    fn resize_scales_hop_baseline_exactly() {
        let (mut pos, mut body, sprite) = parts(200.0, 200.0);
        let mut rng = fastrand::Rng::with_seed(11);
        let mut movement = Movement::from_tag(
            "hop",
            &mut pos,
            &mut body,
            &sprite,
            W,
            H,
            &RabbitConfig::default(),
            &mut rng,
        );
        let base_before = match &movement.state {
            MovementState::Hop(h) => h.base_y,
            _ => unreachable!(),
        };
        movement.resize(&mut pos, &sprite, 2.0, 2.0, W * 2.0, H * 2.0);
        let base_after = match &movement.state {
            MovementState::Hop(h) => h.base_y,
            _ => unreachable!(),
        };
        assert!((base_after - base_before * 2.0).abs() < 1e-4);
        assert!(pos.pos.x >= 0.0 && pos.pos.x <= W * 2.0 - sprite.width);
        assert!(pos.pos.y >= 0.0 && pos.pos.y <= H * 2.0 - sprite.height);
    }

    #[test]
    fn resize_keeps_every_behavior_in_bounds_when_shrinking() {
        for tag in ["slide", "hop", "zigzag", "flutter", "orbit", "rabbit", "deer"] {
            let (mut pos, mut body, sprite) = parts(600.0, 400.0);
            let mut rng = fastrand::Rng::with_seed(5);
            let mut movement = Movement::from_tag(
                tag,
                &mut pos,
                &mut body,
                &sprite,
                W,
                H,
                &RabbitConfig::default(),
                &mut rng,
            );
            movement.resize(&mut pos, &sprite, 0.5, 0.5, W * 0.5, H * 0.5);
            assert!(
                pos.pos.x >= 0.0 && pos.pos.x <= (W * 0.5 - sprite.width).max(0.0),
                "{tag} x out of bounds: {}",
                pos.pos.x
            );
            assert!(
                pos.pos.y >= 0.0 && pos.pos.y <= (H * 0.5 - sprite.height).max(0.0),
                "{tag} y out of bounds: {}",
                pos.pos.y
            );
        }
    }
}
