//! Per-frame locomotion updates.
//!
//! Advances every entity that is past its startup delay according to its
//! [`MovementState`] variant, including the behavior-level edge bounce.
//! The note-bounce coordinator runs separately afterwards; the two bounce
//! layers are orthogonal.

use std::f32::consts::PI;

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::movement::{
    FlutterState, HopBurstState, HopState, Movement, MovementState, OrbitState, ZigzagState,
    project_orbit,
};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::startdelay::StartDelay;
use crate::resources::rabbitconfig::RabbitConfig;
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;

/// Smoothstep easing `3t² − 2t³` on a clamped `t`.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Advance every animating entity one tick.
///
/// Rabbit entities re-read the shared [`RabbitConfig`] at the start of the
/// tick, so external tuning takes effect on the next frame without
/// restarting an in-progress hop.
pub fn movement_system(
    time: Res<WorldTime>,
    viewport: Res<Viewport>,
    rabbit_config: Res<RabbitConfig>,
    mut query: Query<
        (&mut MapPosition, &mut RigidBody, &Sprite, &mut Movement),
        Without<StartDelay>,
    >,
) {
    let dt = time.delta;
    let (vw, vh) = (viewport.width, viewport.height);
    for (mut pos, mut body, sprite, mut movement) in query.iter_mut() {
        match &mut movement.state {
            MovementState::Slide => update_slide(&mut pos, &mut body, sprite, vw, vh, dt),
            MovementState::Hop(hop) => update_hop(hop, &mut pos, &mut body, sprite, vw, vh, dt),
            MovementState::Zigzag(zig) => {
                update_zigzag(zig, &mut pos, &mut body, sprite, vw, vh, dt)
            }
            MovementState::Flutter(fl) => update_flutter(fl, &mut pos, sprite, vw, vh, dt),
            MovementState::Orbit(orbit) => update_orbit(orbit, &mut pos, sprite, vw, vh, dt),
            MovementState::Rabbit(burst) => {
                burst.apply_config(&rabbit_config);
                update_hop_burst(burst, &mut pos, sprite, vw, vh, dt);
            }
            MovementState::Deer(burst) => update_hop_burst(burst, &mut pos, sprite, vw, vh, dt),
        }
    }
}

/// Integrate `x` and bounce off the left/right edges, reversing `vx`.
fn bounce_horizontal(
    pos: &mut MapPosition,
    body: &mut RigidBody,
    sprite: &Sprite,
    vw: f32,
    dt: f32,
) {
    pos.pos.x += body.velocity.x * dt;
    let max_x = (vw - sprite.width).max(0.0);
    if pos.pos.x < 0.0 {
        pos.pos.x = 0.0;
        body.velocity.x = -body.velocity.x;
    } else if pos.pos.x > max_x {
        pos.pos.x = max_x;
        body.velocity.x = -body.velocity.x;
    }
}

/// Straight-line travel with velocity-reversal bounce off all four edges.
pub fn update_slide(
    pos: &mut MapPosition,
    body: &mut RigidBody,
    sprite: &Sprite,
    vw: f32,
    vh: f32,
    dt: f32,
) {
    bounce_horizontal(pos, body, sprite, vw, dt);
    pos.pos.y += body.velocity.y * dt;
    let max_y = (vh - sprite.height).max(0.0);
    if pos.pos.y < 0.0 {
        pos.pos.y = 0.0;
        body.velocity.y = -body.velocity.y;
    } else if pos.pos.y > max_y {
        pos.pos.y = max_y;
        body.velocity.y = -body.velocity.y;
    }
}

/// Horizontal travel with bounce; `y = base − amplitude·|sin(phase)|`, an
/// arc that never goes below the baseline.
pub fn update_hop(
    hop: &mut HopState,
    pos: &mut MapPosition,
    body: &mut RigidBody,
    sprite: &Sprite,
    vw: f32,
    vh: f32,
    dt: f32,
) {
    bounce_horizontal(pos, body, sprite, vw, dt);
    hop.phase += hop.speed * dt;
    let y = hop.base_y - hop.amplitude * hop.phase.sin().abs();
    pos.pos.y = y.clamp(0.0, (vh - sprite.height).max(0.0));
}

/// Horizontal travel with bounce; `y = base + amplitude·sin(phase)`.
pub fn update_zigzag(
    zig: &mut ZigzagState,
    pos: &mut MapPosition,
    body: &mut RigidBody,
    sprite: &Sprite,
    vw: f32,
    vh: f32,
    dt: f32,
) {
    bounce_horizontal(pos, body, sprite, vw, dt);
    zig.phase += zig.speed * dt;
    let y = zig.base_y + zig.amplitude * zig.phase.sin();
    pos.pos.y = y.clamp(0.0, (vh - sprite.height).max(0.0));
}

/// Random-walk drift with horizontal bounce plus a fast vertical bob.
/// The bob is clamped, never bounced.
pub fn update_flutter(
    fl: &mut FlutterState,
    pos: &mut MapPosition,
    sprite: &Sprite,
    vw: f32,
    vh: f32,
    dt: f32,
) {
    fl.heading += (fl.rng.f32() - 0.5) * 2.5 * dt;
    pos.pos.x += fl.heading.cos() * fl.drift_speed * dt;
    let max_x = (vw - sprite.width).max(0.0);
    if pos.pos.x < 0.0 {
        pos.pos.x = 0.0;
        fl.heading = PI - fl.heading;
    } else if pos.pos.x > max_x {
        pos.pos.x = max_x;
        fl.heading = PI - fl.heading;
    }

    fl.phase += fl.bob_speed * dt;
    let dy = fl.bob_amplitude * fl.phase.sin() * fl.bob_rate * dt;
    pos.pos.y = (pos.pos.y + dy).clamp(0.0, (vh - sprite.height).max(0.0));
}

/// Advance the orbit angle and the drifting center; bounce the center inside
/// radius-inset bounds, then project and clamp the sprite position.
pub fn update_orbit(
    orbit: &mut OrbitState,
    pos: &mut MapPosition,
    sprite: &Sprite,
    vw: f32,
    vh: f32,
    dt: f32,
) {
    orbit.angle += orbit.angular_speed * dt;
    orbit.center.x += orbit.center_velocity.x * dt;
    orbit.center.y += orbit.center_velocity.y * dt;

    let min_x = orbit.radius;
    let max_x = (vw - sprite.width - orbit.radius).max(min_x);
    if orbit.center.x < min_x {
        orbit.center.x = min_x;
        orbit.center_velocity.x = orbit.center_velocity.x.abs();
    } else if orbit.center.x > max_x {
        orbit.center.x = max_x;
        orbit.center_velocity.x = -orbit.center_velocity.x.abs();
    }
    let min_y = orbit.radius;
    let max_y = (vh - sprite.height - orbit.radius).max(min_y);
    if orbit.center.y < min_y {
        orbit.center.y = min_y;
        orbit.center_velocity.y = orbit.center_velocity.y.abs();
    } else if orbit.center.y > max_y {
        orbit.center.y = max_y;
        orbit.center_velocity.y = -orbit.center_velocity.y.abs();
    }

    pos.pos = project_orbit(orbit, sprite, vw, vh);
}

/// Advance a rabbit/deer burst: eased hops, then a timed pause.
///
/// Each hop's duration derives from its planned distance and the configured
/// velocity; progress accumulates as `dt / duration` clamped to `[0, 1]`,
/// x interpolates with smoothstep and y follows `base − height·sin(π·t)`.
pub fn update_hop_burst(
    burst: &mut HopBurstState,
    pos: &mut MapPosition,
    sprite: &Sprite,
    vw: f32,
    vh: f32,
    dt: f32,
) {
    if !burst.hopping {
        burst.pause_remaining -= dt;
        if burst.pause_remaining <= 0.0 {
            burst.hops_remaining = burst.hops_per_burst;
            burst.hopping = true;
            burst.plan_hop(pos.pos.x, sprite.width, vw);
        }
        return;
    }

    let distance = (burst.hop_end_x - burst.hop_start_x).abs().max(1.0);
    let duration = distance / burst.hop_velocity.max(1.0);
    burst.hop_progress = (burst.hop_progress + dt / duration.max(1e-3)).min(1.0);
    let t = burst.hop_progress;

    let max_x = (vw - sprite.width).max(0.0);
    let eased = smoothstep(t);
    pos.pos.x =
        (burst.hop_start_x + (burst.hop_end_x - burst.hop_start_x) * eased).clamp(0.0, max_x);
    let y = burst.base_y - burst.hop_height * (PI * t).sin();
    pos.pos.y = y.clamp(0.0, (vh - sprite.height).max(0.0));

    if t >= 1.0 {
        burst.hops_remaining = burst.hops_remaining.saturating_sub(1);
        if burst.hops_remaining == 0 {
            burst.hopping = false;
            burst.pause_remaining = burst.stop_time;
        } else {
            burst.plan_hop(pos.pos.x, sprite.width, vw);
        }
    }
}
