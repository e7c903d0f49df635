//! Keeps speech notes inside the viewport by bouncing their owners.
//!
//! Behaviors bounce the sprite itself off the edges; this system bounces on
//! the NOTE's footprint instead, so a wide note never gets clipped even when
//! the sprite is comfortably inside the window. Runs after movement so it
//! sees the frame's final sprite position.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::note::Note;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::startdelay::StartDelay;
use crate::resources::notemetrics::NoteMetrics;
use crate::resources::notestyle::NoteStyle;
use crate::resources::viewport::Viewport;
use crate::systems::notelayout::compute_note_placement;

pub fn note_bounce_system(
    viewport: Res<Viewport>,
    style: Res<NoteStyle>,
    metrics: Res<NoteMetrics>,
    mut query: Query<(&mut MapPosition, &mut RigidBody, &Sprite, &Note), Without<StartDelay>>,
) {
    for (mut position, mut body, sprite, note) in query.iter_mut() {
        bounce_note(
            &mut position,
            &mut body,
            sprite,
            note,
            &viewport,
            &style,
            metrics.0.as_ref(),
        );
    }
}

/// Reflect velocity and reposition the sprite when its note would leave the
/// viewport.
///
/// Horizontal checks carry a half-pixel tolerance so a box that is computed
/// to sit exactly on the margin does not oscillate across frames. On
/// overflow the sprite is moved so the box lands exactly on the margin,
/// derived from the centering relation between sprite and box. The top check
/// triggers when the box's desired top goes negative; the sprite is dropped
/// far enough that gap, arrow and box all fit above it.
pub fn bounce_note(
    position: &mut MapPosition,
    body: &mut RigidBody,
    sprite: &Sprite,
    note: &Note,
    viewport: &Viewport,
    style: &NoteStyle,
    measure: &dyn crate::resources::notemetrics::MeasureText,
) {
    let placement = compute_note_placement(measure, note, position.pos, sprite, style);
    if placement.is_empty() {
        return;
    }

    let overflow_left = placement.desired_x < style.margin - 0.5;
    let overflow_right =
        placement.desired_x > viewport.width - placement.box_width - style.margin + 0.5;
    if overflow_left || overflow_right {
        body.velocity.x = -body.velocity.x;
        let target_x = if overflow_left {
            style.margin
        } else {
            viewport.width - placement.box_width - style.margin
        };
        let sprite_x = target_x + placement.box_width / 2.0 - sprite.width / 2.0;
        position.pos.x = sprite_x.clamp(0.0, (viewport.width - sprite.width).max(0.0));
    }

    if placement.desired_y < 0.0 {
        body.velocity.y = -body.velocity.y;
        let sprite_y = style.gap + style.arrow_size + placement.box_height;
        position.pos.y = sprite_y.clamp(0.0, (viewport.height - sprite.height).max(0.0));
    }
}
