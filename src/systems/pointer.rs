//! Mouse hover and click handling for animal sprites.

use bevy_ecs::prelude::*;
use raylib::consts::{MouseButton, MouseCursor};

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::clicked::AnimalClickedEvent;

/// Hit-tests the cursor against sprite rectangles and fires
/// [`AnimalClickedEvent`] on a left click.
///
/// When sprites overlap, the one with the highest [`ZIndex`] wins, matching
/// draw order so the click lands on whatever the user actually sees on top.
/// The cursor switches to a pointing hand while hovering any sprite.
pub fn pointer_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    query: Query<(Entity, &MapPosition, &Sprite, &ZIndex)>,
    mut commands: Commands,
) {
    let mouse = rl.get_mouse_position();

    let mut top_hit: Option<(Entity, ZIndex)> = None;
    for (entity, position, sprite, z) in query.iter() {
        if !sprite.contains_point(position.pos, mouse) {
            continue;
        }
        match top_hit {
            Some((_, best_z)) if best_z >= *z => {}
            _ => top_hit = Some((entity, *z)),
        }
    }

    if top_hit.is_some() {
        rl.set_mouse_cursor(MouseCursor::MOUSE_CURSOR_POINTING_HAND);
    } else {
        rl.set_mouse_cursor(MouseCursor::MOUSE_CURSOR_DEFAULT);
    }

    if let Some((entity, _)) = top_hit
        && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
    {
        commands.trigger(AnimalClickedEvent { entity });
    }
}
