//! Event and observer for clicking an animal sprite.
//!
//! The pointer system fires [`AnimalClickedEvent`] when a left click lands on
//! a sprite. The observer logs the animal's name and starts (or restarts) a
//! highlight on the clicked entity.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::animalref::AnimalRef;
use crate::components::highlight::Highlight;

/// How long the click highlight stays visible.
pub const HIGHLIGHT_SECONDS: f32 = 1.5;

/// Fired when a left click hits an animal sprite. Carries the clicked entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct AnimalClickedEvent {
    pub entity: Entity,
}

/// Observer that reacts to a click: logs which animal was hit and inserts a
/// fresh [`Highlight`], resetting the timer if one is already running.
pub fn observe_animal_clicked(
    trigger: On<AnimalClickedEvent>,
    animals: Query<&AnimalRef>,
    mut commands: Commands,
) {
    let entity = trigger.event().entity;
    if let Ok(animal) = animals.get(entity) {
        log::info!("clicked animal '{}' (id {})", animal.name, animal.animal_id);
    }
    commands
        .entity(entity)
        .insert(Highlight::new(HIGHLIGHT_SECONDS));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::observer::Observer;

    #[test]
    fn click_inserts_highlight_on_target() {
        let mut world = World::new();
        world.spawn(Observer::new(observe_animal_clicked));
        world.flush();

        let entity = world
            .spawn(AnimalRef {
                animal_id: 7,
                name: "capybara".to_string(),
            })
            .id();
        world.trigger(AnimalClickedEvent { entity });
        world.flush();

        let highlight = world.entity(entity).get::<Highlight>().unwrap();
        assert_eq!(highlight.remaining, HIGHLIGHT_SECONDS);
    }

    #[test]
    fn second_click_restarts_the_timer() {
        let mut world = World::new();
        world.spawn(Observer::new(observe_animal_clicked));
        world.flush();

        let entity = world
            .spawn(AnimalRef {
                animal_id: 1,
                name: "deer".to_string(),
            })
            .id();
        world.trigger(AnimalClickedEvent { entity });
        world.flush();
        world.entity_mut(entity).get_mut::<Highlight>().unwrap().remaining = 0.2;
        world.trigger(AnimalClickedEvent { entity });
        world.flush();

        let highlight = world.entity(entity).get::<Highlight>().unwrap();
        assert_eq!(highlight.remaining, HIGHLIGHT_SECONDS);
    }
}
