use bevy_ecs::prelude::Component;

/// Link back to the catalog record a moving entity was built from.
///
/// The catalog itself is read-only reference data; this component carries the
/// few fields the simulation needs at runtime (click notification, logging).
#[derive(Component, Clone, Debug)]
pub struct AnimalRef {
    pub animal_id: u32,
    pub name: String,
}

impl AnimalRef {
    pub fn new(animal_id: u32, name: impl Into<String>) -> Self {
        Self {
            animal_id,
            name: name.into(),
        }
    }
}
