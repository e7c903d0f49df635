//! Scene setup: turns the catalog into moving, speaking animal entities.

use bevy_ecs::prelude::*;
use raylib::prelude::RaylibTexture2D;

use crate::components::animalref::AnimalRef;
use crate::components::mapposition::MapPosition;
use crate::components::movement::Movement;
use crate::components::note::Note;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::startdelay::StartDelay;
use crate::components::zindex::ZIndex;
use crate::resources::catalog::{Animal, Catalog, Word};
use crate::resources::gameconfig::GameConfig;
use crate::resources::rabbitconfig::RabbitConfig;
use crate::resources::texturestore::TextureStore;
use crate::resources::viewport::Viewport;

/// Largest on-screen footprint for an animal image. Natural image sizes are
/// fitted into this box preserving aspect ratio.
pub const MAX_SPRITE_WIDTH: f32 = 140.0;
pub const MAX_SPRITE_HEIGHT: f32 = 100.0;

/// Upper bound of the random stagger before an entity starts moving.
pub const MAX_START_DELAY: f32 = 0.8;

/// Pair the first `max_words` utterances with their animals. Utterances whose
/// `animal_id` resolves to nothing are skipped with a warning; they do not
/// consume a slot.
pub fn resolve_scene_words(catalog: &Catalog, max_words: usize) -> Vec<(Word, Animal)> {
    let mut resolved = Vec::new();
    for word in &catalog.words {
        if resolved.len() >= max_words {
            break;
        }
        match catalog.animal(word.animal_id) {
            Some(animal) => resolved.push((word.clone(), animal.clone())),
            None => {
                log::warn!(
                    "word {} references unknown animal {}, skipping",
                    word.id,
                    word.animal_id
                );
            }
        }
    }
    resolved
}

/// Build the note for an utterance. Blank utterances fall back to the
/// animal's name on the first line so every entity has something to say.
pub fn note_for(word: &Word, animal: &Animal) -> Note {
    let note = Note::new(word.input_1.trim(), word.input_2.trim());
    if note.is_blank() {
        Note::new(animal.name.as_str(), "")
    } else {
        note
    }
}

/// One-shot setup system: loads textures and spawns one entity per resolved
/// utterance, each with a randomized position, velocity, start stagger, and
/// the behavior named by its animal's tag.
pub fn setup_scene(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    thread: NonSend<raylib::RaylibThread>,
    mut textures: NonSendMut<TextureStore>,
    catalog: Res<Catalog>,
    config: Res<GameConfig>,
    rabbit_config: Res<RabbitConfig>,
    viewport: Res<Viewport>,
    mut commands: Commands,
) {
    let mut rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let resolved = resolve_scene_words(&catalog, config.max_words);
    log::info!("spawning {} animals", resolved.len());

    for (index, (word, animal)) in resolved.into_iter().enumerate() {
        let (width, height, loaded) = match textures.get(&animal.image) {
            Some(tex) => {
                let (w, h) = crate::components::sprite::fit_within_bounds(
                    tex.width() as f32,
                    tex.height() as f32,
                    MAX_SPRITE_WIDTH,
                    MAX_SPRITE_HEIGHT,
                );
                (w, h, true)
            }
            None => {
                let path = format!("./assets/animals/{}.png", animal.image);
                match rl.load_texture(&thread, &path) {
                    Ok(tex) => {
                        let (w, h) = crate::components::sprite::fit_within_bounds(
                            tex.width() as f32,
                            tex.height() as f32,
                            MAX_SPRITE_WIDTH,
                            MAX_SPRITE_HEIGHT,
                        );
                        textures.add(animal.image.clone(), tex);
                        (w, h, true)
                    }
                    Err(e) => {
                        log::warn!("failed to load {path}: {e}, using placeholder");
                        (MAX_SPRITE_WIDTH, MAX_SPRITE_HEIGHT, false)
                    }
                }
            }
        };
        let mut sprite = Sprite::new(animal.image.clone(), width, height);
        sprite.loaded = loaded;

        let mut position = MapPosition::new(
            rng.f32() * (viewport.width - sprite.width).max(0.0),
            rng.f32() * (viewport.height - sprite.height).max(0.0),
        );
        let speed = 40.0 + 80.0 * rng.f32();
        let angle = rng.f32() * std::f32::consts::TAU;
        let mut body = RigidBody::with_velocity(speed * angle.cos(), speed * angle.sin());

        let movement = Movement::from_tag(
            &animal.movement_type,
            &mut position,
            &mut body,
            &sprite,
            viewport.width,
            viewport.height,
            &rabbit_config,
            &mut rng,
        );

        commands.spawn((
            position,
            body,
            sprite,
            note_for(&word, &animal),
            movement,
            AnimalRef::new(animal.id, animal.name.clone()),
            ZIndex(index as i32),
            StartDelay::new(rng.f32() * MAX_START_DELAY),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            animals: vec![
                Animal {
                    id: 1,
                    name: "Maltese".to_string(),
                    image: "maltese".to_string(),
                    movement_type: "slide".to_string(),
                },
                Animal {
                    id: 2,
                    name: "Rabbit".to_string(),
                    image: "rabbit".to_string(),
                    movement_type: "rabbit".to_string(),
                },
            ],
            words: vec![
                Word {
                    id: 10,
                    input_1: "so".to_string(),
                    input_2: "maltesed".to_string(),
                    animal_id: 1,
                },
                Word {
                    id: 11,
                    input_1: "".to_string(),
                    input_2: "".to_string(),
                    animal_id: 99,
                },
                Word {
                    id: 12,
                    input_1: "  ".to_string(),
                    input_2: "".to_string(),
                    animal_id: 2,
                },
            ],
        }
    }

    #[test]
    fn unresolved_words_are_skipped_without_consuming_slots() {
        let resolved = resolve_scene_words(&catalog(), 2);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].0.id, 10);
        assert_eq!(resolved[1].0.id, 12);
    }

    #[test]
    fn max_words_caps_the_scene() {
        let resolved = resolve_scene_words(&catalog(), 1);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn blank_utterance_falls_back_to_the_animal_name() {
        let c = catalog();
        let note = note_for(&c.words[2], &c.animals[1]);
        assert_eq!(note.line1, "Rabbit");
        assert_eq!(note.line2, "");
    }

    #[test]
    fn utterance_lines_are_trimmed() {
        let word = Word {
            id: 1,
            input_1: " such pun ".to_string(),
            input_2: "\tmuch wow ".to_string(),
            animal_id: 1,
        };
        let note = note_for(&word, &catalog().animals[0]);
        assert_eq!(note.line1, "such pun");
        assert_eq!(note.line2, "much wow");
    }
}
