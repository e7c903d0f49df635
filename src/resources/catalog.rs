//! Read-only scene inputs: the animal catalog and the utterance list.
//!
//! Both collections are owned by external collaborators (the data-fetching
//! layer); this crate only deserializes and reads them. Records are assumed
//! to be already validated; unresolvable references are skipped with a
//! warning at scene build.

use bevy_ecs::prelude::Resource;
use log::info;
use serde::Deserialize;
use std::path::Path;

/// Immutable catalog record: one animal with its display name, image
/// reference, and locomotion behavior tag.
#[derive(Debug, Clone, Deserialize)]
pub struct Animal {
    pub id: u32,
    pub name: String,
    /// Texture key; resolved against `assets/animals/<image>.png`.
    pub image: String,
    pub movement_type: String,
}

/// Immutable utterance record: two optional text lines attached to an animal.
#[derive(Debug, Clone, Deserialize)]
pub struct Word {
    pub id: u32,
    #[serde(default)]
    pub input_1: String,
    #[serde(default)]
    pub input_2: String,
    pub animal_id: u32,
}

/// The deserialized catalog, inserted into the world once at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct Catalog {
    pub animals: Vec<Animal>,
    pub words: Vec<Word>,
}

impl Catalog {
    /// Parse a catalog from two JSON arrays.
    pub fn from_json(animals_json: &str, words_json: &str) -> Result<Self, String> {
        let animals: Vec<Animal> = serde_json::from_str(animals_json)
            .map_err(|e| format!("Failed to parse animals: {e}"))?;
        let words: Vec<Word> =
            serde_json::from_str(words_json).map_err(|e| format!("Failed to parse words: {e}"))?;
        Ok(Self { animals, words })
    }

    /// Load a catalog from two JSON files on disk.
    pub fn load(animals_path: &Path, words_path: &Path) -> Result<Self, String> {
        let animals_json = std::fs::read_to_string(animals_path)
            .map_err(|e| format!("Failed to read {}: {e}", animals_path.display()))?;
        let words_json = std::fs::read_to_string(words_path)
            .map_err(|e| format!("Failed to read {}: {e}", words_path.display()))?;
        let catalog = Self::from_json(&animals_json, &words_json)?;
        info!(
            "Loaded catalog: {} animals, {} words",
            catalog.animals.len(),
            catalog.words.len()
        );
        Ok(catalog)
    }

    /// Look up an animal by id.
    pub fn animal(&self, id: u32) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIMALS: &str = r#"[
        {"id": 1, "name": "Maltese", "image": "maltese", "movement_type": "slide",
         "created_at": 0, "updated_at": 0, "deleted_at": null},
        {"id": 2, "name": "Rabbit", "image": "rabbit", "movement_type": "rabbit"}
    ]"#;
    const WORDS: &str = r#"[
        {"id": 10, "input_1": "so", "input_2": "maltesed", "animal_id": 1,
         "author_fingerprint": "x", "likes": 0},
        {"id": 11, "animal_id": 2}
    ]"#;

    #[test]
    fn parses_catalog_ignoring_unknown_fields() {
        let catalog = Catalog::from_json(ANIMALS, WORDS).unwrap();
        assert_eq!(catalog.animals.len(), 2);
        assert_eq!(catalog.words.len(), 2);
        assert_eq!(catalog.animal(2).unwrap().movement_type, "rabbit");
    }

    #[test]
    fn missing_inputs_default_to_empty() {
        let catalog = Catalog::from_json(ANIMALS, WORDS).unwrap();
        assert_eq!(catalog.words[1].input_1, "");
        assert_eq!(catalog.words[1].input_2, "");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Catalog::from_json("not json", WORDS).is_err());
    }

    #[test]
    fn unknown_animal_lookup_is_none() {
        let catalog = Catalog::from_json(ANIMALS, WORDS).unwrap();
        assert!(catalog.animal(99).is_none());
    }
}
