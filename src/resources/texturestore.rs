//! Texture store resource.
//!
//! A non-send resource that stores loaded textures keyed by string IDs.
//! Textures are loaded during scene setup and referenced by key in
//! [`Sprite`](crate::components::sprite::Sprite) components.
//!
//! Note: this is a non-send resource because raylib textures must be
//! accessed from the main thread only.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system
/// parameters.
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Add a texture with the given key.
    pub fn add(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }

    /// Whether a texture with the given key is loaded.
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.textures.contains_key(id.as_ref())
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
