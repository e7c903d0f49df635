//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and a loader that keeps defaults for missing values.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [scene]
//! max_words = 3
//! seed = 42
//!
//! [rabbit]
//! hop_distance = 120
//! hop_height = 60
//! hop_velocity = 240
//! stop_time = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::rabbitconfig::RabbitConfig;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MAX_WORDS: usize = 3;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_ANIMALS_PATH: &str = "./assets/animals.json";
const DEFAULT_WORDS_PATH: &str = "./assets/words.json";

/// Game configuration resource.
///
/// Stores window settings, scene parameters, and the rabbit behavior
/// defaults. Missing file or missing values fall back to these defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// How many utterances become moving sprites.
    pub max_words: usize,
    /// Optional RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Path to the animal catalog JSON.
    pub animals_path: PathBuf,
    /// Path to the utterance list JSON.
    pub words_path: PathBuf,
    /// Startup values for the rabbit behavior tunables.
    pub rabbit: RabbitConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            max_words: DEFAULT_MAX_WORDS,
            seed: None,
            animals_path: PathBuf::from(DEFAULT_ANIMALS_PATH),
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            rabbit: RabbitConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [scene] section
        if let Some(max_words) = config.getuint("scene", "max_words").ok().flatten() {
            self.max_words = max_words as usize;
        }
        if let Some(seed) = config.getuint("scene", "seed").ok().flatten() {
            self.seed = Some(seed);
        }
        if let Some(animals) = config.get("scene", "animals") {
            self.animals_path = PathBuf::from(animals);
        }
        if let Some(words) = config.get("scene", "words") {
            self.words_path = PathBuf::from(words);
        }

        // [rabbit] section
        if let Some(distance) = config.getfloat("rabbit", "hop_distance").ok().flatten() {
            self.rabbit.hop_distance = distance as f32;
        }
        if let Some(height) = config.getfloat("rabbit", "hop_height").ok().flatten() {
            self.rabbit.hop_height = height as f32;
        }
        if let Some(velocity) = config.getfloat("rabbit", "hop_velocity").ok().flatten() {
            self.rabbit.hop_velocity = velocity as f32;
        }
        if let Some(stop_time) = config.getfloat("rabbit", "stop_time").ok().flatten() {
            self.rabbit.stop_time = stop_time as f32;
        }
        self.rabbit = self.rabbit.sanitized();

        info!(
            "Loaded config: {}x{} window, fps={}, max_words={}, seed={:?}",
            self.window_width, self.window_height, self.target_fps, self.max_words, self.seed
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.max_words, 3);
        assert!(config.seed.is_none());
        assert_eq!(config.rabbit, RabbitConfig::default());
    }

    #[test]
    fn missing_file_is_an_error_not_a_panic() {
        let mut config = GameConfig::with_path("/nonexistent/punimals.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(config.window_size(), (1280, 720));
    }
}
