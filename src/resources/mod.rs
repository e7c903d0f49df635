//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, viewport geometry, the
//! read-only animal catalog, styling and measurement for the speech notes,
//! configuration, and the texture store.
//!
//! Overview
//! - `catalog` – the animal catalog and utterance list (read-only inputs)
//! - `gameconfig` – INI configuration for the window and the scene
//! - `notemetrics` – text-width measurement used by the note layout engine
//! - `notestyle` – styling constants for the speech note boxes
//! - `rabbitconfig` – runtime-adjustable rabbit behavior tunables
//! - `texturestore` – loaded textures keyed by string IDs (non-send)
//! - `viewport` – current logical viewport dimensions
//! - `worldtime` – simulation time and delta

pub mod catalog;
pub mod gameconfig;
pub mod notemetrics;
pub mod notestyle;
pub mod rabbitconfig;
pub mod texturestore;
pub mod viewport;
pub mod worldtime;
