//! Punimals: a 2D scene of pun-speaking animals.
//!
//! Built on:
//! - **raylib** for windowing, graphics, and text measurement
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Each animal entity carries a locomotion behavior (slide, hop, zigzag,
//! flutter, orbit, rabbit, deer) and a speech note that word-wraps against
//! measured text widths. Two coordinators keep everything on screen: the
//! behaviors bounce the sprite itself, and a second pass bounces on the
//! note's footprint so wide notes never clip at the window edges.
//!
//! # Crate layout
//!
//! - [`components`] – ECS components (position, physics, sprites, notes,
//!   behaviors)
//! - [`events`] – click event and its observer
//! - [`game`] – scene setup from the catalog
//! - [`resources`] – ECS resources (catalog, config, viewport, stores)
//! - [`systems`] – ECS systems (movement, layout, bounce, render, input)

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
