//! ECS components for the moving animals.
//!
//! This module groups all component types that can be attached to entities in
//! the scene. Components define data such as position, velocity, locomotion
//! state, the speech note payload, and transient UI state.
//!
//! Submodules overview:
//! - [`animalref`] – link back to the catalog record an entity was built from
//! - [`highlight`] – remaining highlight-flash duration after a click
//! - [`mapposition`] – world-space position (top-left corner) of a sprite
//! - [`movement`] – locomotion behavior state blocks, init and resize hooks
//! - [`note`] – the two-line speech note text payload
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`sprite`] – 2D sprite rendering component with load status and AABB helpers
//! - [`startdelay`] – randomized startup countdown that staggers animations
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animalref;
pub mod highlight;
pub mod mapposition;
pub mod movement;
pub mod note;
pub mod rigidbody;
pub mod sprite;
pub mod startdelay;
pub mod zindex;
