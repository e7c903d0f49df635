//! Simulation and rendering systems.
//!
//! This module groups all ECS systems that advance the scene each frame.
//! Per-frame order is: time → start delays → movement → note bounce →
//! highlight → pointer → render, with resize handled between frames.
//!
//! Submodules overview
//! - [`highlight`] – tick down highlight-flash countdowns
//! - [`movement`] – advance each entity per its locomotion behavior
//! - [`notebounce`] – bounce entities whose note box would leave the viewport
//! - [`notelayout`] – word-wrapping and note box placement (pure functions)
//! - [`pointer`] – mouse hit-testing, cursor feedback, click events
//! - [`render`] – draw sprites, note boxes, and highlights using raylib
//! - [`resize`] – propagate viewport resizes through behavior resize hooks
//! - [`startdelay`] – decrement startup delays that stagger animations
//! - [`time`] – update simulation time and clamped delta

pub mod highlight;
pub mod movement;
pub mod notebounce;
pub mod notelayout;
pub mod pointer;
pub mod render;
pub mod resize;
pub mod startdelay;
pub mod time;
