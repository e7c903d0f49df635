//! Event types and their observers.

pub mod clicked;
