//! Text-width measurement for note layout.
//!
//! The layout engine only needs one capability from the drawing surface:
//! measuring the pixel width of a string at a font size. That capability is
//! behind the [`MeasureText`] trait so the engine stays pure and the tests
//! can substitute a deterministic fixed-width measurer.

use bevy_ecs::prelude::Resource;
use std::ffi::CString;

/// Width measurement for a single line of text.
pub trait MeasureText {
    /// Measured pixel width of `text` at `font_size`.
    fn text_width(&self, text: &str, font_size: i32) -> f32;
}

/// Raylib-backed measurer using the default font. Valid once the window is
/// initialized.
pub struct RaylibMeasure;

impl MeasureText for RaylibMeasure {
    fn text_width(&self, text: &str, font_size: i32) -> f32 {
        // Interior NULs cannot come from the sanitized catalog; measure as
        // zero width instead of failing.
        let Ok(c_text) = CString::new(text) else {
            return 0.0;
        };
        unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), font_size) as f32 }
    }
}

/// Deterministic measurer for tests and headless runs: every character is
/// a fixed number of pixels wide.
pub struct FixedWidthMeasure(pub f32);

impl MeasureText for FixedWidthMeasure {
    fn text_width(&self, text: &str, _font_size: i32) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

/// Boxed measurer injected into the world.
#[derive(Resource)]
pub struct NoteMetrics(pub Box<dyn MeasureText + Send + Sync>);

impl NoteMetrics {
    /// The raylib default-font measurer used by the running application.
    pub fn raylib() -> Self {
        Self(Box::new(RaylibMeasure))
    }

    /// A fixed-width measurer; used by tests.
    pub fn fixed(px_per_char: f32) -> Self {
        Self(Box::new(FixedWidthMeasure(px_per_char)))
    }
}
