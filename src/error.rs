//! Error types for the constellation.
//!
//! Only configuration can fail: coordinates and pointer positions coming
//! from the window are trusted, an absent pointer is a normal state and an
//! empty field is valid.

use thiserror::Error;

/// Configuration errors raised before any particle is touched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// A surface dimension is NaN, infinite or negative.
    #[error("surface dimensions must be finite and non-negative, got {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
    /// The seeding density is NaN, infinite, zero or negative.
    #[error("particle density must be a positive finite number, got {0}")]
    InvalidDensity(f32),
}
