//! Pixgrid Core: clipped RGB colors, pixel coordinates, and fixed-size images.
//!
//! [`Color`] and [`Coordinate`] are plain values. [`Image`] owns a grid of
//! colors whose extent is fixed at the type level and validates every
//! coordinate it is given before touching a cell.

pub mod color;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod image;

// Re-exports for convenience.
pub use color::{Color, MAX_COLOR_VALUE, MIN_COLOR_VALUE, clip_value};
pub use config::BrightnessClip;
pub use coordinate::{Coordinate, INVALID_ROW_COL};
pub use error::ImageError;
pub use image::{IMAGE_NUM_COLS, IMAGE_NUM_ROWS, Image, StandardImage};
