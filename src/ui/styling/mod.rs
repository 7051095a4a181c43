//! Styling system for UI elements
//!
//! - [`colors`] - Color constants, conversion helpers and the palette
//! - [`style`] - Surface styles, padding and per-state fill colors

pub mod colors;
pub mod style;

pub use colors::{ColorPalette, rgb};
pub use style::{Padding, StateColors, Style};
