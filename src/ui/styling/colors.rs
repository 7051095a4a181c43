//! Color definitions and palette management
//!
//! Colors are stored as RGB565, the native format of the draw targets the
//! widgets render to. Use [`rgb`] to convert from 8-bit channels.

use embedded_graphics::pixelcolor::Rgb565;

/// Convert 8-bit RGB channels to RGB565 (R>>3, G>>2, B>>3)
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Scale an 8-bit channel intensity from a `0..=100` value
pub fn channel_from_percent(value: f32) -> u8 {
    (value.clamp(0.0, 100.0) * 255.0 / 100.0) as u8
}

// ============================================================================
// Base Colors
// ============================================================================

/// Scene background
pub const COLOR_BACKGROUND: Rgb565 = rgb(0, 0, 0);

/// Secondary background/surface color
pub const COLOR_SURFACE: Rgb565 = rgb(240, 240, 240);

/// Border/stroke color - medium gray
pub const COLOR_STROKE: Rgb565 = rgb(150, 150, 150);

pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

pub const LIGHT_GRAY: Rgb565 = rgb(200, 200, 200);

pub const DARK_GRAY: Rgb565 = rgb(80, 80, 80);

// ============================================================================
// Widget Colors
// ============================================================================

pub const BUTTON_IDLE: Rgb565 = rgb(179, 230, 255);
pub const BUTTON_HOVER: Rgb565 = rgb(128, 212, 255);
pub const BUTTON_PRESSED: Rgb565 = rgb(0, 136, 204);

pub const SLIDER_TRACK: Rgb565 = rgb(200, 200, 220);
pub const SLIDER_THUMB: Rgb565 = rgb(150, 150, 240);

pub const TOGGLE_TRACK: Rgb565 = rgb(150, 150, 150);
pub const TOGGLE_TRACK_ON: Rgb565 = rgb(76, 154, 113);

pub const MESSAGE_ERROR: Rgb565 = rgb(255, 100, 100);
pub const MESSAGE_DONE: Rgb565 = rgb(100, 255, 100);

// ============================================================================
// Skill Tree Colors
// ============================================================================

pub const NODE_BLOCKED: Rgb565 = rgb(40, 40, 40);
pub const NODE_UNLOCKED: Rgb565 = rgb(80, 80, 40);
pub const NODE_ACTIVATED: Rgb565 = rgb(160, 160, 40);

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette for consistent UI theming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Main background color
    pub background: Rgb565,

    /// Surface color for windows and panels
    pub surface: Rgb565,

    /// Primary text color
    pub text_primary: Rgb565,

    /// Text drawn on light surfaces
    pub text_on_surface: Rgb565,

    /// Border color for separators and outlines
    pub border: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            surface: COLOR_SURFACE,
            text_primary: WHITE,
            text_on_surface: BLACK,
            border: COLOR_STROKE,
        }
    }
}
