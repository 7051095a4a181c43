//! Surface styles and per-state fill colors

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

use super::colors::{BUTTON_HOVER, BUTTON_IDLE, BUTTON_PRESSED, WHITE};
use crate::ui::interaction::PressState;

/// Inner spacing between an element's edge and its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    pub fn all(value: u32) -> Self {
        Self::symmetric(value, value)
    }

    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// left + right
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// top + bottom
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// How a static surface (label background, panel) is painted
///
/// ```ignore
/// let panel_style = Style::new()
///     .with_background(COLOR_SURFACE)
///     .with_border(COLOR_STROKE, 1)
///     .with_padding(Padding::all(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub background_color: Option<Rgb565>,
    /// Text color
    pub foreground_color: Option<Rgb565>,
    pub border_color: Option<Rgb565>,
    /// 0 draws no border
    pub border_width: u32,
    pub padding: Padding,
}

impl Default for Style {
    /// White text on nothing
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: Some(WHITE),
            border_color: None,
            border_width: 0,
            padding: Padding::default(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Fill and stroke for drawing the surface with embedded-graphics
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();
        if let Some(fill) = self.background_color {
            builder = builder.fill_color(fill);
        }
        if let Some(stroke) = self.border_color.filter(|_| self.border_width > 0) {
            builder = builder.stroke_color(stroke).stroke_width(self.border_width);
        }
        builder.build()
    }
}

/// Fill colors of a pressable widget, one per [`PressState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColors {
    pub idle: Rgb565,
    pub hovered: Rgb565,
    pub pressed: Rgb565,
}

impl Default for StateColors {
    fn default() -> Self {
        Self {
            idle: BUTTON_IDLE,
            hovered: BUTTON_HOVER,
            pressed: BUTTON_PRESSED,
        }
    }
}

impl StateColors {
    /// The same color in every state
    pub fn uniform(color: Rgb565) -> Self {
        Self {
            idle: color,
            hovered: color,
            pressed: color,
        }
    }

    pub fn for_state(&self, state: PressState) -> Rgb565 {
        match state {
            PressState::Idle => self.idle,
            PressState::Hovered => self.hovered,
            PressState::Pressed => self.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_border_is_not_stroked() {
        let style = Style::new().with_border(WHITE, 0).to_primitive_style();
        assert_eq!(style.stroke_color, None);
        assert_eq!(style.fill_color, None);
    }

    #[test]
    fn test_padding_totals() {
        let p = Padding::symmetric(3, 5);
        assert_eq!((p.vertical(), p.horizontal()), (6, 10));
        assert_eq!(Padding::all(4).horizontal(), 8);
    }
}
