// src/ui/components/label.rs
//! Text label and the font helpers shared by text-bearing widgets

use crate::ui::core::{Drawable, EventResult, InputEvent, Touchable};
use crate::ui::styling::Style;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{
    MonoFont, MonoTextStyle,
    ascii::{FONT_5X8, FONT_6X10, FONT_8X13, FONT_10X20},
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Built-in fonts, smallest first
const FONTS: [&MonoFont<'static>; 4] = [&FONT_5X8, &FONT_6X10, &FONT_8X13, &FONT_10X20];

/// Share of the widget width the label may take
const WIDTH_FRACTION: f32 = 0.6;
/// Share of the widget height the label may take
const HEIGHT_FRACTION: f32 = 0.4;

/// Copy `text` into a bounded string, dropping characters that do not fit.
pub fn truncated<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Width in pixels of `text` rendered with `font`
pub fn text_width(text: &str, font: &MonoFont<'_>) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

/// Largest built-in font whose rendering of `text` fits in 60 % of the width
/// and 40 % of the height of `area`. Falls back to the smallest font.
pub fn fit_font(text: &str, area: Size) -> &'static MonoFont<'static> {
    let max_width = area.width as f32 * WIDTH_FRACTION;
    let max_height = area.height as f32 * HEIGHT_FRACTION;

    FONTS
        .iter()
        .rev()
        .find(|font| {
            text_width(text, font) as f32 <= max_width
                && font.character_size.height as f32 <= max_height
        })
        .copied()
        .unwrap_or(FONTS[0])
}

/// Text style that centres text on a point
pub(crate) fn centered() -> embedded_graphics::text::TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

/// Static or updatable text. Never consumes events.
#[derive(Clone)]
pub struct Label {
    position: Point,
    text: heapless::String<64>,
    font: &'static MonoFont<'static>,
    alignment: Alignment,
    style: Style,
    dirty: bool,
}

impl Label {
    /// Label whose text starts at `position` (top-left of the first glyph).
    pub fn new(position: Point, text: &str) -> Self {
        Self {
            position,
            text: truncated(text),
            font: &FONT_6X10,
            alignment: Alignment::Left,
            style: Style::default(),
            dirty: true,
        }
    }

    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    /// Horizontal alignment of the text relative to `position`.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Update the displayed text, marking the label dirty if it changed.
    pub fn set_text(&mut self, text: &str) {
        let new_text = truncated(text);
        if self.text != new_text {
            self.text = new_text;
            self.dirty = true;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn text_drawable(&self) -> Text<'_, MonoTextStyle<'static, Rgb565>> {
        let color = self.style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(self.font, color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(&self.text, self.position, character_style, text_style)
    }
}

impl Drawable for Label {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.style.background_color.is_some() {
            Drawable::bounds(self)
                .into_styled(self.style.to_primitive_style())
                .draw(display)?;
        }
        self.text_drawable().draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.text_drawable().bounding_box()
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for Label {
    fn contains_point(&self, point: Point) -> bool {
        crate::geometry::contains(&Drawable::bounds(self), point)
    }

    fn handle_event(&mut self, _event: &InputEvent) -> EventResult {
        EventResult::NotHandled
    }
}

impl Transform for Label {
    fn translate(&self, by: Point) -> Self {
        let mut moved = self.clone();
        moved.translate_mut(by);
        moved
    }

    fn translate_mut(&mut self, by: Point) -> &mut Self {
        self.position += by;
        self.dirty = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::Canvas;

    #[test]
    fn test_truncated_keeps_prefix() {
        let s: heapless::String<4> = truncated("abcdef");
        assert_eq!(s.as_str(), "abcd");
        let s: heapless::String<4> = truncated("ab");
        assert_eq!(s.as_str(), "ab");
    }

    #[test]
    fn test_fit_font_prefers_largest_fitting() {
        let font = fit_font("Ok", Size::new(200, 100));
        assert_eq!(font.character_size, FONT_10X20.character_size);

        let font = fit_font("Cancel", Size::new(100, 30));
        assert_eq!(font.character_size, FONT_6X10.character_size);

        let font = fit_font("a very long label indeed", Size::new(20, 10));
        assert_eq!(font.character_size, FONT_5X8.character_size);
    }

    #[test]
    fn test_set_text_marks_dirty_only_on_change() {
        let mut label = Label::new(Point::new(0, 0), "Clicks: 0");
        label.mark_clean();
        label.set_text("Clicks: 0");
        assert!(!label.is_dirty());
        label.set_text("Clicks: 1");
        assert!(label.is_dirty());
        assert_eq!(label.text(), "Clicks: 1");
    }

    #[test]
    fn test_label_draws_and_ignores_events() {
        let mut label = Label::new(Point::new(2, 2), "Hi");
        let mut canvas = Canvas::new(40, 20);
        label.draw(&mut canvas).unwrap();
        assert!(canvas.count(Rgb565::WHITE) > 0);

        let press = InputEvent::PointerDown {
            button: crate::ui::core::PointerButton::Left,
            position: Point::new(3, 3),
        };
        assert_eq!(label.handle_event(&press), EventResult::NotHandled);
    }
}
