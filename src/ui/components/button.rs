// src/ui/components/button.rs
//! Button component with hover and pressed states

use crate::geometry;
use crate::ui::components::label::{centered, fit_font, truncated};
use crate::ui::core::{Action, Drawable, EventResult, InputEvent, PointerButton, Touchable};
use crate::ui::interaction::PressState;
use crate::ui::styling::StateColors;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use log::debug;

/// Button component with label and action
///
/// A click is a left pointer-down inside the button followed by a pointer-up
/// inside it. Each click yields exactly one [`Action::Click`] carrying the
/// button id; everything else about the press only changes the fill color.
///
/// # Visual Features
/// - Rounded corners (configurable radius)
/// - Separate fill colors for idle, hovered and pressed
/// - Label font picked to fit the button
///
/// # Examples
/// ```ignore
/// let ok = Button::new(
///     1,
///     Rectangle::new(Point::new(20, 50), Size::new(100, 30)),
///     "Ok",
/// )
/// .with_border_radius(4);
/// ```
#[derive(Clone)]
pub struct Button {
    id: u16,
    bounds: Rectangle,
    label: heapless::String<32>,
    font: &'static MonoFont<'static>,
    state: PressState,
    enabled: bool,
    colors: StateColors,
    text_color: Rgb565,
    border_radius: u32,
    dirty: bool,
}

impl Button {
    /// Create a new button with the specified id, bounds and label.
    ///
    /// Labels longer than 32 characters are truncated.
    pub fn new(id: u16, bounds: Rectangle, label: &str) -> Self {
        let label: heapless::String<32> = truncated(label);
        let font = fit_font(&label, bounds.size);

        Self {
            id,
            bounds,
            label,
            font,
            state: PressState::Idle,
            enabled: true,
            colors: StateColors::default(),
            text_color: Rgb565::BLACK,
            border_radius: 0,
            dirty: true,
        }
    }

    pub fn with_colors(mut self, colors: StateColors) -> Self {
        self.colors = colors;
        self.dirty = true;
        self
    }

    pub fn with_text_color(mut self, color: Rgb565) -> Self {
        self.text_color = color;
        self.dirty = true;
        self
    }

    /// Override the fitted label font.
    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self.dirty = true;
        self
    }

    /// Set the border radius for rounded corners. Default is 0.
    pub fn with_border_radius(mut self, radius: u32) -> Self {
        self.border_radius = radius;
        self.dirty = true;
        self
    }

    /// Set the button's bounds, refitting the label font.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.font = fit_font(&self.label, bounds.size);
            self.dirty = true;
        }
    }

    /// Enable or disable the button.
    ///
    /// Disabled buttons ignore every event and fall back to the idle color.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.state = PressState::Idle;
            self.dirty = true;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    /// Current fill color, derived from the interaction state
    pub fn fill_color(&self) -> Rgb565 {
        self.colors.for_state(self.state)
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let corner_radius = Size::new(self.border_radius, self.border_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner_radius)
            .into_styled(PrimitiveStyle::with_fill(self.fill_color()))
            .draw(display)?;

        let text_style = MonoTextStyle::new(self.font, self.text_color);
        Text::with_text_style(&self.label, self.bounds.center(), text_style, centered())
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
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

impl Touchable for Button {
    fn contains_point(&self, point: Point) -> bool {
        geometry::contains(&self.bounds, point)
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if !self.enabled {
            return EventResult::NotHandled;
        }

        match *event {
            InputEvent::PointerMoved { position } => {
                if self.state.hover(self.contains_point(position)) {
                    self.dirty = true;
                }
                EventResult::NotHandled
            }
            InputEvent::PointerDown {
                button: PointerButton::Left,
                position,
            } => {
                if self.state.press(self.contains_point(position)) {
                    self.dirty = true;
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            InputEvent::PointerUp {
                button: PointerButton::Left,
                position,
            } => {
                let inside = self.contains_point(position);
                if !self.state.release(inside) {
                    return EventResult::NotHandled;
                }
                self.dirty = true;
                if inside {
                    debug!("Button {} '{}' clicked", self.id, self.label);
                    EventResult::Action(Action::Click(self.id))
                } else {
                    EventResult::Handled
                }
            }
            _ => EventResult::NotHandled,
        }
    }
}

impl Transform for Button {
    fn translate(&self, by: Point) -> Self {
        let mut moved = self.clone();
        moved.translate_mut(by);
        moved
    }

    fn translate_mut(&mut self, by: Point) -> &mut Self {
        self.bounds.top_left += by;
        self.dirty = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::colors::{BUTTON_HOVER, BUTTON_IDLE, BUTTON_PRESSED};
    use crate::ui::test_support::Canvas;

    fn button() -> Button {
        Button::new(7, Rectangle::new(Point::new(10, 10), Size::new(100, 40)), "Ok")
    }

    fn down(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    fn up(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerUp {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    fn moved(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerMoved {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_outside_events_are_ignored() {
        let mut b = button();
        for event in [down(0, 0), up(0, 0), moved(200, 5), down(110, 30)] {
            assert!(!b.handle_event(&event).is_consumed());
            assert_eq!(b.state(), PressState::Idle);
        }
    }

    #[test]
    fn test_click_yields_one_action() {
        let mut b = button();
        b.handle_event(&moved(50, 20));
        assert_eq!(b.state(), PressState::Hovered);

        assert_eq!(b.handle_event(&down(50, 20)), EventResult::Handled);
        assert_eq!(b.fill_color(), BUTTON_PRESSED);

        let result = b.handle_event(&up(50, 20));
        assert_eq!(result, EventResult::Action(Action::Click(7)));
        assert_eq!(b.state(), PressState::Hovered);
        assert_eq!(b.fill_color(), BUTTON_HOVER);

        // a second release without a press is not a click
        assert_eq!(b.handle_event(&up(50, 20)), EventResult::NotHandled);
    }

    #[test]
    fn test_release_outside_cancels_click() {
        let mut b = button();
        b.handle_event(&down(50, 20));
        // moves while pressed do not change state
        b.handle_event(&moved(300, 300));
        assert_eq!(b.state(), PressState::Pressed);

        let result = b.handle_event(&up(300, 300));
        assert_eq!(result, EventResult::Handled);
        assert_eq!(result.action(), None);
        assert_eq!(b.fill_color(), BUTTON_IDLE);
    }

    #[test]
    fn test_right_button_does_not_press() {
        let mut b = button();
        let right = InputEvent::PointerDown {
            button: PointerButton::Right,
            position: Point::new(50, 20),
        };
        assert_eq!(b.handle_event(&right), EventResult::NotHandled);
        assert_eq!(b.state(), PressState::Idle);
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut b = button();
        b.set_enabled(false);
        assert_eq!(b.handle_event(&down(50, 20)), EventResult::NotHandled);
        assert_eq!(b.handle_event(&up(50, 20)), EventResult::NotHandled);
        assert!(!b.is_enabled());
    }

    #[test]
    fn test_zero_size_button_never_hit() {
        let mut b = Button::new(1, Rectangle::new(Point::new(10, 10), Size::zero()), "x");
        assert!(!b.handle_event(&down(10, 10)).is_consumed());
    }

    #[test]
    fn test_draw_uses_state_color() {
        let mut b = button();
        let mut canvas = Canvas::new(140, 60);
        b.draw(&mut canvas).unwrap();
        assert!(canvas.count(BUTTON_IDLE) > 0);

        b.handle_event(&down(50, 20));
        b.draw(&mut canvas).unwrap();
        assert_eq!(canvas.count(BUTTON_IDLE), 0);
        assert!(canvas.count(BUTTON_PRESSED) > 0);
    }

    #[test]
    fn test_translate_moves_hit_region() {
        let mut b = button();
        b.translate_mut(Point::new(100, 0));
        assert!(!b.contains_point(Point::new(50, 20)));
        assert!(b.contains_point(Point::new(150, 20)));
    }
}
