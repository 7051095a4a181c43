// src/ui/components/toggle.rs
//! On/off switch with a sliding knob

use crate::geometry;
use crate::ui::core::{Action, Drawable, EventResult, InputEvent, PointerButton, Touchable};
use crate::ui::styling::colors::{TOGGLE_TRACK, TOGGLE_TRACK_ON, WHITE};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use log::debug;

/// Switch that flips on every left press inside its track.
///
/// The knob is a circle as tall as the track, resting on the left end when
/// off and on the right end when on.
#[derive(Debug, Clone)]
pub struct Toggle {
    id: u16,
    bounds: Rectangle,
    on: bool,
    off_color: Rgb565,
    on_color: Rgb565,
    knob_color: Rgb565,
    dirty: bool,
}

impl Toggle {
    pub fn new(id: u16, bounds: Rectangle) -> Self {
        Self {
            id,
            bounds,
            on: false,
            off_color: TOGGLE_TRACK,
            on_color: TOGGLE_TRACK_ON,
            knob_color: WHITE,
            dirty: true,
        }
    }

    pub fn with_colors(mut self, off: Rgb565, on: Rgb565) -> Self {
        self.off_color = off;
        self.on_color = on;
        self
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Set the state without emitting an action.
    pub fn set_on(&mut self, on: bool) {
        if self.on != on {
            self.on = on;
            self.dirty = true;
        }
    }

    /// Circle currently covered by the knob
    pub fn knob(&self) -> Circle {
        let diameter = self.bounds.size.height;
        let x = if self.on {
            geometry::right_edge(&self.bounds) - diameter as i32
        } else {
            self.bounds.top_left.x
        };
        Circle::new(Point::new(x, self.bounds.top_left.y), diameter)
    }
}

impl Drawable for Toggle {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let track_color = if self.on {
            self.on_color
        } else {
            self.off_color
        };
        let radius = self.bounds.size.height / 2;
        RoundedRectangle::with_equal_corners(self.bounds, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(track_color))
            .draw(display)?;
        self.knob()
            .into_styled(PrimitiveStyle::with_fill(self.knob_color))
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

impl Touchable for Toggle {
    fn contains_point(&self, point: Point) -> bool {
        geometry::contains(&self.bounds, point)
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        match *event {
            InputEvent::PointerDown {
                button: PointerButton::Left,
                position,
            } if self.contains_point(position) => {
                self.on = !self.on;
                self.dirty = true;
                debug!("Toggle {} is {}", self.id, if self.on { "on" } else { "off" });
                EventResult::Action(Action::Toggled {
                    id: self.id,
                    on: self.on,
                })
            }
            _ => EventResult::NotHandled,
        }
    }
}

impl Transform for Toggle {
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
    use crate::ui::test_support::Canvas;

    fn toggle() -> Toggle {
        Toggle::new(3, Rectangle::new(Point::new(50, 50), Size::new(60, 30)))
    }

    fn press(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_press_flips_and_reports() {
        let mut t = toggle();
        assert_eq!(
            t.handle_event(&press(60, 60)),
            EventResult::Action(Action::Toggled { id: 3, on: true })
        );
        assert!(t.is_on());
        assert_eq!(t.knob().top_left, Point::new(80, 50));

        assert_eq!(
            t.handle_event(&press(60, 60)),
            EventResult::Action(Action::Toggled { id: 3, on: false })
        );
        assert_eq!(t.knob().top_left, Point::new(50, 50));
    }

    #[test]
    fn test_press_outside_keeps_state() {
        let mut t = toggle();
        assert_eq!(t.handle_event(&press(5, 5)), EventResult::NotHandled);
        assert!(!t.is_on());
    }

    #[test]
    fn test_track_color_follows_state() {
        let mut t = toggle();
        let mut canvas = Canvas::new(120, 100);
        t.draw(&mut canvas).unwrap();
        assert!(canvas.count(TOGGLE_TRACK) > 0);

        t.set_on(true);
        t.draw(&mut canvas).unwrap();
        assert_eq!(canvas.count(TOGGLE_TRACK), 0);
        assert!(canvas.count(TOGGLE_TRACK_ON) > 0);
        // knob sits on the right end
        assert_eq!(canvas.pixel(Point::new(95, 65)), Some(WHITE));
    }
}
