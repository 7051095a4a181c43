// src/ui/components/draggable.rs
//! Rectangle that follows the pointer while held

use crate::geometry;
use crate::ui::core::{Drawable, EventResult, InputEvent, PointerButton, Touchable};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::trace;

/// A filled rectangle that can be picked up with the left pointer button.
///
/// The grab offset between the pointer and the top-left corner is kept for
/// the whole drag, so the rectangle does not jump under the pointer.
#[derive(Debug, Clone)]
pub struct Draggable {
    bounds: Rectangle,
    color: Rgb565,
    drag_color: Option<Rgb565>,
    grab: Option<Point>,
    dirty: bool,
}

impl Draggable {
    pub fn new(bounds: Rectangle, color: Rgb565) -> Self {
        Self {
            bounds,
            color,
            drag_color: None,
            grab: None,
            dirty: true,
        }
    }

    /// Fill with `color` instead of the normal color while held.
    pub fn with_drag_color(mut self, color: Rgb565) -> Self {
        self.drag_color = Some(color);
        self
    }

    pub fn is_dragged(&self) -> bool {
        self.grab.is_some()
    }

    pub fn position(&self) -> Point {
        self.bounds.top_left
    }

    pub fn set_position(&mut self, position: Point) {
        if self.bounds.top_left != position {
            self.bounds.top_left = position;
            self.dirty = true;
        }
    }

    pub fn set_size(&mut self, size: Size) {
        self.bounds.size = size;
        self.dirty = true;
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
        self.dirty = true;
    }

    /// Color the rectangle is currently filled with
    pub fn fill_color(&self) -> Rgb565 {
        match (self.grab, self.drag_color) {
            (Some(_), Some(color)) => color,
            _ => self.color,
        }
    }

    /// Drop the rectangle without waiting for a pointer-up.
    pub fn release(&mut self) {
        if self.grab.take().is_some() {
            self.dirty = true;
        }
    }
}

impl Drawable for Draggable {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.fill_color()))
            .draw(display)
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

impl Touchable for Draggable {
    fn contains_point(&self, point: Point) -> bool {
        geometry::contains(&self.bounds, point)
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        match *event {
            InputEvent::PointerDown {
                button: PointerButton::Left,
                position,
            } if self.contains_point(position) => {
                self.grab = Some(position - self.bounds.top_left);
                self.dirty = true;
                EventResult::Handled
            }
            InputEvent::PointerMoved { position } => {
                if let Some(offset) = self.grab {
                    self.set_position(position - offset);
                    trace!("Dragged to {:?}", self.bounds.top_left);
                }
                EventResult::NotHandled
            }
            InputEvent::PointerUp {
                button: PointerButton::Left,
                ..
            } if self.grab.is_some() => {
                self.release();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }
}

impl Transform for Draggable {
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
    use crate::ui::styling::colors::{DARK_GRAY, LIGHT_GRAY};

    fn handle() -> Draggable {
        Draggable::new(
            Rectangle::new(Point::new(120, 250), Size::new(200, 20)),
            LIGHT_GRAY,
        )
    }

    fn down(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    fn moved(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerMoved {
            position: Point::new(x, y),
        }
    }

    fn up(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerUp {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut d = handle();
        assert_eq!(d.handle_event(&down(130, 255)), EventResult::Handled);
        assert!(d.is_dragged());

        d.handle_event(&moved(230, 355));
        assert_eq!(d.position(), Point::new(220, 350));

        // following the pointer outside the old bounds
        d.handle_event(&moved(10, 10));
        assert_eq!(d.position(), Point::new(0, 5));

        assert_eq!(d.handle_event(&up(10, 10)), EventResult::Handled);
        assert!(!d.is_dragged());

        d.handle_event(&moved(300, 300));
        assert_eq!(d.position(), Point::new(0, 5));
    }

    #[test]
    fn test_press_outside_does_not_grab() {
        let mut d = handle();
        assert_eq!(d.handle_event(&down(10, 10)), EventResult::NotHandled);
        d.handle_event(&moved(50, 50));
        assert_eq!(d.position(), Point::new(120, 250));
        assert_eq!(d.handle_event(&up(50, 50)), EventResult::NotHandled);
    }

    #[test]
    fn test_drag_color_only_while_held() {
        let mut d = handle().with_drag_color(DARK_GRAY);
        assert_eq!(d.fill_color(), LIGHT_GRAY);
        d.handle_event(&down(130, 255));
        assert_eq!(d.fill_color(), DARK_GRAY);
        d.release();
        assert_eq!(d.fill_color(), LIGHT_GRAY);
    }
}
