// src/ui/components/shape.rs
//! Shapes that follow slider values through the observer channel

use crate::ui::core::{Drawable, EventResult, InputEvent, Touchable};
use crate::ui::observer::{Channel, Notification, Observer};
use crate::ui::styling::colors::{BLACK, channel_from_percent, rgb};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, Triangle};
use log::trace;

/// Degrees of rotation per unit of slider value
const DEGREES_PER_UNIT: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Tinted on the green channel
    Circle,
    /// Tinted on the red channel
    Square,
}

/// Circle or square that rotates on [`Channel::Rotation`] and changes its
/// tint on [`Channel::Color`].
///
/// A rotated circle looks the same, so it carries a marker dot on its rim
/// to make the angle visible.
#[derive(Debug, Clone)]
pub struct ObservedShape {
    kind: ShapeKind,
    center: Point,
    size: u32,
    angle: f32,
    intensity: u8,
    dirty: bool,
}

impl ObservedShape {
    /// Shape of diameter (circle) or side (square) `size` centred on `center`.
    pub fn new(kind: ShapeKind, center: Point, size: u32) -> Self {
        Self {
            kind,
            center,
            size,
            angle: 0.0,
            intensity: u8::MAX,
            dirty: true,
        }
    }

    pub fn circle(center: Point, diameter: u32) -> Self {
        Self::new(ShapeKind::Circle, center, diameter)
    }

    pub fn square(center: Point, side: u32) -> Self {
        Self::new(ShapeKind::Square, center, side)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Rotation in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn color(&self) -> Rgb565 {
        match self.kind {
            ShapeKind::Circle => rgb(0, self.intensity, 0),
            ShapeKind::Square => rgb(self.intensity, 0, 0),
        }
    }

    /// `point` rotated by the current angle around the centre
    fn rotated(&self, dx: f32, dy: f32) -> Point {
        let radians = self.angle.to_radians();
        let (sin, cos) = (libm::sinf(radians), libm::cosf(radians));
        let x = dx * cos - dy * sin;
        let y = dx * sin + dy * cos;
        self.center + Point::new(libm::roundf(x) as i32, libm::roundf(y) as i32)
    }

    fn corners(&self) -> [Point; 4] {
        let h = self.size as f32 / 2.0;
        [
            self.rotated(-h, -h),
            self.rotated(h, -h),
            self.rotated(h, h),
            self.rotated(-h, h),
        ]
    }
}

impl Observer for ObservedShape {
    fn notify(&mut self, notification: Notification) {
        match notification.channel {
            Channel::Rotation => self.angle = DEGREES_PER_UNIT * notification.value,
            Channel::Color => self.intensity = channel_from_percent(notification.value),
            Channel::Value => return,
        }
        trace!("{:?} updated from {:?}", self.kind, notification);
        self.dirty = true;
    }
}

impl Drawable for ObservedShape {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let fill = PrimitiveStyle::with_fill(self.color());
        match self.kind {
            ShapeKind::Circle => {
                Circle::with_center(self.center, self.size)
                    .into_styled(fill)
                    .draw(display)?;
                let marker = self.rotated(0.0, -(self.size as f32) / 2.0 + 4.0);
                Circle::with_center(marker, 5)
                    .into_styled(PrimitiveStyle::with_fill(BLACK))
                    .draw(display)?;
            }
            ShapeKind::Square => {
                let [a, b, c, d] = self.corners();
                Triangle::new(a, b, c).into_styled(fill).draw(display)?;
                Triangle::new(a, c, d).into_styled(fill).draw(display)?;
            }
        }
        Ok(())
    }

    /// Box enclosing the shape at any rotation
    fn bounds(&self) -> Rectangle {
        let reach = match self.kind {
            ShapeKind::Circle => self.size,
            // diagonal of the square, rounded up
            ShapeKind::Square => libm::ceilf(self.size as f32 * core::f32::consts::SQRT_2) as u32,
        };
        Rectangle::with_center(self.center, Size::new(reach, reach))
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

impl Touchable for ObservedShape {
    fn contains_point(&self, point: Point) -> bool {
        crate::geometry::contains(&Drawable::bounds(self), point)
    }

    fn handle_event(&mut self, _event: &InputEvent) -> EventResult {
        EventResult::NotHandled
    }
}

impl Transform for ObservedShape {
    fn translate(&self, by: Point) -> Self {
        let mut moved = self.clone();
        moved.translate_mut(by);
        moved
    }

    fn translate_mut(&mut self, by: Point) -> &mut Self {
        self.center += by;
        self.dirty = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::Canvas;

    fn rotation(value: f32) -> Notification {
        Notification {
            channel: Channel::Rotation,
            value,
        }
    }

    fn color(value: f32) -> Notification {
        Notification {
            channel: Channel::Color,
            value,
        }
    }

    #[test]
    fn test_rotation_is_three_degrees_per_unit() {
        let mut s = ObservedShape::square(Point::new(50, 50), 20);
        s.notify(rotation(30.0));
        assert_eq!(s.angle(), 90.0);
    }

    #[test]
    fn test_color_channel_per_kind() {
        let mut circle = ObservedShape::circle(Point::new(50, 50), 20);
        let mut square = ObservedShape::square(Point::new(50, 50), 20);
        assert_eq!(circle.color(), rgb(0, 255, 0));
        assert_eq!(square.color(), rgb(255, 0, 0));

        circle.notify(color(0.0));
        square.notify(color(100.0));
        assert_eq!(circle.color(), rgb(0, 0, 0));
        assert_eq!(square.color(), rgb(255, 0, 0));
    }

    #[test]
    fn test_value_channel_is_ignored() {
        let mut s = ObservedShape::circle(Point::new(50, 50), 20);
        s.mark_clean();
        s.notify(Notification {
            channel: Channel::Value,
            value: 10.0,
        });
        assert!(!s.is_dirty());
        assert_eq!(s.angle(), 0.0);
    }

    #[test]
    fn test_rotated_square_covers_its_diagonal() {
        let mut s = ObservedShape::square(Point::new(50, 50), 40);
        s.notify(rotation(15.0)); // 45 degrees
        let mut canvas = Canvas::new(100, 100);
        s.draw(&mut canvas).unwrap();

        let red = rgb(255, 0, 0);
        // the corner now points straight up, 28 px above the centre
        assert_eq!(canvas.pixel(Point::new(50, 25)), Some(red));
        // an unrotated corner position is empty
        assert_eq!(canvas.pixel(Point::new(31, 31)), None);
    }
}
