//! Geometry and input-space helpers shared by every widget.
//!
//! All functions here are pure. Widgets work in display ("world") coordinates
//! as `embedded_graphics` [`Point`]s; [`Viewport`] maps raw window pixels into
//! that space when the host window is scaled or panned.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Hit test of a point against a rectangle.
///
/// Zero-sized rectangles never contain any point.
pub fn contains(rect: &Rectangle, point: Point) -> bool {
    !is_empty(rect) && rect.contains(point)
}

/// Squared euclidean distance between two points.
pub fn distance_squared(a: Point, b: Point) -> i64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    dx * dx + dy * dy
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    libm::sqrtf(distance_squared(a, b) as f32)
}

/// `true` if `point` lies strictly inside the circle of `radius` around `center`.
pub fn within_radius(center: Point, point: Point, radius: u32) -> bool {
    let r = radius as i64;
    distance_squared(center, point) < r * r
}

/// `true` if `point` lies strictly inside the axis-aligned square of side
/// `size` centred on `center`.
pub fn within_square(center: Point, point: Point, size: u32) -> bool {
    let d = point - center;
    // compare doubled values so odd sizes keep their half pixel
    (d.x.abs() * 2) < size as i32 && (d.y.abs() * 2) < size as i32
}

/// First x coordinate past the right edge of `rect`.
pub fn right_edge(rect: &Rectangle) -> i32 {
    rect.top_left.x + rect.size.width as i32
}

/// First y coordinate past the bottom edge of `rect`.
pub fn bottom_edge(rect: &Rectangle) -> i32 {
    rect.top_left.y + rect.size.height as i32
}

fn is_empty(rect: &Rectangle) -> bool {
    rect.size.width == 0 || rect.size.height == 0
}

/// Smallest rectangle covering both `a` and `b`. Zero-sized inputs are ignored.
pub fn union(a: &Rectangle, b: &Rectangle) -> Rectangle {
    if is_empty(a) {
        return *b;
    }
    if is_empty(b) {
        return *a;
    }
    let left = a.top_left.x.min(b.top_left.x);
    let top = a.top_left.y.min(b.top_left.y);
    let right = right_edge(a).max(right_edge(b));
    let bottom = bottom_edge(a).max(bottom_edge(b));
    Rectangle::new(
        Point::new(left, top),
        Size::new((right - left) as u32, (bottom - top) as u32),
    )
}

/// Clamp `x` to the horizontal span `[left, left + width]` of `rect`.
pub fn clamp_to_span(x: i32, rect: &Rectangle) -> i32 {
    x.clamp(rect.top_left.x, right_edge(rect))
}

/// Fraction of the horizontal span of `rect` covered up to `x`, in `[0, 1]`.
///
/// A zero-width span always yields `0.0`.
pub fn span_fraction(x: i32, rect: &Rectangle) -> f32 {
    if rect.size.width == 0 {
        return 0.0;
    }
    let offset = clamp_to_span(x, rect) - rect.top_left.x;
    offset as f32 / rect.size.width as f32
}

/// Maps host window pixels to world coordinates.
///
/// The simulator scales the display up by an integer factor; widgets never see
/// raw pixels, only the result of [`Viewport::pixel_to_world`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// World coordinate shown at the top-left window pixel.
    pub offset: Point,
    /// Window pixels per world unit, at least 1.
    pub scale: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Point::zero(),
            scale: 1,
        }
    }
}

impl Viewport {
    pub fn new(offset: Point, scale: u32) -> Self {
        Self {
            offset,
            scale: scale.max(1),
        }
    }

    pub fn pixel_to_world(&self, pixel: Point) -> Point {
        let s = self.scale.max(1) as i32;
        Point::new(pixel.x.div_euclid(s), pixel.y.div_euclid(s)) + self.offset
    }

    pub fn world_to_pixel(&self, world: Point) -> Point {
        let s = self.scale.max(1) as i32;
        (world - self.offset) * s
    }
}
