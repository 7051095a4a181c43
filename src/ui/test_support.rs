//! In-memory draw target for widget tests.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Records the last color written to every pixel; out-of-bounds writes are
/// dropped.
pub struct Canvas {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![None; (width * height) as usize],
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0
            || point.y < 0
            || point.x >= self.size.width as i32
            || point.y >= self.size.height as i32
        {
            return None;
        }
        Some(point.y as usize * self.size.width as usize + point.x as usize)
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).and_then(|i| self.pixels[i])
    }

    /// Number of pixels currently showing `color`
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Number of pixels written at least once
    pub fn drawn(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}
