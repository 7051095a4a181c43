//! Icon and font loading.
//!
//! The core never touches a filesystem. Bytes come from an [`AssetSource`]:
//! the simulator reads files from disk, firmware can bake assets into flash
//! with [`StaticSource`]. A failed load is returned to the caller, who decides
//! whether to carry on without the asset.

use alloc::vec::Vec;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::image::{Image, ImageRawLE};
use embedded_graphics::mono_font::{
    MonoFont,
    ascii::{FONT_5X8, FONT_6X10, FONT_8X13, FONT_10X20},
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use thiserror_no_std::Error;

/// Bytes per RGB565 pixel
const BYTES_PER_PIXEL: usize = 2;

/// Error types for asset loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssetError {
    /// No asset under the requested path
    #[error("Asset not found")]
    NotFound,

    /// The source failed while reading
    #[error("I/O error while reading asset")]
    Io,

    /// The bytes do not form an image of the requested width
    #[error("Malformed image data ({len} bytes for width {width})")]
    Malformed {
        /// Number of bytes read
        len: usize,
        /// Requested width in pixels
        width: u32,
    },

    /// No built-in font with that name
    #[error("Unknown font")]
    UnknownFont,
}

/// Something assets can be read from
pub trait AssetSource {
    /// Read the whole asset stored under `path`.
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError>;
}

/// Assets compiled into the binary, looked up by exact path
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource {
    entries: &'static [(&'static str, &'static [u8])],
}

impl StaticSource {
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }
}

impl AssetSource for StaticSource {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.entries
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, data)| data.to_vec())
            .ok_or(AssetError::NotFound)
    }
}

/// Raw little-endian RGB565 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    width: u32,
    data: Vec<u8>,
}

impl Icon {
    /// Wrap raw pixel data. The length must be a non-zero multiple of one row.
    pub fn from_raw(data: Vec<u8>, width: u32) -> Result<Self, AssetError> {
        let row = width as usize * BYTES_PER_PIXEL;
        if row == 0 || data.is_empty() || data.len() % row != 0 {
            return Err(AssetError::Malformed {
                len: data.len(),
                width,
            });
        }
        Ok(Self { width, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        (self.data.len() / (self.width as usize * BYTES_PER_PIXEL)) as u32
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height())
    }

    /// Draw the icon centred on `center`.
    pub fn draw_centered<D: DrawTarget<Color = Rgb565>>(
        &self,
        center: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let raw = ImageRawLE::<Rgb565>::new(&self.data, self.width);
        Image::with_center(&raw, center).draw(display)?;
        Ok(())
    }
}

/// Load a raw RGB565 icon of `width` pixels per row from `source`.
pub fn load_icon(
    source: &(impl AssetSource + ?Sized),
    path: &str,
    width: u32,
) -> Result<Icon, AssetError> {
    let data = source.read(path)?;
    Icon::from_raw(data, width)
}

/// Look up a built-in font by its cell size, e.g. `"6x10"`.
pub fn load_font(name: &str) -> Result<&'static MonoFont<'static>, AssetError> {
    match name {
        "5x8" => Ok(&FONT_5X8),
        "6x10" => Ok(&FONT_6X10),
        "8x13" => Ok(&FONT_8X13),
        "10x20" => Ok(&FONT_10X20),
        _ => Err(AssetError::UnknownFont),
    }
}
