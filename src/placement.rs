//! Image placement: the normalized "this image, at this scale, offset by
//! (x, y), for this button size" record.
//!
//! Produced by the interactive layer (drag to pan, wheel to zoom) and read
//! verbatim by the layout engine — the engine tiles one placement across the
//! sheet and never varies it per cell.

use crate::catalog::ButtonSize;

/// Natural dimensions of a decoded source image.
///
/// The decode service hands the core dimensions only; pixel data stays with
/// the decoder and renderer. Once placed, the bitmap is shared read-only
/// across every cell of a layout — no component mutates it in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceImage {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
}

impl SourceImage {
    /// Create a source image descriptor.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A positioned image within a button template.
///
/// `scale` multiplies source pixels into device pixels; the offsets are
/// device-pixel displacements of the image from the center of the button's
/// bounding circle. Both stay in device-pixel space through layout and
/// calibration — only the renderer maps them onto physical cells.
///
/// # Example
///
/// ```
/// use pinlayout::{ImagePlacement, SourceImage, catalog};
///
/// let size = catalog::lookup("1.25").unwrap();
/// let placement = ImagePlacement::new(SourceImage::new(800, 600), size)
///     .scale(0.5)
///     .offset(-12.0, 4.0);
///
/// assert_eq!(placement.scale, 0.5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImagePlacement {
    /// The decoded image being placed.
    pub image: SourceImage,
    /// Pixels-per-source-pixel multiplier. Must be positive.
    pub scale: f64,
    /// Horizontal offset from the button-circle center, in device pixels.
    pub offset_x: f64,
    /// Vertical offset from the button-circle center, in device pixels.
    pub offset_y: f64,
    /// The button template the image is placed into.
    pub size: ButtonSize,
}

impl ImagePlacement {
    /// Place an image at natural size, centered in the button.
    pub fn new(image: SourceImage, size: ButtonSize) -> Self {
        Self {
            image,
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            size,
        }
    }

    /// Set the pixels-per-source-pixel multiplier.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the offset from the button-circle center, in device pixels.
    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }
}
