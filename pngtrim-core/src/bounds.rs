//! Content bounding box detection

use std::fmt;

use image::{DynamicImage, ImageBuffer, Pixel, Primitive};

/// Axis-aligned rectangle in pixel coordinates.
///
/// `right` and `bottom` are exclusive, so a box covering a whole
/// `w x h` image is `(0, 0, w, h)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Box covering the single pixel at (x, y).
    fn pixel(x: u32, y: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        }
    }

    /// Grow the box so that it contains (x, y).
    fn include(self, x: u32, y: u32) -> Self {
        Self {
            left: self.left.min(x),
            top: self.top.min(y),
            right: self.right.max(x + 1),
            bottom: self.bottom.max(y + 1),
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Get dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Whether the box spans an entire `width x height` image.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}

/// Compute the bounding box of the visible content of an image.
///
/// For color types with an alpha channel a pixel counts as content when its
/// alpha sample is non-zero. Without alpha, a pixel counts as content when
/// any of its channels is non-zero, so pure black is treated as background.
///
/// Returns `None` when the image has no content at all.
pub fn content_bounds(img: &DynamicImage) -> Option<BoundingBox> {
    match img {
        DynamicImage::ImageLuma8(buf) => scan(buf, false),
        DynamicImage::ImageLumaA8(buf) => scan(buf, true),
        DynamicImage::ImageRgb8(buf) => scan(buf, false),
        DynamicImage::ImageRgba8(buf) => scan(buf, true),
        DynamicImage::ImageLuma16(buf) => scan(buf, false),
        DynamicImage::ImageLumaA16(buf) => scan(buf, true),
        DynamicImage::ImageRgb16(buf) => scan(buf, false),
        DynamicImage::ImageRgba16(buf) => scan(buf, true),
        DynamicImage::ImageRgb32F(buf) => scan(buf, false),
        DynamicImage::ImageRgba32F(buf) => scan(buf, true),
        other if other.color().has_alpha() => scan(&other.to_rgba16(), true),
        other => scan(&other.to_rgb16(), false),
    }
}

/// Walk every pixel and accumulate the box of the ones that are not background.
///
/// With `alpha_only` the last channel is treated as alpha and is the only one
/// inspected.
fn scan<P>(buf: &ImageBuffer<P, Vec<P::Subpixel>>, alpha_only: bool) -> Option<BoundingBox>
where
    P: Pixel,
{
    let background = <P::Subpixel as Primitive>::DEFAULT_MIN_VALUE;
    let mut bounds: Option<BoundingBox> = None;

    for (x, y, pixel) in buf.enumerate_pixels() {
        let channels = pixel.channels();
        let visible = if alpha_only {
            channels.last().map_or(false, |alpha| *alpha != background)
        } else {
            channels.iter().any(|c| *c != background)
        };

        if visible {
            bounds = Some(match bounds {
                Some(b) => b.include(x, y),
                None => BoundingBox::pixel(x, y),
            });
        }
    }

    bounds
}
