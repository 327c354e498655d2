//! Pixel-exact image comparison.
//!
//! Every image entering the system is normalised to 8-bit RGB on decode, so
//! comparisons never have to reconcile colour models. There is no tolerance:
//! two regions match only when every pixel is identical.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use crate::types::Rect;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Decode an image file and normalise it to RGB.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).with_context(|| format!("decode image {}", path.display()))?;
    Ok(img.to_rgb8())
}

/// Pixel at (x, y), or black when the coordinate falls outside the image.
/// Crops that overhang the frame behave as if padded with black.
#[inline]
fn pixel_or_black(img: &RgbImage, x: u32, y: u32) -> Rgb<u8> {
    if x < img.width() && y < img.height() {
        *img.get_pixel(x, y)
    } else {
        BLACK
    }
}

/// True iff `a` and `b` agree on every pixel inside `rect`.
pub fn region_matches(a: &RgbImage, b: &RgbImage, rect: Rect) -> bool {
    (rect.top..rect.bottom())
        .all(|y| (rect.left..rect.right()).all(|x| pixel_or_black(a, x, y) == pixel_or_black(b, x, y)))
}

/// True iff both frames have the same dimensions and identical pixels.
pub fn frames_identical(a: &RgbImage, b: &RgbImage) -> bool {
    a.dimensions() == b.dimensions() && a.as_raw() == b.as_raw()
}
