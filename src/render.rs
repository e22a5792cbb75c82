//! Pixel work: square icon scaling and the letterboxed banner.

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Resampling filter for every scaled copy of the logo.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Scale the source to an exact `size`x`size` square, keeping alpha.
///
/// Non-square sources are stretched, not cropped.
pub fn render_icon(source: &DynamicImage, size: u32) -> RgbaImage {
    source.resize_exact(size, size, FILTER).to_rgba8()
}

/// Largest size with the source's aspect ratio that fits inside the box.
///
/// Equivalent to truncating `src * min(box_w / src_w, box_h / src_h)`, computed
/// in integers so the constrained axis lands exactly on the box edge.
/// Neither result is ever below 1 pixel.
pub fn fit_within(src_w: u32, src_h: u32, box_w: u32, box_h: u32) -> (u32, u32) {
    let (sw, sh, bw, bh) = (src_w as u64, src_h as u64, box_w as u64, box_h as u64);

    let (w, h) = if sw * bh >= sh * bw {
        // Width is the limiting axis
        (bw, sh * bw / sw)
    } else {
        (sw * bh / sh, bh)
    };

    (w.max(1) as u32, h.max(1) as u32)
}

/// Top-left position that centers `inner` in `outer`, rounding down.
pub fn centered_offset(outer: (u32, u32), inner: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(inner.0) / 2,
        outer.1.saturating_sub(inner.1) / 2,
    )
}

/// Aspect-fit the source into a transparent `box_w`x`box_h` canvas.
///
/// Scaled pixels are copied over the canvas, not blended, so translucent
/// logo pixels keep their alpha and the padding stays at alpha 0.
pub fn render_banner(source: &DynamicImage, box_w: u32, box_h: u32) -> RgbaImage {
    let (w, h) = fit_within(source.width(), source.height(), box_w, box_h);
    let scaled = source.resize_exact(w, h, FILTER).to_rgba8();

    let mut canvas = RgbaImage::new(box_w, box_h);
    let (x, y) = centered_offset((box_w, box_h), (w, h));
    imageops::replace(&mut canvas, &scaled, x as i64, y as i64);
    canvas
}

/// Encode an image as PNG into memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
