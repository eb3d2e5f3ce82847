//! Component rendering
//!
//! Turns one component's pixel list into a tightly cropped raster:
//! transparent everywhere except the component's pixels, which are filled
//! with a fixed opaque color.

use crate::error::LabelResult;
use blobcrop_core::{Raster, RasterMut, Rect, color};

/// Fill color for rendered component pixels.
pub const FILL_COLOR: u32 = color::OPAQUE_BLACK;

/// Compute the bounding box of a pixel list.
///
/// An empty list yields a degenerate 1x1 box at the origin; the public
/// pipeline never produces an empty component, so this is a defensive
/// fallback only.
pub fn bounding_box(pixels: &[(u32, u32)]) -> Rect {
    let Some(&(first_x, first_y)) = pixels.first() else {
        return Rect::new_unchecked(0, 0, 1, 1);
    };

    let (mut min_x, mut min_y) = (first_x, first_y);
    let (mut max_x, mut max_y) = (first_x, first_y);
    for &(x, y) in &pixels[1..] {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    Rect::new_unchecked(
        min_x as i32,
        min_y as i32,
        (max_x - min_x + 1) as i32,
        (max_y - min_y + 1) as i32,
    )
}

/// Render one component as a cropped raster.
///
/// Returns the bounding box in original image coordinates together with
/// a raster of exactly the box's size. Pixels in the list are drawn at
/// their coordinates shifted by the box origin; all other cells stay
/// transparent.
pub fn render_component(pixels: &[(u32, u32)]) -> LabelResult<(Rect, Raster)> {
    let bounds = bounding_box(pixels);
    let mut out = RasterMut::new(bounds.w as u32, bounds.h as u32)?;

    for &(x, y) in pixels {
        out.set_pixel_unchecked(x - bounds.x as u32, y - bounds.y as u32, FILL_COLOR);
    }

    Ok((bounds, out.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_single_pixel() {
        let bounds = bounding_box(&[(3, 4)]);
        assert_eq!(bounds, Rect::new_unchecked(3, 4, 1, 1));
    }

    #[test]
    fn test_bounding_box_spans_extremes() {
        let bounds = bounding_box(&[(2, 7), (5, 3), (4, 4)]);
        assert_eq!(bounds, Rect::new_unchecked(2, 3, 4, 5));
    }

    #[test]
    fn test_bounding_box_empty_fallback() {
        assert_eq!(bounding_box(&[]), Rect::new_unchecked(0, 0, 1, 1));
    }

    #[test]
    fn test_render_shifts_to_origin() {
        let pixels = [(10, 20), (11, 20), (10, 21)];
        let (bounds, raster) = render_component(&pixels).unwrap();

        assert_eq!(bounds, Rect::new_unchecked(10, 20, 2, 2));
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.get_pixel(0, 0), Some(FILL_COLOR));
        assert_eq!(raster.get_pixel(1, 0), Some(FILL_COLOR));
        assert_eq!(raster.get_pixel(0, 1), Some(FILL_COLOR));
        assert_eq!(raster.get_pixel(1, 1), Some(color::TRANSPARENT));
    }

    #[test]
    fn test_render_empty_is_degenerate() {
        let (bounds, raster) = render_component(&[]).unwrap();
        assert_eq!(bounds, Rect::new_unchecked(0, 0, 1, 1));
        assert_eq!(raster.width(), 1);
        assert_eq!(raster.height(), 1);
        assert_eq!(raster.get_pixel(0, 0), Some(color::TRANSPARENT));
    }

    #[test]
    fn test_render_touches_all_edges() {
        // Plus shape: at least one filled pixel on each edge of the crop
        let pixels = [(5, 4), (4, 5), (5, 5), (6, 5), (5, 6)];
        let (bounds, raster) = render_component(&pixels).unwrap();
        assert_eq!(bounds, Rect::new_unchecked(4, 4, 3, 3));

        let filled = |x, y| raster.get_pixel(x, y) == Some(FILL_COLOR);
        assert!((0..3).any(|x| filled(x, 0)));
        assert!((0..3).any(|x| filled(x, 2)));
        assert!((0..3).any(|y| filled(0, y)));
        assert!((0..3).any(|y| filled(2, y)));
        // Corners of a plus stay transparent
        assert!(!filled(0, 0));
        assert!(!filled(2, 0));
        assert!(!filled(0, 2));
        assert!(!filled(2, 2));
    }
}
