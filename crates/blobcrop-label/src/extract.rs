//! Component extraction pipeline
//!
//! Orchestrates the full scan -> aggregate -> render sequence for one
//! image. Each call is independent; no state survives between calls.

use crate::aggregate::collect_components;
use crate::error::LabelResult;
use crate::render::render_component;
use crate::scan::label_pixels;
use blobcrop_core::{Raster, Rect};
use std::collections::HashMap;

/// A connected foreground region extracted from an image
#[derive(Debug, Clone)]
pub struct Component {
    /// Component id (the canonical root label; arbitrary, positive,
    /// stable only within one extraction call)
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box in original image coordinates
    pub bounds: Rect,
    /// Cropped raster, exactly the bounding box's size
    pub raster: Raster,
}

/// Split an image into one cropped raster per connected foreground region.
///
/// A pixel is foreground iff its value differs from `background`; regions
/// are connected under 8-connectivity. Never fails for rasters of size
/// >= 1x1; an image with only background pixels returns an empty map.
///
/// # Examples
///
/// ```
/// use blobcrop_core::{RasterMut, color};
/// use blobcrop_label::extract_components;
///
/// let mut image = RasterMut::new(5, 5).unwrap();
/// image.fill(color::OPAQUE_WHITE);
/// image.set_pixel(2, 2, color::OPAQUE_BLACK).unwrap();
///
/// let components = extract_components(&image.into(), color::OPAQUE_WHITE).unwrap();
/// assert_eq!(components.len(), 1);
/// ```
pub fn extract_components(
    raster: &Raster,
    background: u32,
) -> LabelResult<HashMap<u32, Raster>> {
    let (grid, mut arena) = label_pixels(raster, background);
    let groups = collect_components(&grid, &mut arena);

    let mut rasters = HashMap::with_capacity(groups.len());
    for (root, pixels) in groups {
        let (_, cropped) = render_component(&pixels)?;
        rasters.insert(root, cropped);
    }

    Ok(rasters)
}

/// Extract components with their bounding boxes and pixel counts.
///
/// Same pipeline as [`extract_components`], returning the richer
/// [`Component`] records sorted by label.
pub fn find_components(raster: &Raster, background: u32) -> LabelResult<Vec<Component>> {
    let (grid, mut arena) = label_pixels(raster, background);
    let groups = collect_components(&grid, &mut arena);

    let mut components = Vec::with_capacity(groups.len());
    for (root, pixels) in groups {
        let (bounds, cropped) = render_component(&pixels)?;
        components.push(Component {
            label: root,
            pixel_count: pixels.len() as u32,
            bounds,
            raster: cropped,
        });
    }
    components.sort_by_key(|c| c.label);

    Ok(components)
}
