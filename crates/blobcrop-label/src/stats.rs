//! Component statistics
//!
//! Analysis helpers computed from the labeling output: component counts,
//! bounding boxes, and per-component statistics.

use crate::aggregate::collect_components;
use crate::render::bounding_box;
use crate::scan::label_pixels;
use blobcrop_core::{Raster, Rect};

/// Statistics for one connected component
#[derive(Debug, Clone)]
pub struct ComponentStats {
    /// Component id (canonical root label)
    pub label: u32,
    /// Bounding box in image coordinates
    pub bounds: Rect,
    /// Number of pixels
    pub pixel_count: u32,
    /// Centroid X coordinate
    pub centroid_x: f64,
    /// Centroid Y coordinate
    pub centroid_y: f64,
}

/// Count the connected foreground regions of an image.
pub fn count_components(raster: &Raster, background: u32) -> u32 {
    let (grid, mut arena) = label_pixels(raster, background);
    collect_components(&grid, &mut arena).len() as u32
}

/// Get the bounding box of every component, sorted by label.
pub fn component_bounds(raster: &Raster, background: u32) -> Vec<Rect> {
    let (grid, mut arena) = label_pixels(raster, background);
    let groups = collect_components(&grid, &mut arena);

    let mut label_bounds: Vec<(u32, Rect)> = groups
        .iter()
        .map(|(&root, pixels)| (root, bounding_box(pixels)))
        .collect();
    label_bounds.sort_by_key(|(label, _)| *label);

    label_bounds.into_iter().map(|(_, b)| b).collect()
}

/// Get detailed statistics for every component, sorted by label.
pub fn component_stats(raster: &Raster, background: u32) -> Vec<ComponentStats> {
    let (grid, mut arena) = label_pixels(raster, background);
    let groups = collect_components(&grid, &mut arena);

    let mut stats: Vec<ComponentStats> = groups
        .into_iter()
        .map(|(root, pixels)| {
            let bounds = bounding_box(&pixels);
            let count = pixels.len() as u32;
            let (sum_x, sum_y) = pixels
                .iter()
                .fold((0u64, 0u64), |(sx, sy), &(x, y)| {
                    (sx + x as u64, sy + y as u64)
                });

            ComponentStats {
                label: root,
                bounds,
                pixel_count: count,
                centroid_x: sum_x as f64 / count as f64,
                centroid_y: sum_y as f64 / count as f64,
            }
        })
        .collect();
    stats.sort_by_key(|s| s.label);

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobcrop_core::{RasterMut, color};

    const BG: u32 = color::OPAQUE_WHITE;

    fn raster_with(width: u32, height: u32, pixels: &[(u32, u32)]) -> Raster {
        let mut raster = RasterMut::new(width, height).unwrap();
        raster.fill(BG);
        for &(x, y) in pixels {
            raster.set_pixel(x, y, color::OPAQUE_BLACK).unwrap();
        }
        raster.into()
    }

    #[test]
    fn test_count_components() {
        let raster = raster_with(
            10,
            10,
            &[(0, 0), (1, 0), (5, 5), (6, 5), (8, 8)],
        );
        assert_eq!(count_components(&raster, BG), 3);
    }

    #[test]
    fn test_count_empty() {
        let raster = raster_with(10, 10, &[]);
        assert_eq!(count_components(&raster, BG), 0);
        assert!(component_bounds(&raster, BG).is_empty());
        assert!(component_stats(&raster, BG).is_empty());
    }

    #[test]
    fn test_component_bounds() {
        let raster = raster_with(10, 10, &[(0, 0), (1, 0), (2, 0), (1, 1)]);
        let bounds = component_bounds(&raster, BG);

        assert_eq!(bounds.len(), 1);
        assert_eq!(bounds[0], Rect::new_unchecked(0, 0, 3, 2));
    }

    #[test]
    fn test_component_stats_centroid() {
        // L-shape: (0,0), (2,0), (1,1) joined by 8-connectivity
        let raster = raster_with(10, 10, &[(0, 0), (2, 0), (1, 1)]);
        let stats = component_stats(&raster, BG);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].pixel_count, 3);
        assert!((stats[0].centroid_x - 1.0).abs() < 0.01);
        assert!((stats[0].centroid_y - 1.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_stats_sorted_by_label() {
        let raster = raster_with(10, 2, &[(0, 0), (3, 0), (6, 0), (9, 0)]);
        let stats = component_stats(&raster, BG);

        assert_eq!(stats.len(), 4);
        assert!(stats.windows(2).all(|w| w[0].label < w[1].label));
    }
}
