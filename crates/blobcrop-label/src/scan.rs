//! First labeling pass
//!
//! A single raster-scan over the image in row-major order. Each
//! non-background pixel either starts a new label or adopts the minimum
//! representative among its already-visited 8-neighbors, merging all
//! neighboring classes in the process.

use crate::disjoint::LabelArena;
use crate::grid::LabelGrid;
use blobcrop_core::Raster;

/// Offsets of the 8-neighbors already visited by a row-major scan:
/// the three cells in the row above and the cell to the left.
const PRIOR_NEIGHBORS: [(i64, i64); 4] = [(-1, -1), (0, -1), (1, -1), (-1, 0)];

/// Label every foreground pixel of `raster`.
///
/// A pixel is background iff its value equals `background` exactly; no
/// tolerance is applied. Returns the provisional label grid together with
/// the arena holding all label equivalences. Grid cells are 0 for
/// background and otherwise hold a label that is find-equivalent to its
/// component's final representative.
pub fn label_pixels(raster: &Raster, background: u32) -> (LabelGrid, LabelArena) {
    let width = raster.width();
    let height = raster.height();
    let mut grid = LabelGrid::new(width, height);
    let mut arena = LabelArena::new();
    let mut neighbors: Vec<u32> = Vec::with_capacity(PRIOR_NEIGHBORS.len());

    for y in 0..height {
        for x in 0..width {
            if raster.get_pixel_unchecked(x, y) == background {
                continue;
            }

            neighbors.clear();
            for (dx, dy) in PRIOR_NEIGHBORS {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 {
                    continue;
                }
                let label = grid.get_unchecked(nx as u32, ny as u32);
                if label != 0 {
                    neighbors.push(label);
                }
            }

            let label = if neighbors.is_empty() {
                arena.make_set()
            } else {
                // The smallest representative wins as the provisional
                // label; every neighboring class is merged into one.
                let mut label = arena.find(neighbors[0]);
                for &neighbor in &neighbors[1..] {
                    label = label.min(arena.find(neighbor));
                }
                for &neighbor in &neighbors {
                    arena.union(neighbor, label);
                }
                label
            };

            grid.set_unchecked(x, y, label);
        }
    }

    (grid, arena)
}
