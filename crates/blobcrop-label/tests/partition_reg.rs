//! Partition property regression test
//!
//! Checks the labeling pipeline against an independent flood-fill
//! reference on randomized rasters: components must partition the
//! foreground exactly, and two pixels share a component iff they are
//! connected by an 8-adjacent foreground path.
//!
//! Run with:
//! ```
//! cargo test -p blobcrop-label --test partition_reg
//! ```

use blobcrop_core::{Raster, RasterMut, color};
use blobcrop_label::{FILL_COLOR, find_components};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::collections::BTreeSet;

const BG: u32 = color::OPAQUE_WHITE;

fn random_raster(rng: &mut StdRng, width: u32, height: u32, density: f64) -> Raster {
    let mut raster = RasterMut::new(width, height).unwrap();
    raster.fill(BG);
    for y in 0..height {
        for x in 0..width {
            if rng.random_bool(density) {
                raster.set_pixel_unchecked(x, y, color::OPAQUE_BLACK);
            }
        }
    }
    raster.into()
}

/// Independent reference: 8-connected components via stack-based
/// flood fill, as sets of original coordinates.
fn reference_components(raster: &Raster, background: u32) -> BTreeSet<BTreeSet<(u32, u32)>> {
    let width = raster.width();
    let height = raster.height();
    let mut seen = vec![false; (width * height) as usize];
    let mut components = BTreeSet::new();

    for start_y in 0..height {
        for start_x in 0..width {
            let idx = (start_y * width + start_x) as usize;
            if seen[idx] || raster.get_pixel_unchecked(start_x, start_y) == background {
                continue;
            }

            let mut pixels = BTreeSet::new();
            let mut stack = vec![(start_x, start_y)];
            seen[idx] = true;
            while let Some((x, y)) = stack.pop() {
                pixels.insert((x, y));
                for dy in -1i64..=1 {
                    for dx in -1i64..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = x as i64 + dx;
                        let ny = y as i64 + dy;
                        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                            continue;
                        }
                        let (nx, ny) = (nx as u32, ny as u32);
                        let nidx = (ny * width + nx) as usize;
                        if !seen[nidx] && raster.get_pixel_unchecked(nx, ny) != background {
                            seen[nidx] = true;
                            stack.push((nx, ny));
                        }
                    }
                }
            }
            components.insert(pixels);
        }
    }

    components
}

/// Recover a component's original-coordinate pixel set from its crop.
fn component_pixels(c: &blobcrop_label::Component) -> BTreeSet<(u32, u32)> {
    let mut pixels = BTreeSet::new();
    for y in 0..c.raster.height() {
        for x in 0..c.raster.width() {
            if c.raster.get_pixel_unchecked(x, y) == FILL_COLOR {
                pixels.insert((c.bounds.x as u32 + x, c.bounds.y as u32 + y));
            }
        }
    }
    pixels
}

#[test]
fn partition_reg() {
    let mut rng = StdRng::seed_from_u64(0x0b10bc0);

    for round in 0..12 {
        let density = 0.15 + 0.06 * round as f64;
        let raster = random_raster(&mut rng, 24, 17, density);

        let expected = reference_components(&raster, BG);
        let components = find_components(&raster, BG).unwrap();

        // Recovered pixel sets, checked pairwise disjoint as we go
        let mut actual = BTreeSet::new();
        let mut union: BTreeSet<(u32, u32)> = BTreeSet::new();
        for c in &components {
            let pixels = component_pixels(c);
            assert_eq!(pixels.len() as u32, c.pixel_count);
            assert!(
                union.is_disjoint(&pixels),
                "round {}: components overlap",
                round
            );
            union.extend(&pixels);
            actual.insert(pixels);
        }

        // The union of all components is exactly the foreground
        let mut foreground = BTreeSet::new();
        for y in 0..raster.height() {
            for x in 0..raster.width() {
                if raster.get_pixel_unchecked(x, y) != BG {
                    foreground.insert((x, y));
                }
            }
        }
        assert_eq!(union, foreground, "round {}: partition mismatch", round);

        // Component structure matches the flood-fill reference exactly
        assert_eq!(actual, expected, "round {}: connectivity mismatch", round);
    }
}

#[test]
fn partition_reg_degenerate_sizes() {
    let mut rng = StdRng::seed_from_u64(0xd0_05);

    // 1-pixel-wide and 1-pixel-tall rasters exercise the neighbor window
    // at both borders.
    for (width, height) in [(1, 1), (1, 9), (9, 1), (2, 2)] {
        let raster = random_raster(&mut rng, width, height, 0.5);
        let expected = reference_components(&raster, BG);
        let components = find_components(&raster, BG).unwrap();

        let actual: BTreeSet<_> = components.iter().map(component_pixels).collect();
        assert_eq!(actual, expected, "mismatch for {}x{}", width, height);
    }
}
