//! blobcrop-test - Regression test support
//!
//! Provides a small regression test harness with three modes:
//!
//! - **Generate**: record results as the new baseline
//! - **Compare**: compare results against the baseline (default)
//! - **Display**: run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use blobcrop_test::{RegParams, raster_from_rows};
//!
//! let mut rp = RegParams::new("extract");
//! rp.compare_values(5.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod params;

pub use params::{RegParams, RegTestMode};

use blobcrop_core::{Raster, RasterMut, color};

/// Build a raster from ASCII row patterns.
///
/// Each string is one row; `'.'` and `' '` become `background`, every
/// other character becomes opaque black foreground. Useful for writing
/// scenario tests without binary image assets.
///
/// # Panics
///
/// Panics if `rows` is empty, a row is empty, or rows have unequal
/// lengths.
pub fn raster_from_rows(rows: &[&str], background: u32) -> Raster {
    assert!(!rows.is_empty(), "raster needs at least one row");
    let width = rows[0].len();
    assert!(width > 0, "raster rows must not be empty");

    let mut raster = RasterMut::new(width as u32, rows.len() as u32)
        .expect("dimensions already validated");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "all rows must have the same length");
        for (x, ch) in row.chars().enumerate() {
            let pixel = match ch {
                '.' | ' ' => background,
                _ => color::OPAQUE_BLACK,
            };
            raster.set_pixel_unchecked(x as u32, y as u32, pixel);
        }
    }

    raster.into()
}
