//! blobcrop - Split an image into its connected foreground regions
//!
//! blobcrop partitions a raster image into its connected foreground
//! regions (8-connectivity), separating each region from a designated
//! background color and emitting each region as an independently cropped
//! raster.
//!
//! # Example
//!
//! ```
//! use blobcrop::{RasterMut, color};
//! use blobcrop::label::extract_components;
//!
//! let mut image = RasterMut::new(10, 10).unwrap();
//! image.fill(color::OPAQUE_WHITE);
//! image.set_pixel(3, 3, color::OPAQUE_BLACK).unwrap();
//! image.set_pixel(4, 4, color::OPAQUE_BLACK).unwrap();
//!
//! let components = extract_components(&image.into(), color::OPAQUE_WHITE).unwrap();
//! assert_eq!(components.len(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use blobcrop_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use blobcrop_io as io;
pub use blobcrop_label as label;
