//! blobcrop-label - Connected-region labeling and extraction
//!
//! This crate implements the two-pass connected-component labeling engine:
//!
//! - **Scanning** - A single raster-scan pass assigns provisional labels
//!   to foreground pixels, resolving label equivalences on the fly with a
//!   disjoint-set arena ([`scan`], [`disjoint`], [`grid`]).
//! - **Aggregation** - A second pass flattens labels to their canonical
//!   root and groups pixels by component ([`aggregate`]).
//! - **Rendering** - Each component becomes a tightly cropped raster with
//!   transparent background ([`render`]).
//!
//! Pixels are foreground unless they equal the configured background
//! color exactly; regions are connected under 8-connectivity (edge or
//! corner adjacency).
//!
//! # Examples
//!
//! ```
//! use blobcrop_core::{RasterMut, color};
//! use blobcrop_label::find_components;
//!
//! let mut image = RasterMut::new(8, 8).unwrap();
//! image.fill(color::OPAQUE_WHITE);
//! image.set_pixel(1, 1, color::OPAQUE_BLACK).unwrap();
//! image.set_pixel(2, 2, color::OPAQUE_BLACK).unwrap();
//! image.set_pixel(6, 6, color::OPAQUE_BLACK).unwrap();
//!
//! let components = find_components(&image.into(), color::OPAQUE_WHITE).unwrap();
//! // The diagonal pair merges; the far pixel stays separate.
//! assert_eq!(components.len(), 2);
//! ```

pub mod aggregate;
pub mod disjoint;
pub mod error;
pub mod extract;
pub mod grid;
pub mod render;
pub mod scan;
pub mod stats;

// Re-export core types
pub use blobcrop_core;

// Re-export error types
pub use error::{LabelError, LabelResult};

// Re-export the labeling pipeline
pub use aggregate::collect_components;
pub use disjoint::LabelArena;
pub use extract::{Component, extract_components, find_components};
pub use grid::LabelGrid;
pub use render::{FILL_COLOR, bounding_box, render_component};
pub use scan::label_pixels;

// Re-export statistics helpers
pub use stats::{ComponentStats, component_bounds, component_stats, count_components};
