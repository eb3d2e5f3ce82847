//! blobcrop-io - Image I/O for blobcrop
//!
//! Thin wrappers that decode image files into [`Raster`]s and encode
//! rasters back to files. The labeling core performs no I/O of its own;
//! every file and decode error lives in this crate's [`IoError`].
//!
//! PNG is the only format carried by default (`png-format` feature).

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use blobcrop_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file path.
///
/// The format is detected from the file header, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    match detect_format(&path)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let file = File::open(path)?;
            png::read_png(BufReader::new(file))
        }
        other => Err(IoError::UnsupportedFormat(format!(
            "no decoder available for {:?} images",
            other
        ))),
    }
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(
    raster: &Raster,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let file = File::create(path)?;
            png::write_png(raster, BufWriter::new(file))
        }
        other => Err(IoError::UnsupportedFormat(format!(
            "no encoder available for {:?} images",
            other
        ))),
    }
}
