//! PNG image format support

use crate::{IoError, IoResult};
use blobcrop_core::{Raster, RasterMut, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGBA raster
///
/// Paletted, low-bit-depth, and 16-bit images are normalized to 8-bit
/// samples by the decoder before conversion.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = info.width;
    let height = info.height;

    // After EXPAND + STRIP_16 only 8-bit gray, gray+alpha, RGB, and RGBA remain
    let channels = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type after expansion: {:?}",
                other
            )));
        }
    };

    let mut out = RasterMut::new(width, height)?;
    let data = &buf[..info.buffer_size()];
    let bytes_per_row = info.line_size;

    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..];
        for x in 0..width {
            let i = x as usize * channels;
            let pixel = match channels {
                1 => {
                    let g = row[i];
                    color::compose_rgb(g, g, g)
                }
                2 => {
                    let g = row[i];
                    color::compose_rgba(g, g, g, row[i + 1])
                }
                3 => color::compose_rgb(row[i], row[i + 1], row[i + 2]),
                _ => color::compose_rgba(row[i], row[i + 1], row[i + 2], row[i + 3]),
            };
            out.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(out.into())
}

/// Write a raster as an 8-bit RGBA PNG
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut bytes = Vec::with_capacity(raster.data().len() * 4);
    for &pixel in raster.data() {
        bytes.extend_from_slice(&[
            color::red(pixel),
            color::green(pixel),
            color::blue(pixel),
            color::alpha(pixel),
        ]);
    }

    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
