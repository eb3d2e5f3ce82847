//! Command-line entry point
//!
//! Splits an input image into its connected foreground regions and writes
//! one PNG per region next to the input file.

use anyhow::{Context, Result, bail};
use blobcrop::color;
use blobcrop::io::{ImageFormat, read_image, write_image};
use blobcrop::label::find_components;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "blobcrop",
    version,
    about = "Split an image into its connected foreground regions"
)]
struct Cli {
    /// Input image (PNG)
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Background color as a packed RGBA integer, decimal or 0x-prefixed
    /// hex (default: opaque white)
    #[arg(short = 'b', long = "background")]
    background: Option<String>,
}

/// Parse a packed RGBA color from a decimal or 0x-prefixed hex string.
fn parse_color(value: &str) -> Result<u32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).with_context(|| format!("invalid hex color: {}", value))
    } else {
        value
            .parse::<u32>()
            .with_context(|| format!("invalid color value: {}", value))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let background = match &cli.background {
        Some(value) => parse_color(value)?,
        None => color::OPAQUE_WHITE,
    };

    let image = read_image(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let components = find_components(&image, background)?;

    if components.is_empty() {
        eprintln!("no foreground regions found");
        return Ok(());
    }

    let Some(stem) = cli.input.file_stem().and_then(|s| s.to_str()) else {
        bail!("input path has no usable file stem: {}", cli.input.display());
    };
    let dir = cli.input.parent().map(PathBuf::from).unwrap_or_default();

    for component in &components {
        let path = dir.join(format!("{}-component-{}.png", stem, component.label));
        write_image(&component.raster, &path, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!(
            "wrote {} ({} pixels, {}x{})",
            path.display(),
            component.pixel_count,
            component.bounds.w,
            component.bounds.h
        );
    }

    Ok(())
}
