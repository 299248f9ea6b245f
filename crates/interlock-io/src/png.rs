//! PNG format support.
//!
//! Files store straight alpha; surfaces are premultiplied. Reading
//! premultiplies, writing divides alpha back out. Palette, low bit depth
//! and 16-bit images are normalized to 8 bits per channel on load.
//!
//! # Example
//!
//! ```rust,ignore
//! use interlock_io::png::{read, write};
//!
//! let sprite = read("sprite.png")?;
//! write("copy.png", &sprite)?;
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use interlock_core::{Rgba8, Surface};
use tracing::trace;

use crate::{IoError, IoResult};

/// Reads a PNG file into a premultiplied surface.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Surface> {
    trace!(path = %path.as_ref().display(), "png::read");
    let file = File::open(path.as_ref())?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];

    let pixels: Vec<Rgba8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => bytes
            .chunks_exact(4)
            .map(|p| Rgba8::from_straight(p[0], p[1], p[2], p[3]))
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => bytes
            .chunks_exact(3)
            .map(|p| Rgba8::opaque(p[0], p[1], p[2]))
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => bytes
            .chunks_exact(2)
            .map(|p| Rgba8::from_straight(p[0], p[0], p[0], p[1]))
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            bytes.iter().map(|&g| Rgba8::opaque(g, g, g)).collect()
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedLayout(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Ok(Surface::from_pixels(info.width, info.height, pixels)?)
}

/// Writes a surface as an 8-bit RGBA PNG.
pub fn write<P: AsRef<Path>>(path: P, surface: &Surface) -> IoResult<()> {
    trace!(path = %path.as_ref().display(), size = %surface.size(), "png::write");
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, surface.width(), surface.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let data: Vec<u8> = surface
        .pixels()
        .iter()
        .flat_map(|p| p.to_straight())
        .collect();

    png_writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
