//! # interlock-io
//!
//! Image file I/O for interlock [`Surface`]s.
//!
//! PNG is the supported format: sprite sheets and tiles are 8-bit RGBA
//! with alpha, which PNG stores losslessly.
//!
//! ```rust,ignore
//! let sprite = interlock_io::read("sprite.png")?;
//! interlock_io::write("tile.png", &sprite)?;
//! ```

#![warn(missing_docs)]

mod error;
pub mod png;

use std::path::Path;

use interlock_core::Surface;

pub use error::{IoError, IoResult};

fn check_extension(path: &Path) -> IoResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(()),
        other => Err(IoError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

/// Reads an image file, choosing the decoder from the extension.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Surface> {
    let path = path.as_ref();
    check_extension(path)?;
    png::read(path)
}

/// Writes an image file, choosing the encoder from the extension.
pub fn write<P: AsRef<Path>>(path: P, surface: &Surface) -> IoResult<()> {
    let path = path.as_ref();
    check_extension(path)?;
    png::write(path, surface)
}
