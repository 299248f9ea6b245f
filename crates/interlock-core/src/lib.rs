//! # interlock-core
//!
//! Core types for interlocking tile rendering.
//!
//! This crate provides the pixel-level foundation used by the rest of the
//! workspace:
//!
//! - [`Rect`], [`Size`] - Integer geometry for selections, sheets and regions
//! - [`Rgba8`] - Premultiplied-alpha 8-bit pixel
//! - [`Surface`] - Owned pixel buffer with wrapped bilinear sampling
//! - [`Error`], [`Result`] - Error handling for buffer operations
//!
//! ## Crate Structure
//!
//! ```text
//! interlock-core (this crate)
//!    ^
//!    |
//!    +-- interlock-ops (trim, plan, composite, render)
//!    +-- interlock-io  (PNG read/write)
//!    +-- interlock-cli
//! ```
//!
//! ## Example
//!
//! ```rust
//! use interlock_core::{Rgba8, Surface};
//!
//! let mut tile = Surface::new(4, 4);
//! tile.set_pixel(3, 0, Rgba8::new(255, 0, 0, 255));
//!
//! // Coordinates wrap around the tile edges
//! assert_eq!(tile.sample_wrapped(-1, 0), Rgba8::new(255, 0, 0, 255));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod rect;
pub mod surface;

pub use error::{Error, Result};
pub use pixel::Rgba8;
pub use rect::{Rect, Size};
pub use surface::Surface;
