//! Opaque bounding box detection.
//!
//! The tile that gets repeated is the tightest rectangle around every
//! non-transparent pixel of the source selection. Four scans find its
//! edges, each one narrowed by the edges already found:
//!
//! 1. `x_min` - columns left to right over the full height
//! 2. `y_min` - rows top to bottom, columns `>= x_min`
//! 3. `x_max` - columns right to left, rows `>= y_min`
//! 4. `y_max` - rows bottom to top, columns `x_min..=x_max`
//!
//! A fully transparent selection is returned unchanged and the whole
//! selection becomes the tile.
//!
//! # Example
//!
//! ```rust
//! use interlock_core::{Rect, Rgba8, Surface};
//! use interlock_ops::trim::trimmed_bounds;
//!
//! let mut sprite = Surface::new(10, 10);
//! sprite.set_pixel(3, 4, Rgba8::opaque(255, 0, 0));
//! sprite.set_pixel(6, 2, Rgba8::opaque(0, 255, 0));
//!
//! assert_eq!(trimmed_bounds(&sprite, sprite.bounds()), Rect::from_ltrb(3, 2, 7, 5));
//! ```

use interlock_core::{Rect, Surface};
use tracing::{debug, trace};

use crate::OpsResult;

/// A trimmed tile: the pixels of the opaque bounding box and where they
/// came from in the source.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Source-space rectangle the tile was copied from.
    pub bounds: Rect,
    /// Tile pixels, origin at (0, 0).
    pub surface: Surface,
}

/// Returns the smallest rectangle inside `bounds` that contains every pixel
/// with non-zero alpha.
///
/// `bounds` is clipped to the source first. If nothing inside it is
/// opaque, the clipped bounds are returned as-is.
pub fn trimmed_bounds(source: &Surface, bounds: Rect) -> Rect {
    let Some(b) = bounds.intersect(&source.bounds()) else {
        return bounds;
    };
    let opaque = |x: i32, y: i32| source.pixel(x as u32, y as u32).a != 0;

    let Some(x_min) = (b.x..b.right()).find(|&x| (b.y..b.bottom()).any(|y| opaque(x, y))) else {
        trace!(bounds = %b, "trim: region is fully transparent");
        return b;
    };

    // From here on a pixel is known to exist in column x_min, so every
    // narrowed scan hits; the fallbacks only keep the edges well-formed.
    let y_min = (b.y..b.bottom())
        .find(|&y| (x_min..b.right()).any(|x| opaque(x, y)))
        .unwrap_or(b.y);
    let x_max = (x_min..b.right())
        .rev()
        .find(|&x| (y_min..b.bottom()).any(|y| opaque(x, y)))
        .unwrap_or(x_min);
    let y_max = (y_min..b.bottom())
        .rev()
        .find(|&y| (x_min..=x_max).any(|x| opaque(x, y)))
        .unwrap_or(y_min);

    Rect::from_ltrb(x_min, y_min, x_max + 1, y_max + 1)
}

/// Trims `bounds` to its opaque bounding box and copies those pixels into
/// a new tile surface.
///
/// # Errors
///
/// Fails only if `bounds` does not overlap the source at all.
pub fn trim(source: &Surface, bounds: Rect) -> OpsResult<Tile> {
    trace!(bounds = %bounds, "trim::trim");
    let trimmed = trimmed_bounds(source, bounds);
    let surface = source.copy_region(trimmed)?;
    debug!(tile = %trimmed, "Trimmed source to opaque bounds");
    Ok(Tile {
        bounds: trimmed,
        surface,
    })
}
