//! Per-pixel seam compositing.
//!
//! Tile copies sit every `pitch` pixels and overlap their neighbours by
//! `margin`. Inside the sheet each destination pixel falls in exactly one
//! [`Zone`]:
//!
//! ```text
//!            x_loop 0      x_loop 1      x_loop 2
//!          +--------+--+--------+--+--------+--+
//! y_loop 0 |  None  |H |  None  |H |  None  |H |
//!          +--------+--+--------+--+--------+--+
//!          |   V    |C |   V    |C |   V    |C |
//! y_loop 1 +--------+--+--------+--+--------+--+
//!          |  None  |H |  None  |H |  None  |H |
//!          +--------+--+--------+--+--------+--+
//! ```
//!
//! `H`/`V`/`C` bands are `margin` wide and start at each pitch boundary
//! after the first. In a band the pixel is shared by the previous copy
//! (sampled at `offset - margin`) and the current copy (sampled at
//! `offset`), composited previous-below, current-on-top. The band past the
//! last full repeat has no current copy and shows the previous copy alone.
//!
//! Samples are taken from the tile with wraparound, which is what makes the
//! edges of neighbouring copies interlock.

use interlock_core::{Rgba8, Size, Surface};

use crate::composite::over;
use crate::plan::{Geometry, RenderPlan};

/// Overlap classification of a sheet pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Covered by a single tile copy.
    None,
    /// Shared with the copy to the left.
    HorizontalOverlap,
    /// Shared with the copy above.
    VerticalOverlap,
    /// Shared with the copies to the left, above and diagonally up-left.
    CornerOverlap,
}

/// Grid position of a sheet pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Column of the pitch grid.
    pub x_loop: u32,
    /// Row of the pitch grid.
    pub y_loop: u32,
    /// Horizontal sample coordinate in margin-extended tile space.
    pub x_offset: i64,
    /// Vertical sample coordinate in margin-extended tile space.
    pub y_offset: i64,
    /// A further full copy follows on the right.
    pub more_x: bool,
    /// A further full copy follows below.
    pub more_y: bool,
    /// Overlap zone.
    pub zone: Zone,
}

impl Cell {
    /// Locates destination pixel (x, y) in the pitch grid.
    ///
    /// Returns `None` outside the sheet.
    pub fn locate(geometry: &Geometry, x: i32, y: i32) -> Option<Cell> {
        let sheet = geometry.sheet;
        if !sheet.contains(x, y) {
            return None;
        }
        let Geometry {
            margin,
            effective,
            repeats,
            ..
        } = *geometry;

        let local_x = (x - sheet.x) as u32;
        let local_y = (y - sheet.y) as u32;
        let x_loop = local_x / effective.width;
        let y_loop = local_y / effective.height;

        let in_x_band = x_loop > 0 && local_x - x_loop * effective.width < margin.width;
        let in_y_band = y_loop > 0 && local_y - y_loop * effective.height < margin.height;
        let zone = match (in_x_band, in_y_band) {
            (true, true) => Zone::CornerOverlap,
            (true, false) => Zone::HorizontalOverlap,
            (false, true) => Zone::VerticalOverlap,
            (false, false) => Zone::None,
        };

        Some(Cell {
            x_loop,
            y_loop,
            x_offset: i64::from(x_loop) * i64::from(margin.width) + i64::from(local_x),
            y_offset: i64::from(y_loop) * i64::from(margin.height) + i64::from(local_y),
            more_x: x_loop < repeats.0,
            more_y: y_loop < repeats.1,
            zone,
        })
    }
}

/// Wrapped tile sampler positioned at a cell.
struct Sampler<'a> {
    tile: &'a Surface,
    cell: &'a Cell,
    margin: Size,
}

impl Sampler<'_> {
    /// Sample shifted back by `dx`/`dy` margins (0 or 1).
    #[inline]
    fn at(&self, dx: i64, dy: i64) -> Rgba8 {
        let x = self.cell.x_offset - dx * i64::from(self.margin.width);
        let y = self.cell.y_offset - dy * i64::from(self.margin.height);
        self.tile.bilinear_sample_wrapped(x as f32, y as f32)
    }
}

fn blend_none(s: &Sampler<'_>) -> Rgba8 {
    s.at(0, 0)
}

fn blend_horizontal(s: &Sampler<'_>) -> Rgba8 {
    if s.cell.more_x {
        over(s.at(1, 0), s.at(0, 0))
    } else {
        s.at(1, 0)
    }
}

fn blend_vertical(s: &Sampler<'_>) -> Rgba8 {
    if s.cell.more_y {
        over(s.at(0, 1), s.at(0, 0))
    } else {
        s.at(0, 1)
    }
}

/// Horizontal continuation wins over vertical when only one axis has
/// copies left.
fn blend_corner(s: &Sampler<'_>) -> Rgba8 {
    match (s.cell.more_x, s.cell.more_y) {
        (true, true) => {
            let row = over(s.at(1, 0), s.at(0, 0));
            let upper = over(s.at(0, 1), row);
            over(s.at(1, 1), upper)
        }
        (true, false) => over(s.at(1, 1), s.at(0, 1)),
        (false, true) => over(s.at(1, 1), s.at(1, 0)),
        (false, false) => s.at(1, 1),
    }
}

/// Composites the value of destination pixel (x, y).
///
/// Pixels outside the sheet are transparent.
pub fn render_pixel(plan: &RenderPlan, x: i32, y: i32) -> Rgba8 {
    let geometry = plan.geometry();
    let Some(cell) = Cell::locate(geometry, x, y) else {
        return Rgba8::TRANSPARENT;
    };
    let sampler = Sampler {
        tile: &plan.tile().surface,
        cell: &cell,
        margin: geometry.margin,
    };
    match cell.zone {
        Zone::None => blend_none(&sampler),
        Zone::HorizontalOverlap => blend_horizontal(&sampler),
        Zone::VerticalOverlap => blend_vertical(&sampler),
        Zone::CornerOverlap => blend_corner(&sampler),
    }
}
