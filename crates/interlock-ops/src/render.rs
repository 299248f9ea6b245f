//! Render loops.
//!
//! A render call fills a destination rectangle with composited tile
//! pixels. Every pixel depends only on the frozen [`RenderPlan`] and its own
//! coordinates, so any partition of the selection into regions yields the
//! same bytes as rendering it whole.
//!
//! Writes are clipped to the plan's selection and the destination bounds;
//! pixels outside the selection are never touched. Inside the selection,
//! pixels outside the sheet are written transparent.
//!
//! # Cancellation
//!
//! The loop polls a [`CancelToken`] before every scanline. Once it reports
//! cancellation no further pixels are written for that call; scanlines
//! already written stay as they are.
//!
//! # Example
//!
//! ```rust
//! use interlock_core::{Rgba8, Surface};
//! use interlock_ops::{NeverCancel, RenderOutcome, RenderPlan, TileParams, render};
//!
//! let mut source = Surface::new(32, 32);
//! source.set_pixel(4, 4, Rgba8::opaque(255, 255, 255));
//!
//! let plan = RenderPlan::build(&source, source.bounds(), TileParams::default()).unwrap();
//! let mut dst = Surface::new(32, 32);
//! assert_eq!(render(&plan, &mut dst, &NeverCancel), RenderOutcome::Completed);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use interlock_core::{Rect, Rgba8, Surface};
use tracing::{debug, info, trace};

use crate::compose::render_pixel;
use crate::plan::RenderPlan;

/// Host-owned cancellation flag, polled once per scanline.
pub trait CancelToken {
    /// Returns `true` once the render should stop writing pixels.
    fn is_cancelled(&self) -> bool;
}

impl CancelToken for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: CancelToken + ?Sized> CancelToken for &T {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancelToken + ?Sized> CancelToken for Arc<T> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Token that never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// How a render call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RenderOutcome {
    /// Every requested pixel was written.
    Completed,
    /// Stopped early at a scanline boundary.
    Cancelled,
}

impl RenderOutcome {
    /// Returns `true` for [`RenderOutcome::Cancelled`].
    pub fn is_cancelled(self) -> bool {
        self == Self::Cancelled
    }
}

/// Part of `rect` this plan may write into `dst`.
pub(crate) fn writable_area(plan: &RenderPlan, dst: &Surface, rect: Rect) -> Option<Rect> {
    rect.intersect(&plan.selection())?.intersect(&dst.bounds())
}

/// Writes pixels `x0..x1` of scanline `y` into `row`.
#[inline]
pub(crate) fn render_span(plan: &RenderPlan, row: &mut [Rgba8], y: i32, x0: i32, x1: i32) {
    for x in x0..x1 {
        row[x as usize] = render_pixel(plan, x, y);
    }
}

/// Renders one destination rectangle.
///
/// `rect` is clipped to the selection and to `dst`.
pub fn render_region<C>(plan: &RenderPlan, dst: &mut Surface, rect: Rect, cancel: &C) -> RenderOutcome
where
    C: CancelToken + ?Sized,
{
    trace!(rect = %rect, "render::render_region");
    let Some(area) = writable_area(plan, dst, rect) else {
        return RenderOutcome::Completed;
    };

    for y in area.y..area.bottom() {
        if cancel.is_cancelled() {
            info!(rect = %area, scanline = y, "Render cancelled");
            return RenderOutcome::Cancelled;
        }
        render_span(plan, dst.row_mut(y as u32), y, area.x, area.right());
    }
    RenderOutcome::Completed
}

/// Renders a list of rectangles in order, stopping at the first
/// cancellation.
pub fn render_regions<C>(
    plan: &RenderPlan,
    dst: &mut Surface,
    regions: &[Rect],
    cancel: &C,
) -> RenderOutcome
where
    C: CancelToken + ?Sized,
{
    debug!(regions = regions.len(), sheet = %plan.sheet(), "Rendering regions");
    for &rect in regions {
        if render_region(plan, dst, rect, cancel).is_cancelled() {
            return RenderOutcome::Cancelled;
        }
    }
    RenderOutcome::Completed
}

/// Renders the whole selection.
pub fn render<C>(plan: &RenderPlan, dst: &mut Surface, cancel: &C) -> RenderOutcome
where
    C: CancelToken + ?Sized,
{
    render_region(plan, dst, plan.selection(), cancel)
}
