//! Parallel rendering using Rayon.
//!
//! Scanlines of the destination are independent, so they are handed to the
//! Rayon pool directly. The plan is shared read-only; the only shared
//! mutable state is the cancellation flag.
//!
//! # Example
//!
//! ```rust
//! use interlock_core::{Rgba8, Surface};
//! use interlock_ops::{NeverCancel, RenderPlan, TileParams, parallel, render};
//!
//! let mut source = Surface::new(48, 48);
//! for x in 10..20 {
//!     source.set_pixel(x, 12, Rgba8::opaque(0, 128, 255));
//! }
//! let plan = RenderPlan::build(&source, source.bounds(), TileParams::new(2, 0, (0.0, 0.0))).unwrap();
//!
//! let mut a = Surface::new(48, 48);
//! let mut b = Surface::new(48, 48);
//! let _ = render(&plan, &mut a, &NeverCancel);
//! let _ = parallel::render_parallel(&plan, &mut b, &NeverCancel);
//! assert_eq!(a, b);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use interlock_core::Surface;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::plan::RenderPlan;
use crate::render::{CancelToken, RenderOutcome, render_span, writable_area};

/// Renders the whole selection with one Rayon task per scanline.
///
/// Produces the same pixels as [`render`](crate::render::render). After
/// cancellation is observed no further scanlines are started; scanlines
/// already in flight finish.
pub fn render_parallel<C>(plan: &RenderPlan, dst: &mut Surface, cancel: &C) -> RenderOutcome
where
    C: CancelToken + Sync + ?Sized,
{
    trace!(selection = %plan.selection(), "parallel::render_parallel");
    let Some(area) = writable_area(plan, dst, plan.selection()) else {
        return RenderOutcome::Completed;
    };
    debug!(area = %area, threads = rayon::current_num_threads(), "Rendering in parallel");

    let width = dst.width() as usize;
    let stopped = AtomicBool::new(false);

    dst.pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .skip(area.y as usize)
        .take(area.height as usize)
        .for_each(|(y, row)| {
            if stopped.load(Ordering::Relaxed) {
                return;
            }
            if cancel.is_cancelled() {
                stopped.store(true, Ordering::Relaxed);
                return;
            }
            render_span(plan, row, y as i32, area.x, area.right());
        });

    if stopped.into_inner() {
        info!(area = %area, "Parallel render cancelled");
        RenderOutcome::Cancelled
    } else {
        RenderOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TileParams;
    use crate::render::{NeverCancel, render};
    use interlock_core::{Rect, Rgba8};
    use std::sync::atomic::AtomicUsize;

    fn source() -> Surface {
        let pixels = (0..60u32)
            .flat_map(|y| {
                (0..80u32).map(move |x| {
                    if (20..45).contains(&x) && (15..38).contains(&y) {
                        Rgba8::from_straight((x * 5) as u8, (y * 6) as u8, 40, (50 + x + y * 2) as u8)
                    } else {
                        Rgba8::TRANSPARENT
                    }
                })
            })
            .collect();
        Surface::from_pixels(80, 60, pixels).unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let source = source();
        for params in [
            TileParams::default(),
            TileParams::new(6, 6, (0.0, 0.0)),
            TileParams::new(9, 4, (-0.5, 1.0)),
        ] {
            let plan = RenderPlan::build(&source, Rect::new(3, 2, 70, 55), params).unwrap();

            let mut seq = Surface::filled(80, 60, Rgba8::opaque(9, 9, 9));
            let mut par = seq.clone();
            assert_eq!(render(&plan, &mut seq, &NeverCancel), RenderOutcome::Completed);
            assert_eq!(render_parallel(&plan, &mut par, &NeverCancel), RenderOutcome::Completed);
            assert_eq!(seq, par, "{params:?}");
        }
    }

    #[test]
    fn test_parallel_pre_cancelled() {
        let source = source();
        let plan = RenderPlan::build(&source, source.bounds(), TileParams::default()).unwrap();
        let before = Surface::filled(80, 60, Rgba8::opaque(9, 9, 9));
        let mut dst = before.clone();

        let flag = AtomicBool::new(true);
        assert_eq!(render_parallel(&plan, &mut dst, &flag), RenderOutcome::Cancelled);
        assert_eq!(dst, before);
    }

    /// Cancels after a fixed number of polls.
    struct CancelAfter {
        polls: AtomicUsize,
        limit: usize,
    }

    impl CancelToken for CancelAfter {
        fn is_cancelled(&self) -> bool {
            self.polls.fetch_add(1, Ordering::SeqCst) >= self.limit
        }
    }

    #[test]
    fn test_parallel_cancel_mid_render() {
        let source = source();
        let plan = RenderPlan::build(&source, source.bounds(), TileParams::new(4, 4, (0.0, 0.0))).unwrap();
        let before = Surface::filled(80, 60, Rgba8::opaque(9, 9, 9));

        let mut whole = before.clone();
        assert_eq!(render(&plan, &mut whole, &NeverCancel), RenderOutcome::Completed);

        let mut dst = before.clone();
        let cancel = CancelAfter {
            polls: AtomicUsize::new(0),
            limit: 10,
        };
        assert_eq!(render_parallel(&plan, &mut dst, &cancel), RenderOutcome::Cancelled);

        // Scanlines are either complete or untouched, in any order
        let mut written = 0;
        for y in 0..60u32 {
            if dst.row(y) == before.row(y) {
                continue;
            }
            assert_eq!(dst.row(y), whole.row(y), "row {y} partially rendered");
            written += 1;
        }
        assert_eq!(written, 10);
    }
}
