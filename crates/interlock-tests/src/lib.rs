//! Integration tests for interlock crates.
//!
//! End-to-end checks across decoding, trimming, planning, rendering and
//! encoding.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    use interlock_core::{Rect, Rgba8, Surface};
    use interlock_ops::{
        NeverCancel, RenderOutcome, RenderPlan, TileParams, parallel, render, render_regions,
    };
    use tempfile::tempdir;

    /// Opaque checker sprite inside a transparent border.
    fn sprite(width: u32, height: u32, border: u32) -> Surface {
        let mut s = Surface::new(width, height);
        for y in border..height - border {
            for x in border..width - border {
                let v = ((x * 31 + y * 17) % 256) as u8;
                s.set_pixel(x, y, Rgba8::opaque(v, 255 - v, (x * y % 256) as u8));
            }
        }
        s
    }

    /// Semi-transparent gradient sprite, exercising the overlap blending.
    fn translucent(width: u32, height: u32) -> Surface {
        let pixels = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    Rgba8::from_straight(
                        (x * 9 % 256) as u8,
                        (y * 13 % 256) as u8,
                        200,
                        (64 + (x + y) * 5 % 192) as u8,
                    )
                })
            })
            .collect();
        Surface::from_pixels(width, height, pixels).unwrap()
    }

    fn render_full(plan: &RenderPlan, source: &Surface) -> Surface {
        let mut dst = source.clone();
        assert_eq!(render(plan, &mut dst, &NeverCancel), RenderOutcome::Completed);
        dst
    }

    /// Decode -> plan -> render -> encode -> decode keeps every pixel.
    #[test]
    fn test_png_pipeline() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sprite.png");
        let output = dir.path().join("pattern.png");

        let source = sprite(40, 30, 5);
        interlock_io::write(&input, &source).expect("Failed to write PNG");

        let loaded = interlock_io::read(&input).expect("Failed to read PNG");
        assert_eq!(loaded.pixels(), source.pixels());

        let plan = RenderPlan::build(&loaded, loaded.bounds(), TileParams::new(3, 3, (0.0, 0.0)))
            .expect("Failed to plan");
        assert_eq!(plan.tile().bounds, Rect::new(5, 5, 30, 20));

        let rendered = render_full(&plan, &loaded);
        interlock_io::write(&output, &rendered).expect("Failed to write PNG");

        let reloaded = interlock_io::read(&output).expect("Failed to read PNG");
        assert_eq!(reloaded.size(), rendered.size());
        assert_eq!(reloaded.pixels(), rendered.pixels());
    }

    /// With no margin the sheet is an exact repetition of the trimmed tile.
    #[test]
    fn test_zero_margin_repeats_tile() {
        let source = sprite(50, 40, 10);
        let plan = RenderPlan::build(&source, source.bounds(), TileParams::default()).unwrap();
        let tile = &plan.tile().surface;
        let (tw, th) = (tile.width(), tile.height());
        assert_eq!((tw, th), (30, 20));
        assert_eq!(plan.repeats(), (1, 2));

        let dst = render_full(&plan, &source);
        let sheet = plan.sheet();
        for y in sheet.y..sheet.bottom() {
            for x in sheet.x..sheet.right() {
                let tx = (x - sheet.x) as u32 % tw;
                let ty = (y - sheet.y) as u32 % th;
                assert_eq!(dst.pixel(x as u32, y as u32), tile.pixel(tx, ty), "at ({x}, {y})");
            }
        }
    }

    /// Region order and partition do not change the result.
    #[test]
    fn test_region_partition_parity() {
        let source = translucent(57, 43);
        let params = TileParams {
            horizontal_margin: 4,
            vertical_margin: 2,
            linked_margins: false,
            position: (-0.4, 0.7),
        };
        let selection = Rect::new(3, 2, 50, 39);
        let plan = RenderPlan::build(&source, selection, params).unwrap();
        let whole = render_full(&plan, &source);

        for size in [1, 7, 16, 64] {
            let mut regions = selection.split_into_tiles(size, size);
            regions.reverse();
            let mut dst = source.clone();
            assert_eq!(
                render_regions(&plan, &mut dst, &regions, &NeverCancel),
                RenderOutcome::Completed
            );
            assert_eq!(dst.pixels(), whole.pixels(), "region size {size}");
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let source = translucent(80, 64);
        let plan = RenderPlan::build(&source, source.bounds(), TileParams::new(6, 6, (0.5, -1.0)))
            .unwrap();
        let sequential = render_full(&plan, &source);

        let mut dst = source.clone();
        assert_eq!(
            parallel::render_parallel(&plan, &mut dst, &NeverCancel),
            RenderOutcome::Completed
        );
        assert_eq!(dst.pixels(), sequential.pixels());
    }

    /// Re-planning with new parameters equals building from scratch.
    #[test]
    fn test_with_params_matches_rebuild() {
        let source = sprite(48, 48, 4);
        let selection = Rect::new(0, 0, 48, 48);
        let first = RenderPlan::build(&source, selection, TileParams::new(1, 1, (0.0, 0.0))).unwrap();

        let params = TileParams::new(9, 5, (1.0, 0.25));
        let replanned = first.with_params(params).unwrap();
        let rebuilt = RenderPlan::build(&source, selection, params).unwrap();

        assert_eq!(replanned.geometry(), rebuilt.geometry());
        assert_eq!(
            render_full(&replanned, &source).pixels(),
            render_full(&rebuilt, &source).pixels()
        );
    }

    #[test]
    fn test_cancelled_render_stops() {
        let source = translucent(32, 32);
        let plan = RenderPlan::build(&source, source.bounds(), TileParams::new(2, 2, (0.0, 0.0)))
            .unwrap();
        let cancel = Arc::new(AtomicBool::new(true));

        let mut dst = source.clone();
        assert!(render(&plan, &mut dst, &cancel).is_cancelled());
        assert_eq!(dst.pixels(), source.pixels());

        let mut dst = source.clone();
        assert!(parallel::render_parallel(&plan, &mut dst, &cancel).is_cancelled());
    }

    #[test]
    fn test_selection_outside_source_rejected() {
        let source = sprite(16, 16, 2);
        let result = RenderPlan::build(&source, Rect::new(100, 100, 10, 10), TileParams::default());
        assert!(result.is_err());
    }
}
