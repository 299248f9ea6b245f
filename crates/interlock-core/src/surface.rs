//! Owned pixel surface with wrapped sampling.
//!
//! [`Surface`] is the buffer type shared by the trimmer, the compositor and
//! the host: source sprites, trimmed tiles and render destinations are all
//! surfaces.
//!
//! # Memory Layout
//!
//! Pixels are stored row-major with no padding:
//! `index = y * width + x`.
//!
//! # Copy-on-Write
//!
//! Storage sits behind an [`Arc`], so cloning a surface is O(1). A trimmed
//! tile is built once per render session and then cloned into every worker;
//! mutation through [`Surface::pixels_mut`] or [`Surface::set_pixel`] only
//! copies when the storage is shared.
//!
//! # Wrapped Sampling
//!
//! ```rust
//! use interlock_core::{Rgba8, Surface};
//!
//! let mut tile = Surface::new(3, 2);
//! tile.set_pixel(2, 1, Rgba8::opaque(9, 9, 9));
//!
//! assert_eq!(tile.sample_wrapped(-1, -1), Rgba8::opaque(9, 9, 9));
//! assert_eq!(tile.bilinear_sample_wrapped(5.0, 3.0), Rgba8::opaque(9, 9, 9));
//! ```

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::pixel::Rgba8;
use crate::rect::{Rect, Size};

/// A 2D buffer of premultiplied [`Rgba8`] pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    /// Pixel data (Arc for cheap cloning)
    data: Arc<Vec<Rgba8>>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl Surface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::TRANSPARENT)
    }

    /// Creates a surface filled with a single pixel value.
    pub fn filled(width: u32, height: u32, pixel: Rgba8) -> Self {
        Self {
            data: Arc::new(vec![pixel; width as usize * height as usize]),
            width,
            height,
        }
    }

    /// Creates a surface from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(pixels),
            width,
            height,
        })
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns a rectangle covering the entire surface.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if the surface has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns all pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.data
    }

    /// Returns all pixels mutably, cloning shared storage first.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[self.index(x, y)]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        if self.bounds().contains(x, y) {
            Some(self.data[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba8) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        self.pixels_mut()[idx] = pixel;
    }

    /// Returns row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba8] {
        let start = self.index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Returns row `y` mutably.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Rgba8] {
        let start = self.index(0, y);
        let width = self.width as usize;
        &mut self.pixels_mut()[start..start + width]
    }

    /// Copies a region into a new surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `region` is empty or not fully
    /// inside this surface.
    pub fn copy_region(&self, region: Rect) -> Result<Surface> {
        if region.is_empty() || !self.bounds().contains_rect(&region) {
            return Err(Error::InvalidRegion {
                region,
                width: self.width,
                height: self.height,
            });
        }

        let mut pixels = Vec::with_capacity(region.area() as usize);
        for y in region.y..region.bottom() {
            let row = self.row(y as u32);
            pixels.extend_from_slice(&row[region.x as usize..region.right() as usize]);
        }
        Surface::from_pixels(region.width, region.height, pixels)
    }

    /// Returns the pixel at integer coordinates, wrapping out-of-range
    /// values around the surface edges (Euclidean modulo).
    ///
    /// # Panics
    ///
    /// Panics if the surface is empty.
    #[inline]
    pub fn sample_wrapped(&self, x: i64, y: i64) -> Rgba8 {
        let wx = x.rem_euclid(i64::from(self.width)) as u32;
        let wy = y.rem_euclid(i64::from(self.height)) as u32;
        self.data[self.index(wx, wy)]
    }

    /// Bilinear sample at fractional coordinates with wraparound.
    ///
    /// Pixel centers sit on integer coordinates, so integer inputs return
    /// the exact (wrapped) texel. The four neighbours are blended in
    /// premultiplied space and each channel is rounded to nearest.
    ///
    /// # Panics
    ///
    /// Panics if the surface is empty.
    pub fn bilinear_sample_wrapped(&self, x: f32, y: f32) -> Rgba8 {
        let fx = x.floor();
        let fy = y.floor();
        let tx = x - fx;
        let ty = y - fy;

        let x0 = fx as i64;
        let y0 = fy as i64;
        let p00 = self.sample_wrapped(x0, y0).to_array();
        if tx == 0.0 && ty == 0.0 {
            return Rgba8::from_array(p00);
        }
        let p10 = self.sample_wrapped(x0 + 1, y0).to_array();
        let p01 = self.sample_wrapped(x0, y0 + 1).to_array();
        let p11 = self.sample_wrapped(x0 + 1, y0 + 1).to_array();

        let w00 = (1.0 - tx) * (1.0 - ty);
        let w10 = tx * (1.0 - ty);
        let w01 = (1.0 - tx) * ty;
        let w11 = tx * ty;

        let mut out = [0u8; 4];
        for c in 0..4 {
            let v = f32::from(p00[c]) * w00
                + f32::from(p10[c]) * w10
                + f32::from(p01[c]) * w01
                + f32::from(p11[c]) * w11;
            out[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        Rgba8::from_array(out)
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("shared", &(Arc::strong_count(&self.data) > 1))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Surface {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| Rgba8::opaque((x * 10) as u8, (y * 10) as u8, 0)))
            .collect();
        Surface::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        let err = Surface::from_pixels(4, 4, vec![Rgba8::TRANSPARENT; 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_new_is_transparent() {
        let s = Surface::new(5, 3);
        assert_eq!(s.size(), Size::new(5, 3));
        assert!(s.pixels().iter().all(|p| p.is_transparent()));
    }

    #[test]
    fn test_get_pixel_bounds() {
        let s = gradient(4, 4);
        assert_eq!(s.get_pixel(3, 2), Some(Rgba8::opaque(30, 20, 0)));
        assert_eq!(s.get_pixel(-1, 0), None);
        assert_eq!(s.get_pixel(4, 0), None);
    }

    #[test]
    fn test_clone_is_copy_on_write() {
        let a = gradient(4, 4);
        let mut b = a.clone();
        b.set_pixel(0, 0, Rgba8::TRANSPARENT);
        assert_eq!(a.pixel(0, 0), Rgba8::opaque(0, 0, 0));
        assert_eq!(b.pixel(0, 0), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_copy_region() {
        let s = gradient(6, 6);
        let region = s.copy_region(Rect::new(2, 3, 3, 2)).unwrap();
        assert_eq!(region.size(), Size::new(3, 2));
        assert_eq!(region.pixel(0, 0), s.pixel(2, 3));
        assert_eq!(region.pixel(2, 1), s.pixel(4, 4));
    }

    #[test]
    fn test_copy_region_out_of_bounds() {
        let s = gradient(4, 4);
        assert!(matches!(
            s.copy_region(Rect::new(2, 2, 4, 4)),
            Err(Error::InvalidRegion { .. })
        ));
        assert!(s.copy_region(Rect::new(-1, 0, 2, 2)).is_err());
    }

    #[test]
    fn test_wrapped_boundary_identity() {
        for width in 1..8 {
            let s = gradient(width, 3);
            assert_eq!(
                s.bilinear_sample_wrapped(-1.0, 0.0),
                s.bilinear_sample_wrapped((width - 1) as f32, 0.0)
            );
            assert_eq!(s.sample_wrapped(-1, 0), s.pixel(width - 1, 0));
        }
    }

    #[test]
    fn test_wrapped_far_coordinates() {
        let s = gradient(4, 3);
        assert_eq!(s.sample_wrapped(4 * 7 + 1, -3 * 5 + 2), s.pixel(1, 2));
    }

    #[test]
    fn test_bilinear_integer_is_exact() {
        let s = gradient(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(s.bilinear_sample_wrapped(x as f32, y as f32), s.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_bilinear_midpoint() {
        let s = gradient(4, 4);
        // Halfway between x=1 (10) and x=2 (20)
        assert_eq!(s.bilinear_sample_wrapped(1.5, 0.0), Rgba8::opaque(15, 0, 0));
        // Halfway between last column (30) and wrapped first column (0)
        assert_eq!(s.bilinear_sample_wrapped(3.5, 0.0).r, 15);
    }
}
