//! Rectangle and size types for selections, sheets and render regions.
//!
//! All coordinates use the standard image convention:
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! Rectangles are inclusive on the left/top edges and exclusive on the
//! right/bottom edges. The origin is signed: a sheet larger than its
//! selection (possible when the selection is narrower than the margin) is
//! centered with a negative offset.
//!
//! # Usage
//!
//! ```rust
//! use interlock_core::Rect;
//!
//! let selection = Rect::new(10, 20, 100, 50);
//! assert!(selection.contains(15, 25));
//! assert!(!selection.contains(5, 25));
//!
//! let regions = selection.split_into_tiles(64, 64);
//! assert_eq!(regions.len(), 2);
//! ```

use std::fmt;

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Creates a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// # Example
///
/// ```rust
/// use interlock_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: i32,
    /// Y coordinate of the top edge (inclusive)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at origin (0, 0) with the given dimensions.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle from its left/top (inclusive) and right/bottom
    /// (exclusive) edges.
    ///
    /// Inverted edges produce an empty rectangle at `(left, top)`.
    ///
    /// ```rust
    /// use interlock_core::Rect;
    ///
    /// assert_eq!(Rect::from_ltrb(2, 3, 7, 5), Rect::new(2, 3, 5, 2));
    /// ```
    #[inline]
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let width = (i64::from(right) - i64::from(left)).max(0) as u32;
        let height = (i64::from(bottom) - i64::from(top)).max(0) as u32;
        Self::new(left, top, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Returns the dimensions of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// ```rust
    /// use interlock_core::Rect;
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(10, 10));
    /// assert!(rect.contains(109, 109));
    /// assert!(!rect.contains(110, 110));
    /// ```
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if this rectangle fully contains another.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles don't overlap.
    ///
    /// ```rust
    /// use interlock_core::Rect;
    ///
    /// let a = Rect::new(0, 0, 100, 100);
    /// let b = Rect::new(50, 50, 100, 100);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::from_ltrb(x, y, right, bottom))
        } else {
            None
        }
    }

    /// Partitions this rectangle into disjoint tiles of at most
    /// `tile_width` x `tile_height`, in row-major order.
    ///
    /// The union of the returned rectangles is exactly `self`. Hosts use this
    /// to hand independent render regions to workers.
    ///
    /// ```rust
    /// use interlock_core::Rect;
    ///
    /// let tiles = Rect::new(0, 0, 100, 30).split_into_tiles(40, 20);
    /// assert_eq!(tiles.len(), 6);
    /// assert_eq!(tiles[2], Rect::new(80, 0, 20, 20));
    /// assert_eq!(tiles[5], Rect::new(80, 20, 20, 10));
    /// ```
    pub fn split_into_tiles(&self, tile_width: u32, tile_height: u32) -> Vec<Rect> {
        if self.is_empty() {
            return Vec::new();
        }
        let tile_width = tile_width.max(1);
        let tile_height = tile_height.max(1);

        let mut tiles = Vec::new();
        let mut y = 0;
        while y < self.height {
            let h = tile_height.min(self.height - y);
            let mut x = 0;
            while x < self.width {
                let w = tile_width.min(self.width - x);
                tiles.push(Rect::new(self.x + x as i32, self.y + y as i32, w, h));
                x += w;
            }
            y += h;
        }
        tiles
    }

    /// Returns an iterator over all (x, y) coordinates in this rectangle,
    /// row by row.
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(-10, 20, 100, 50);
        assert_eq!(r.right(), 90);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.size(), Size::new(100, 50));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10, 10, 100, 100);
        assert!(r.contains(10, 10));
        assert!(r.contains(109, 109));
        assert!(!r.contains(110, 110));
        assert!(!r.contains(5, 50));
    }

    #[test]
    fn test_rect_from_ltrb_inverted_is_empty() {
        let r = Rect::from_ltrb(10, 10, 5, 20);
        assert!(r.is_empty());
        assert_eq!(r.x, 10);
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));

        let far = Rect::new(200, 200, 10, 10);
        assert_eq!(a.intersect(&far), None);
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0, 0, 100, 100);
        assert!(outer.contains_rect(&Rect::new(10, 10, 50, 50)));
        assert!(!outer.contains_rect(&Rect::new(60, 60, 50, 50)));
    }

    #[test]
    fn test_split_into_tiles_covers_rect() {
        let rect = Rect::new(3, 7, 37, 23);
        let tiles = rect.split_into_tiles(8, 5);

        let total: u64 = tiles.iter().map(Rect::area).sum();
        assert_eq!(total, rect.area());
        for tile in &tiles {
            assert!(rect.contains_rect(tile));
        }
        for (i, a) in tiles.iter().enumerate() {
            for b in &tiles[i + 1..] {
                assert_eq!(a.intersect(b), None, "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn test_split_empty_rect() {
        assert!(Rect::new(0, 0, 0, 10).split_into_tiles(4, 4).is_empty());
    }

    #[test]
    fn test_iter_coords() {
        let coords: Vec<_> = Rect::new(-1, 0, 2, 2).iter_coords().collect();
        assert_eq!(coords, vec![(-1, 0), (0, 0), (-1, 1), (0, 1)]);
    }
}
