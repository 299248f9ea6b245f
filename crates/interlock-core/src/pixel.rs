//! Premultiplied-alpha 8-bit pixel type.
//!
//! Surfaces store [`Rgba8`] with color channels already multiplied by alpha.
//! Bilinear filtering and source-over compositing are both linear in this
//! representation, so fully transparent texels never bleed color into
//! their neighbours.
//!
//! # Example
//!
//! ```rust
//! use interlock_core::Rgba8;
//!
//! // Half-transparent white, stored premultiplied
//! let px = Rgba8::from_straight(255, 255, 255, 128);
//! assert_eq!(px, Rgba8::new(128, 128, 128, 128));
//! assert_eq!(px.to_straight(), [255, 255, 255, 128]);
//! ```

use std::fmt;

/// An RGBA pixel with premultiplied 8-bit channels.
///
/// # Invariants
///
/// Each color channel is `<= a`. Constructors taking straight alpha uphold
/// this; [`Rgba8::new`] trusts the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba8 {
    /// Red, premultiplied
    pub r: u8,
    /// Green, premultiplied
    pub g: u8,
    /// Blue, premultiplied
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a pixel from already premultiplied channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a pixel from straight (non-premultiplied) channels.
    #[inline]
    pub fn from_straight(r: u8, g: u8, b: u8, a: u8) -> Self {
        let mul = |c: u8| ((u32::from(c) * u32::from(a) + 127) / 255) as u8;
        Self::new(mul(r), mul(g), mul(b), a)
    }

    /// Converts back to straight alpha as `[r, g, b, a]`.
    ///
    /// Transparent pixels map to all zeros.
    #[inline]
    pub fn to_straight(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let a = u32::from(self.a);
        let div = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
        [div(self.r), div(self.g), div(self.b), self.a]
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Builds a pixel from premultiplied `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Returns `true` if alpha is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl fmt::Debug for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba8({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}
