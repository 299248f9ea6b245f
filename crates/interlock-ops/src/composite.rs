//! Normal (source-over) compositing of premultiplied pixels.
//!
//! With premultiplied alpha the Porter-Duff Over operator is
//!
//! ```text
//! out = top + bottom * (1 - top.alpha)
//! ```
//!
//! applied identically to all four channels. It is evaluated in integer
//! arithmetic so every worker produces the same bytes.
//!
//! # Example
//!
//! ```rust
//! use interlock_core::Rgba8;
//! use interlock_ops::composite::over;
//!
//! let bg = Rgba8::opaque(0, 0, 255);
//! let fg = Rgba8::from_straight(255, 0, 0, 128);
//!
//! let out = over(bg, fg);
//! assert_eq!(out.a, 255);
//! assert!(out.r > 120 && out.b > 120);
//! ```

use interlock_core::Rgba8;

/// Composites `top` over `bottom`.
#[inline]
pub fn over(bottom: Rgba8, top: Rgba8) -> Rgba8 {
    let inv = 255 - u32::from(top.a);
    let ch = |b: u8, t: u8| -> u8 {
        // t <= top.a keeps the sum within u8
        (u32::from(t) + (u32::from(b) * inv + 127) / 255) as u8
    };
    Rgba8::new(
        ch(bottom.r, top.r),
        ch(bottom.g, top.g),
        ch(bottom.b, top.b),
        ch(bottom.a, top.a),
    )
}
