//! Benchmark fixtures for interlock. Benches live in `benches/`.

use interlock_core::{Rgba8, Surface};

/// Sprite with a translucent gradient body inside a transparent border.
pub fn sprite(width: u32, height: u32, border: u32) -> Surface {
    let mut s = Surface::new(width, height);
    for y in border..height.saturating_sub(border) {
        for x in border..width.saturating_sub(border) {
            s.set_pixel(
                x,
                y,
                Rgba8::from_straight((x % 256) as u8, (y % 256) as u8, 128, (96 + (x ^ y) % 160) as u8),
            );
        }
    }
    s
}
