//! Alpha compositing for brush dabs
//!
//! A single "over" blend serves both opaque drawing (an opaque source
//! overwrites) and semi-transparent paint. Erasing is deliberately not
//! routed through "over": a fully transparent source is algebraically a
//! no-op there, so the eraser clears pixels to transparent directly.

use super::Rgba;

/// Composite `src` over `dst` with the standard "over" operator.
///
/// Straight (non-premultiplied) alpha. `out_a == 0` is defined as fully
/// transparent rather than dividing by zero.
pub fn blend_over(dst: Rgba, src: Rgba) -> Rgba {
    if src.a >= 1.0 {
        return src;
    }
    if src.a <= 0.0 {
        return dst;
    }

    let out_a = src.a + dst.a * (1.0 - src.a);
    if out_a <= 0.0 {
        return Rgba::TRANSPARENT;
    }

    let inv = 1.0 - src.a;
    Rgba {
        r: (src.r * src.a + dst.r * dst.a * inv) / out_a,
        g: (src.g * src.a + dst.g * dst.a * inv) / out_a,
        b: (src.b * src.a + dst.b * dst.a * inv) / out_a,
        a: out_a,
    }
}
