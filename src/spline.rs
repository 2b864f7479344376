//! Catmull-Rom spline math for stroke smoothing
//!
//! The smoother feeds the last four accepted stroke samples in as
//! control points; the interpolated curve runs between p1 and p2 and
//! passes through both.

use glam::Vec2;

/// Interpolated position on a Catmull-Rom spline at `t` in [0, 1].
///
/// Endpoint property: `t == 0` yields exactly `p1`, `t == 1` exactly `p2`.
pub fn catmull_rom_position(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let a = 2.0 * p1;
    let b = p2 - p0;
    let c = 2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3;
    let d = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    0.5 * (a + b * t + c * t * t + d * t * t * t)
}

/// Sample one segment into `subdivisions + 1` points from p1 to p2
pub fn sample_segment(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    subdivisions: u32,
) -> Vec<Vec2> {
    let steps = subdivisions.max(1);
    let mut points = Vec::with_capacity(steps as usize + 1);
    points.push(p1);
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        points.push(catmull_rom_position(t, p0, p1, p2, p3));
    }
    points
}
