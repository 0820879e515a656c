//! Per-pixel LBP code computation.
use crate::image::ImageU8;
use std::f64::consts::TAU;

/// Computes the rotation-variant LBP code for the pixel at `(x, y)`.
///
/// `points` neighbors are sampled on a circle of `radius` pixels around the
/// center, each rounded to the nearest integer pixel. Bit `i` of the result is
/// set when sample `i` is at least as bright as the center, so the code lies
/// in `[0, 2^points)`.
///
/// Every rounded sample coordinate must be in-bounds. Callers scanning a whole
/// image guarantee this by keeping `(x, y)` at least `radius.ceil()` pixels
/// away from each edge.
pub fn lbp_code(image: &ImageU8, x: usize, y: usize, points: u32, radius: f64) -> u32 {
    debug_assert!(points >= 1 && points <= 30, "invalid point count {points}");
    debug_assert!(radius > 0.0, "invalid radius {radius}");
    let center = image.get(x, y);
    let mut code = 0u32;
    for i in 0..points {
        let theta = TAU * f64::from(i) / f64::from(points);
        let sx = (x as f64 + radius * theta.sin()).round() as usize;
        let sy = (y as f64 + radius * theta.cos()).round() as usize;
        if image.get(sx, sy) >= center {
            code |= 1 << i;
        }
    }
    code
}
