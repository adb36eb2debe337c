//! Spiral pattern.

use std::f32::consts::TAU;

/// Radial turns added per unit of distance from the center.
const TWIST: f32 = 10.0;

/// `(atan2(dy, dx) + dist * TWIST) mod 2π`, normalized to `[0, 1)`.
#[inline]
pub fn spiral(nx: f32, ny: f32) -> f32 {
    let dx = nx - 0.5;
    let dy = ny - 0.5;
    let angle = dy.atan2(dx);
    let dist = (dx * dx + dy * dy).sqrt();
    (angle + dist * TWIST).rem_euclid(TAU) / TAU
}
