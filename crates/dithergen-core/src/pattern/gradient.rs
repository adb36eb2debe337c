//! Linear and radial ramps.

/// Scale that brings the corner distance `sqrt(0.5)` up to ~1.
const RADIAL_NORMALIZE: f32 = 1.414;

/// Left to right: `nx`.
#[inline]
pub fn horizontal(nx: f32) -> f32 {
    nx
}

/// Top to bottom: `ny`.
#[inline]
pub fn vertical(ny: f32) -> f32 {
    ny
}

/// Distance from `(0.5, 0.5)`, reaching ~1 at the corners.
#[inline]
pub fn radial(nx: f32, ny: f32) -> f32 {
    let dx = nx - 0.5;
    let dy = ny - 0.5;
    (dx * dx + dy * dy).sqrt() * RADIAL_NORMALIZE
}

/// Mean of both axes.
#[inline]
pub fn diagonal(nx: f32, ny: f32) -> f32 {
    (nx + ny) / 2.0
}
