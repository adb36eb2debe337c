//! Checkerboard pattern.

/// Bands per unit span at frequency 1.
const BANDS: f32 = 8.0;

/// XOR of the parity of the x and y bands. Always exactly 0 or 1.
#[inline]
pub fn checkerboard(nx: f32, ny: f32, frequency: f32) -> f32 {
    let check_x = band(nx * BANDS * frequency);
    let check_y = band(ny * BANDS * frequency);
    if (check_x ^ check_y) == 1 {
        1.0
    } else {
        0.0
    }
}

#[inline]
fn band(v: f32) -> u32 {
    ((v as u32) as u8 & 1) as u32
}
