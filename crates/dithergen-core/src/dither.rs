//! Floyd-Steinberg error diffusion to 1-bit.
//!
//! The quantizer walks the buffer once in row-major order. Every neighbor it
//! writes to is either later in the same row or on the next row, so no pixel
//! is touched after it has been finalized and a single forward pass is enough.

/// Pixels strictly above this value quantize to on.
pub const THRESHOLD: u8 = 127;

/// Diffusion weights over 16: `(dx, dy, numerator)`.
pub const FLOYD_STEINBERG: [(isize, usize, i32); 4] = [
    (1, 0, 7),  // right
    (-1, 1, 3), // below-left
    (0, 1, 5),  // below
    (1, 1, 1),  // below-right
];

const DIVISOR: i32 = 16;

/// Quantize `pixels` (row-major, `width * height`) to 0/255 in place.
///
/// Each neighbor update is clamped to `[0, 255]` before being stored, so
/// later reads see the already clamped value. Neighbors outside the buffer
/// are skipped.
pub fn diffuse(pixels: &mut [u8], width: usize, height: usize) {
    debug_assert_eq!(pixels.len(), width * height);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = pixels[idx] as i32;
            let new = if old > THRESHOLD as i32 { 255 } else { 0 };
            pixels[idx] = new as u8;

            let error = old - new;
            if error == 0 {
                continue;
            }

            for &(dx, dy, weight) in FLOYD_STEINBERG.iter() {
                let nx = x as isize + dx;
                let ny = y + dy;
                if nx < 0 || nx as usize >= width || ny >= height {
                    continue;
                }
                let n_idx = ny * width + nx as usize;
                let value = pixels[n_idx] as i32 + (error * weight) / DIVISOR;
                pixels[n_idx] = value.clamp(0, 255) as u8;
            }
        }
    }
}
