//! Stateless hash noise.
//!
//! Every sample is a pure function of `(x, y, seed)`; there is no permutation
//! table to build, so the field can be sampled at arbitrary integer
//! coordinates without setup cost.

const X_PRIME: u32 = 374_761_393;
const Y_PRIME: u32 = 668_265_263;
const MIX_PRIME: u32 = 1_274_126_177;

/// Sample the hash noise field. Returns a byte in `[0, 255]`.
#[inline]
pub fn noise(x: u32, y: u32, seed: u32) -> u8 {
    let mut hash = x
        .wrapping_mul(X_PRIME)
        .wrapping_add(y.wrapping_mul(Y_PRIME))
        .wrapping_add(seed);
    hash = (hash ^ (hash >> 13)).wrapping_mul(MIX_PRIME);
    ((hash ^ (hash >> 16)) & 0xFF) as u8
}

/// Sample the hash noise field normalized to `[0, 1]`.
#[inline]
pub fn noise_unit(x: u32, y: u32, seed: u32) -> f32 {
    noise(x, y, seed) as f32 / 255.0
}
