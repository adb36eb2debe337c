//! Coarse sine lookup used by the periodic patterns.
//!
//! One period spans the first 60 entries; the trailing 4 entries are zero
//! padding so that a 6-bit index is always in bounds.

/// Peak amplitude of [`SINE_TABLE`].
pub const AMPLITUDE: i32 = 64;

/// Number of table entries addressed by a wrapped angle.
pub const TABLE_LEN: usize = 64;

/// Angle offset that shifts a lookup by a quarter period.
pub const QUARTER_PERIOD: f32 = 16.0;

/// Sine sampled at 60 steps, amplitude ±64, padded to 64 entries.
pub const SINE_TABLE: [i8; TABLE_LEN] = [
    0, 6, 12, 18, 24, 30, 36, 41, 46, 50, 54, 57, 60, 62, 63, 64, //
    63, 62, 60, 57, 54, 50, 46, 41, 36, 30, 24, 18, 12, 6, 0, -6, //
    -12, -18, -24, -30, -36, -41, -46, -50, -54, -57, -60, -62, -63, -64, //
    -63, -62, -60, -57, -54, -50, -46, -41, -36, -30, -24, -18, -12, -6, 0, 0, 0, 0,
];

/// Look up the waveform at an 8-bit angle (wrapped to the table length).
#[inline]
pub fn waveform(angle: u8) -> i8 {
    SINE_TABLE[angle as usize & (TABLE_LEN - 1)]
}

/// Convert a non-negative float angle into a wrapping 8-bit table index.
///
/// The value is truncated toward zero and wraps modulo 256, so arbitrarily
/// large frequencies keep cycling through the table. Negative and NaN
/// inputs collapse to zero.
#[inline]
pub fn angle_index(angle: f32) -> u8 {
    (angle as u32) as u8
}

/// Waveform value remapped from `[-64, 64]` to `[0, 1]`.
#[inline]
pub fn waveform_unit(angle: f32) -> f32 {
    (waveform(angle_index(angle)) as i32 + AMPLITUDE) as f32 / (2 * AMPLITUDE) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_range() {
        for &v in SINE_TABLE.iter() {
            assert!((-64..=64).contains(&(v as i32)));
        }
    }

    #[test]
    fn test_table_landmarks() {
        assert_eq!(waveform(0), 0);
        assert_eq!(waveform(15), 64);
        assert_eq!(waveform(30), 0);
        assert_eq!(waveform(45), -64);
        for i in 60..64 {
            assert_eq!(waveform(i), 0, "padding entry {} must be zero", i);
        }
    }

    #[test]
    fn test_lookup_wraps_modulo_64() {
        for angle in 0..=255u8 {
            assert_eq!(waveform(angle), SINE_TABLE[(angle % 64) as usize]);
        }
    }

    #[test]
    fn test_angle_index_wraps() {
        assert_eq!(angle_index(0.0), 0);
        assert_eq!(angle_index(63.9), 63);
        assert_eq!(angle_index(256.0), 0);
        assert_eq!(angle_index(300.5), 44);
        assert_eq!(angle_index(-3.0), 0);
        assert_eq!(angle_index(f32::NAN), 0);
    }

    #[test]
    fn test_waveform_unit_range() {
        for i in 0..512 {
            let v = waveform_unit(i as f32 * 0.75);
            assert!((0.0..=1.0).contains(&v));
        }
        assert_eq!(waveform_unit(15.0), 1.0);
        assert_eq!(waveform_unit(45.0), 0.0);
        assert_eq!(waveform_unit(0.0), 0.5);
    }
}
