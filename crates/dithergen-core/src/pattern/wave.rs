//! Periodic patterns built on the waveform table.

use crate::waveform::{angle_index, waveform, waveform_unit, AMPLITUDE, QUARTER_PERIOD, TABLE_LEN};

/// Table steps covered by the full `[0, 1)` span at frequency 1.
const WAVE_SPAN: f32 = TABLE_LEN as f32;
/// Interference samples each axis at half the wave span.
const INTERFERENCE_SPAN: f32 = WAVE_SPAN / 2.0;

/// Waveform along x.
#[inline]
pub fn sine(nx: f32, frequency: f32) -> f32 {
    waveform_unit(nx * WAVE_SPAN * frequency)
}

/// Waveform along y, advanced by a quarter period.
#[inline]
pub fn cosine(ny: f32, frequency: f32) -> f32 {
    waveform_unit(ny * WAVE_SPAN * frequency + QUARTER_PERIOD)
}

/// Product of two waveforms, rescaled back to the table amplitude.
///
/// Integer division truncates toward zero, so the product lands in
/// `[-64, 64]` before the remap to `[0, 1]`.
#[inline]
pub fn interference(nx: f32, ny: f32, frequency: f32) -> f32 {
    let wave1 = waveform(angle_index(nx * INTERFERENCE_SPAN * frequency)) as i32;
    let wave2 = waveform(angle_index(ny * INTERFERENCE_SPAN * frequency)) as i32;
    ((wave1 * wave2) / AMPLITUDE + AMPLITUDE) as f32 / (2 * AMPLITUDE) as f32
}
