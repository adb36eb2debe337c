//! Pattern field evaluation.
//!
//! A pattern maps normalized pixel coordinates to an intensity in `[0, 1]`.
//! The set of patterns is closed: [`PatternKind`] enumerates every field the
//! generator can draw, and [`sample`] applies the shared post-processing
//! (noise overlay, clamp, invert) on top of the selected field.

mod checker;
mod gradient;
mod spiral;
mod wave;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DithergenError;
use crate::noise::{noise, noise_unit};
use crate::params::GenerationParameters;
use crate::raster::{HEIGHT, WIDTH};

/// Weight kept by the base pattern when the noise overlay is enabled.
pub const PATTERN_WEIGHT: f32 = 0.7;
/// Weight given to the noise overlay when enabled.
pub const NOISE_WEIGHT: f32 = 0.3;
/// Extra coordinate scale applied to overlay lookups on top of `noise_amount`.
pub const NOISE_OVERLAY_SCALE: f32 = 1.0;

/// The closed set of procedural fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Left to right ramp.
    Horizontal,
    /// Top to bottom ramp.
    Vertical,
    /// Distance from the center.
    Radial,
    /// Top-left to bottom-right ramp.
    Diagonal,
    /// Waveform along x.
    SineWave,
    /// Waveform along y, shifted a quarter period.
    CosineWave,
    /// Product of x and y waveforms.
    Interference,
    /// Parity bands on x XOR y.
    Checkerboard,
    /// Raw hash noise.
    Noise,
    /// Angle plus scaled radius around the center.
    Spiral,
}

impl PatternKind {
    /// All kinds in index order.
    pub const ALL: [PatternKind; 10] = [
        PatternKind::Horizontal,
        PatternKind::Vertical,
        PatternKind::Radial,
        PatternKind::Diagonal,
        PatternKind::SineWave,
        PatternKind::CosineWave,
        PatternKind::Interference,
        PatternKind::Checkerboard,
        PatternKind::Noise,
        PatternKind::Spiral,
    ];

    /// Number of pattern kinds.
    pub const COUNT: u32 = Self::ALL.len() as u32;

    /// Stable numeric index (0-9).
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Kind for an arbitrary number, wrapped modulo [`Self::COUNT`].
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }

    /// Next kind, wrapping after the last.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous kind, wrapping before the first.
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Horizontal => "horizontal",
            PatternKind::Vertical => "vertical",
            PatternKind::Radial => "radial",
            PatternKind::Diagonal => "diagonal",
            PatternKind::SineWave => "sine_wave",
            PatternKind::CosineWave => "cosine_wave",
            PatternKind::Interference => "interference",
            PatternKind::Checkerboard => "checkerboard",
            PatternKind::Noise => "noise",
            PatternKind::Spiral => "spiral",
        }
    }

    /// Raw field value before overlay, clamp and invert.
    ///
    /// `nx`/`ny` are normalized coordinates; `x`/`y` are the pixel
    /// coordinates they were derived from (needed by the noise field).
    pub fn field(self, x: u32, y: u32, nx: f32, ny: f32, params: &GenerationParameters) -> f32 {
        let frequency = params.frequency;
        match self {
            PatternKind::Horizontal => gradient::horizontal(nx),
            PatternKind::Vertical => gradient::vertical(ny),
            PatternKind::Radial => gradient::radial(nx, ny),
            PatternKind::Diagonal => gradient::diagonal(nx, ny),
            PatternKind::SineWave => wave::sine(nx, frequency),
            PatternKind::CosineWave => wave::cosine(ny, frequency),
            PatternKind::Interference => wave::interference(nx, ny, frequency),
            PatternKind::Checkerboard => checker::checkerboard(nx, ny, frequency),
            PatternKind::Noise => noise_unit(x, y, params.seed),
            PatternKind::Spiral => spiral::spiral(nx, ny),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = DithergenError;

    /// Accepts a snake-case name (`sine_wave`, `sine-wave`) or an index (`4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        if let Ok(index) = normalized.parse::<u32>() {
            if index < Self::COUNT {
                return Ok(Self::from_index(index));
            }
            return Err(DithergenError::UnknownPatternKind(s.to_string()));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| DithergenError::UnknownPatternKind(s.to_string()))
    }
}

/// Evaluate pixel `(x, y)` to a normalized intensity in `[0, 1]`.
///
/// Applies the noise overlay when `noise_amount > 0`, then clamps, then
/// inverts if requested.
pub fn sample(x: u32, y: u32, params: &GenerationParameters) -> f32 {
    let nx = x as f32 / WIDTH as f32;
    let ny = y as f32 / HEIGHT as f32;

    let mut value = params.pattern_kind.field(x, y, nx, ny, params);

    if params.noise_amount > 0.0 {
        let scale = params.noise_amount * NOISE_OVERLAY_SCALE;
        let overlay = noise(
            (x as f32 * scale) as u32,
            (y as f32 * scale) as u32,
            params.seed,
        ) as f32
            / 255.0;
        value = value * PATTERN_WEIGHT + overlay * NOISE_WEIGHT;
    }

    if value.is_nan() {
        value = 0.0;
    }
    value = value.clamp(0.0, 1.0);

    if params.invert {
        value = 1.0 - value;
    }
    value
}

/// Evaluate pixel `(x, y)` to an 8-bit raster intensity.
#[inline]
pub fn evaluate(x: u32, y: u32, params: &GenerationParameters) -> u8 {
    (sample(x, y, params) * 255.0) as u8
}
