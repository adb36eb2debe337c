//! Generation parameters shared by the evaluator, quantizer and evolution.

use serde::{Deserialize, Serialize};

use crate::error::DithergenError;
use crate::pattern::PatternKind;
use crate::rng::sanitize_seed;

/// Lowest frequency reachable through user edits.
pub const MIN_FREQUENCY: f32 = 0.1;
/// Highest frequency reachable through user edits.
pub const MAX_FREQUENCY: f32 = 4.0;
/// Frequency change per user nudge.
pub const FREQUENCY_STEP: f32 = 0.1;

/// Frequency used by freshly initialized parameters.
pub const DEFAULT_FREQUENCY: f32 = 1.0;
/// Noise amount used by freshly initialized parameters.
pub const DEFAULT_NOISE_AMOUNT: f32 = 0.05;

/// Mutable state that drives frame generation.
///
/// Owned by the caller and passed by reference to every core operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Base entropy for the noise field and the evolution stream.
    pub seed: u32,
    /// Active pattern function.
    pub pattern_kind: PatternKind,
    /// Spatial scale for periodic patterns.
    pub frequency: f32,
    /// Noise overlay enable and coordinate scale.
    pub noise_amount: f32,
    /// Flip polarity after clamping.
    pub invert: bool,
    /// Number of frames produced so far.
    pub frame_counter: u32,
}

impl GenerationParameters {
    /// Build default parameters from an externally supplied seed.
    ///
    /// A zero seed is replaced with [`crate::rng::DEFAULT_SEED`].
    pub fn new(seed: u32) -> Self {
        Self {
            seed: sanitize_seed(seed),
            pattern_kind: PatternKind::Horizontal,
            frequency: DEFAULT_FREQUENCY,
            noise_amount: DEFAULT_NOISE_AMOUNT,
            invert: false,
            frame_counter: 0,
        }
    }

    /// Set frequency, clamped to `[MIN_FREQUENCY, MAX_FREQUENCY]`.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = clamp_frequency(frequency);
    }

    /// Set noise amount, clamped to `[0, 1]`.
    pub fn set_noise_amount(&mut self, noise_amount: f32) {
        self.noise_amount = clamp_noise_amount(noise_amount);
    }

    /// Check externally supplied values (e.g. loaded from a config file)
    /// and return a copy with seed sanitized.
    pub fn validated(mut self) -> Result<Self, DithergenError> {
        if !self.frequency.is_finite() {
            return Err(DithergenError::InvalidParameter(format!(
                "frequency must be finite, got {}",
                self.frequency
            )));
        }
        if !(MIN_FREQUENCY..=MAX_FREQUENCY).contains(&self.frequency) {
            return Err(DithergenError::InvalidParameter(format!(
                "frequency must be in [{}, {}], got {}",
                MIN_FREQUENCY, MAX_FREQUENCY, self.frequency
            )));
        }
        if !self.noise_amount.is_finite() || !(0.0..=1.0).contains(&self.noise_amount) {
            return Err(DithergenError::InvalidParameter(format!(
                "noise_amount must be in [0, 1], got {}",
                self.noise_amount
            )));
        }
        self.seed = sanitize_seed(self.seed);
        Ok(self)
    }

    /// Short status line for the display overlay, e.g. `G:4 F:1.5`.
    pub fn info_label(&self) -> String {
        format!("G:{} F:{:.1}", self.pattern_kind.index(), self.frequency)
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Clamp a frequency into the policy range. NaN maps to the default.
pub fn clamp_frequency(frequency: f32) -> f32 {
    if frequency.is_nan() {
        return DEFAULT_FREQUENCY;
    }
    frequency.clamp(MIN_FREQUENCY, MAX_FREQUENCY)
}

/// Clamp a noise amount into `[0, 1]`. NaN disables the overlay.
pub fn clamp_noise_amount(noise_amount: f32) -> f32 {
    if noise_amount.is_nan() {
        return 0.0;
    }
    noise_amount.clamp(0.0, 1.0)
}
