//! Unsupervised parameter evolution.
//!
//! Every [`EVOLUTION_INTERVAL`] frames the parameters are perturbed using a
//! short-lived xorshift stream seeded from `seed + frame_counter`, so the
//! animation is reproducible for a given seed.

use log::debug;

use crate::params::{clamp_frequency, clamp_noise_amount, GenerationParameters};
use crate::pattern::PatternKind;
use crate::rng::XorShift32;

/// Frames between evolution ticks.
pub const EVOLUTION_INTERVAL: u32 = 30;
/// Chance (percent) of switching to a random pattern kind on a tick.
pub const PATTERN_CHANGE_PERCENT: u32 = 20;
/// Chance (percent) of toggling inversion on a tick.
pub const INVERT_TOGGLE_PERCENT: u32 = 10;

/// Lower bound of the resampled frequency.
pub const FREQUENCY_BASE: f32 = 0.5;
/// Resampled frequency steps: `FREQUENCY_BASE + (draw % 100) / 50`.
const FREQUENCY_BUCKETS: u32 = 100;
const FREQUENCY_DIVISOR: f32 = 50.0;
/// Resampled noise amount: `(draw % 50) / 1000`.
const NOISE_BUCKETS: u32 = 50;
const NOISE_DIVISOR: f32 = 1000.0;

/// What a single evolution tick did.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionTick {
    /// New pattern kind, if the pattern check passed. May equal the old kind.
    pub pattern_kind: Option<PatternKind>,
    /// Resampled frequency.
    pub frequency: f32,
    /// Resampled noise amount.
    pub noise_amount: f32,
    /// Whether inversion was toggled.
    pub toggled_invert: bool,
}

/// Whether `frame_counter` falls on an evolution tick.
#[inline]
pub fn is_tick(frame_counter: u32) -> bool {
    frame_counter % EVOLUTION_INTERVAL == 0
}

/// Run the evolution policy for the current (already incremented) frame
/// counter. Returns `None` and leaves `params` untouched off-tick.
///
/// Draw order is fixed: pattern check, pattern pick (only when the check
/// passed), frequency, noise amount, invert check.
pub fn apply_evolution(params: &mut GenerationParameters) -> Option<EvolutionTick> {
    if !is_tick(params.frame_counter) {
        return None;
    }

    let mut rng = XorShift32::new(params.seed.wrapping_add(params.frame_counter));

    let pattern_kind = if rng.chance(PATTERN_CHANGE_PERCENT) {
        Some(PatternKind::from_index(rng.next_value()))
    } else {
        None
    };

    let frequency = clamp_frequency(
        FREQUENCY_BASE + (rng.next_value() % FREQUENCY_BUCKETS) as f32 / FREQUENCY_DIVISOR,
    );
    let noise_amount =
        clamp_noise_amount((rng.next_value() % NOISE_BUCKETS) as f32 / NOISE_DIVISOR);
    let toggled_invert = rng.chance(INVERT_TOGGLE_PERCENT);

    if let Some(kind) = pattern_kind {
        params.pattern_kind = kind;
    }
    params.frequency = frequency;
    params.noise_amount = noise_amount;
    if toggled_invert {
        params.invert = !params.invert;
    }

    let tick = EvolutionTick {
        pattern_kind,
        frequency,
        noise_amount,
        toggled_invert,
    };
    debug!(
        "evolution tick at frame {}: pattern={:?} frequency={:.2} noise={:.3} invert_toggled={}",
        params.frame_counter, tick.pattern_kind, frequency, noise_amount, toggled_invert
    );
    Some(tick)
}
