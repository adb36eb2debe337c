//! Frame production and discrete user edits.
//!
//! These are the entry points a host calls: [`produce_frame`] once per timer
//! tick, [`apply_action`] whenever the user presses a button. Both take
//! exclusive borrows, so a host cannot interleave them mid-frame.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::DithergenError;
use crate::evolve::{apply_evolution, EvolutionTick};
use crate::params::{clamp_frequency, GenerationParameters, FREQUENCY_STEP};
use crate::pattern::PatternKind;
use crate::raster::Raster;
use crate::rng::sanitize_seed;

/// Reseed frequency: `RESEED_FREQUENCY_BASE + (seed % 100) / 50`.
const RESEED_FREQUENCY_BASE: f32 = 0.5;

/// Discrete edits a host maps its input events to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    /// Cycle to the next pattern kind.
    NextPattern,
    /// Cycle to the previous pattern kind.
    PrevPattern,
    /// Raise frequency by one step.
    IncreaseFrequency,
    /// Lower frequency by one step.
    DecreaseFrequency,
    /// Replace the seed and derive pattern and frequency from it.
    Reseed(u32),
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::NextPattern => f.write_str("next_pattern"),
            UserAction::PrevPattern => f.write_str("prev_pattern"),
            UserAction::IncreaseFrequency => f.write_str("increase_frequency"),
            UserAction::DecreaseFrequency => f.write_str("decrease_frequency"),
            UserAction::Reseed(seed) => write!(f, "reseed:{}", seed),
        }
    }
}

impl FromStr for UserAction {
    type Err = DithergenError;

    /// Parses `next_pattern`, `prev_pattern`, `increase_frequency`,
    /// `decrease_frequency` or `reseed:<u32>`. Dashes are accepted for
    /// underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "next_pattern" => Ok(UserAction::NextPattern),
            "prev_pattern" => Ok(UserAction::PrevPattern),
            "increase_frequency" => Ok(UserAction::IncreaseFrequency),
            "decrease_frequency" => Ok(UserAction::DecreaseFrequency),
            other => other
                .strip_prefix("reseed:")
                .and_then(|seed| seed.parse::<u32>().ok())
                .map(UserAction::Reseed)
                .ok_or_else(|| DithergenError::UnknownAction(s.to_string())),
        }
    }
}

/// Fill `raster` from `params` and dither it in place, without touching
/// the parameters.
pub fn render_frame(params: &GenerationParameters, raster: &mut Raster) {
    raster.fill(params);
    raster.dither_in_place();
}

/// Advance the frame counter and, if `evolve` is set, run the evolution
/// policy for the new counter value.
pub fn advance(params: &mut GenerationParameters, evolve: bool) -> Option<EvolutionTick> {
    params.frame_counter = params.frame_counter.wrapping_add(1);
    if evolve {
        apply_evolution(params)
    } else {
        None
    }
}

/// Produce one frame.
///
/// Fills `raster` from the current parameters, dithers it in place, then
/// advances the frame counter and runs the evolution policy for the next
/// frame. Returns the evolution tick if one fired.
pub fn produce_frame(
    params: &mut GenerationParameters,
    raster: &mut Raster,
) -> Option<EvolutionTick> {
    render_frame(params, raster);
    let tick = advance(params, true);
    trace!(
        "frame {} produced ({} lit)",
        params.frame_counter,
        raster.lit_count()
    );
    tick
}

/// Apply a discrete user edit. Frequency stays within its policy range.
pub fn apply_action(params: &mut GenerationParameters, action: UserAction) {
    match action {
        UserAction::NextPattern => params.pattern_kind = params.pattern_kind.next(),
        UserAction::PrevPattern => params.pattern_kind = params.pattern_kind.prev(),
        UserAction::IncreaseFrequency => {
            params.frequency = clamp_frequency(params.frequency + FREQUENCY_STEP);
        }
        UserAction::DecreaseFrequency => {
            params.frequency = clamp_frequency(params.frequency - FREQUENCY_STEP);
        }
        UserAction::Reseed(seed) => {
            let seed = sanitize_seed(seed);
            params.seed = seed;
            params.pattern_kind = PatternKind::from_index(seed);
            params.frequency =
                clamp_frequency(RESEED_FREQUENCY_BASE + (seed % 100) as f32 / 50.0);
        }
    }
    debug!(
        "applied {}: pattern={} frequency={:.1}",
        action, params.pattern_kind, params.frequency
    );
}
