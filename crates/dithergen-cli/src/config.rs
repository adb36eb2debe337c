//! Host run configuration.
//!
//! A run can be described in a JSON file and then overridden from the
//! command line:
//!
//! ```json
//! {
//!   "seed": 42,
//!   "frames": 300,
//!   "fps": 30,
//!   "evolve": true,
//!   "params": { "pattern_kind": "spiral", "frequency": 1.5 },
//!   "actions": [ { "frame": 60, "action": "next_pattern" } ]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use dithergen_core::{DithergenError, GenerationParameters, PatternKind, UserAction};
use serde::{Deserialize, Serialize};

/// Default number of frames for a run.
pub const DEFAULT_FRAMES: u32 = 300;
/// Default presentation cadence.
pub const DEFAULT_FPS: u32 = 30;
/// Highest accepted cadence.
pub const MAX_FPS: u32 = 120;

/// Overrides applied on top of freshly initialized parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_kind: Option<PatternKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_amount: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,
}

/// A user action to inject before a given frame is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduledAction {
    /// Zero-based index of the frame the action precedes.
    pub frame: u32,
    /// The action to apply.
    pub action: UserAction,
}

impl FromStr for ScheduledAction {
    type Err = DithergenError;

    /// Parses `<frame>=<action>`, e.g. `60=next_pattern` or `90=reseed:7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (frame, action) = s
            .split_once('=')
            .ok_or_else(|| DithergenError::UnknownAction(s.to_string()))?;
        let frame = frame
            .trim()
            .parse::<u32>()
            .map_err(|_| DithergenError::UnknownAction(s.to_string()))?;
        Ok(Self {
            frame,
            action: action.parse()?,
        })
    }
}

/// Full description of a host run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Seed; derived from the wall clock when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[serde(default = "default_frames")]
    pub frames: u32,
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Run the evolution policy. The frame counter advances either way.
    #[serde(default = "default_evolve")]
    pub evolve: bool,
    #[serde(default)]
    pub params: ParamOverrides,
    #[serde(default)]
    pub actions: Vec<ScheduledAction>,
}

fn default_frames() -> u32 {
    DEFAULT_FRAMES
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_evolve() -> bool {
    true
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frames: DEFAULT_FRAMES,
            fps: DEFAULT_FPS,
            evolve: true,
            params: ParamOverrides::default(),
            actions: Vec::new(),
        }
    }
}

impl HostConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse a config from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: HostConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that serde cannot express.
    ///
    /// Parameter overrides must already lie in their policy ranges; a config
    /// file is rejected rather than silently clamped.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 || self.fps > MAX_FPS {
            bail!("fps must be in 1..={}, got {}", MAX_FPS, self.fps);
        }
        self.parameters_for(self.seed.unwrap_or(0))?;
        Ok(())
    }

    /// Seed to use for this run.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// Resolve the seed once and store it, so every later reader of this
    /// config sees the same value.
    pub fn pin_seed(&mut self) -> u32 {
        let seed = self.resolved_seed();
        self.seed = Some(seed);
        seed
    }

    /// Build the initial parameters for the resolved seed.
    pub fn initial_parameters(&self) -> Result<GenerationParameters> {
        self.parameters_for(self.resolved_seed())
    }

    /// Build parameters from `seed`, apply the overrides, then validate.
    pub fn parameters_for(&self, seed: u32) -> Result<GenerationParameters> {
        let mut params = GenerationParameters::new(seed);
        if let Some(kind) = self.params.pattern_kind {
            params.pattern_kind = kind;
        }
        if let Some(frequency) = self.params.frequency {
            params.frequency = frequency;
        }
        if let Some(noise_amount) = self.params.noise_amount {
            params.noise_amount = noise_amount;
        }
        if let Some(invert) = self.params.invert {
            params.invert = invert;
        }
        params.validated().context("invalid params override")
    }

    /// Actions scheduled before `frame`, in file order.
    pub fn actions_at(&self, frame: u32) -> impl Iterator<Item = UserAction> + '_ {
        self.actions
            .iter()
            .filter(move |scheduled| scheduled.frame == frame)
            .map(|scheduled| scheduled.action)
    }
}

/// Seed from the wall clock, standing in for a device uptime counter.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(0)
}
