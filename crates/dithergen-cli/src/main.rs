//! Dithergen CLI - terminal host for the procedural 1-bit animation
//!
//! This binary drives the generation core at a fixed cadence, maps scripted
//! actions onto parameter edits and draws frames in the terminal.

use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use dithergen_cli::commands;
use dithergen_cli::config::{HostConfig, ScheduledAction};
use dithergen_core::{GenerationParameters, PatternKind};

/// Dithergen - procedural gradients, dithered to one bit
#[derive(Parser)]
#[command(name = "dithergen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate frames in the terminal at a fixed cadence
    Play {
        /// Path to a JSON run configuration
        #[arg(short, long)]
        config: Option<String>,

        /// Seed (default: from config, else the wall clock)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Number of frames to play
        #[arg(short, long)]
        frames: Option<u32>,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,

        /// Disable the evolution policy
        #[arg(long)]
        no_evolve: bool,

        /// Inject an action before a frame, e.g. `60=next_pattern` or `90=reseed:7` (repeatable)
        #[arg(short, long = "action", value_name = "FRAME=ACTION")]
        actions: Vec<ScheduledAction>,
    },

    /// Render a single frame from explicit parameters
    Show {
        /// Pattern kind name or index (see `dithergen patterns`)
        #[arg(short, long, default_value = "horizontal")]
        pattern: PatternKind,

        /// Pattern frequency (clamped to [0.1, 4.0])
        #[arg(short, long, default_value_t = 1.0)]
        frequency: f32,

        /// Noise overlay amount (clamped to [0, 1])
        #[arg(short, long, default_value_t = 0.05)]
        noise: f32,

        /// Invert the output
        #[arg(long)]
        invert: bool,

        /// Seed (default: the wall clock)
        #[arg(short, long)]
        seed: Option<u32>,
    },

    /// Produce frames headlessly and print per-frame BLAKE3 digests
    Digest {
        /// Path to a JSON run configuration
        #[arg(short, long)]
        config: Option<String>,

        /// Seed (default: from config, else the wall clock)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Number of frames to produce
        #[arg(short, long)]
        frames: Option<u32>,

        /// Inject an action before a frame, e.g. `60=next_pattern` or `90=reseed:7` (repeatable)
        #[arg(short, long = "action", value_name = "FRAME=ACTION")]
        actions: Vec<ScheduledAction>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List pattern kinds
    Patterns,
}

/// Load the config file if given, then apply command-line overrides.
///
/// Command-line actions run after any the file schedules for the same
/// frame. The seed is pinned here so every command reads the same value.
fn resolve_config(
    path: Option<&str>,
    seed: Option<u32>,
    frames: Option<u32>,
    fps: Option<u32>,
    no_evolve: bool,
    actions: Vec<ScheduledAction>,
) -> anyhow::Result<HostConfig> {
    let mut config = match path {
        Some(path) => HostConfig::load(Path::new(path))?,
        None => HostConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(frames) = frames {
        config.frames = frames;
    }
    if let Some(fps) = fps {
        config.fps = fps;
    }
    if no_evolve {
        config.evolve = false;
    }
    config.actions.extend(actions);
    config.validate()?;
    config.pin_seed();
    Ok(config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            config,
            seed,
            frames,
            fps,
            no_evolve,
            actions,
        } => resolve_config(config.as_deref(), seed, frames, fps, no_evolve, actions)
            .and_then(|config| commands::play::run(&config)),
        Commands::Show {
            pattern,
            frequency,
            noise,
            invert,
            seed,
        } => {
            let mut params =
                GenerationParameters::new(seed.unwrap_or_else(dithergen_cli::config::clock_seed));
            params.pattern_kind = pattern;
            params.set_frequency(frequency);
            params.set_noise_amount(noise);
            params.invert = invert;
            commands::show::run(&params)
        }
        Commands::Digest {
            config,
            seed,
            frames,
            actions,
            json,
        } => resolve_config(config.as_deref(), seed, frames, None, false, actions)
            .and_then(|config| commands::digest::run(&config, json)),
        Commands::Patterns => commands::patterns::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
