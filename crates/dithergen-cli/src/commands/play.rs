//! Play command implementation
//!
//! Drives the generator at a fixed cadence and redraws the terminal after
//! every frame.

use anyhow::Result;
use colored::Colorize;
use log::{debug, info};
use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use dithergen_core::{advance, apply_action, render_frame, Raster};

use crate::config::HostConfig;
use crate::present::{self, CURSOR_HOME};
use crate::terminal::{self, TerminalSession};

/// Run the play command
///
/// Stops early, with the cursor restored, on Ctrl-C.
///
/// # Arguments
/// * `config` - Resolved run configuration
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(config: &HostConfig) -> Result<ExitCode> {
    let mut params = config.initial_parameters()?;
    let mut raster = Raster::new();
    let frame_interval = Duration::from_secs_f64(1.0 / config.fps as f64);

    info!(
        "playing {} frames at {} fps (seed {}, evolve {})",
        config.frames, config.fps, params.seed, config.evolve
    );

    terminal::catch_interrupt()?;
    let mut session = TerminalSession::begin(io::stdout().lock())?;

    let mut deadline = Instant::now();
    let mut played = 0;
    for frame in 0..config.frames {
        if terminal::interrupted() {
            info!("interrupted before frame {}", frame);
            break;
        }
        for action in config.actions_at(frame) {
            apply_action(&mut params, action);
        }

        let label = params.info_label().bold().to_string();
        render_frame(&params, &mut raster);
        if let Some(tick) = advance(&mut params, config.evolve) {
            debug!("frame {}: {:?}", frame, tick);
        }

        let out = session.out();
        write!(
            out,
            "{}{}",
            CURSOR_HOME,
            present::render_with_label(&raster, &label)
        )?;
        out.flush()?;
        played += 1;

        deadline += frame_interval;
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        } else {
            // Running behind: drop the backlog instead of bursting
            deadline = now;
        }
    }
    drop(session);

    println!(
        "{} {} frames, final {}",
        "Done:".green().bold(),
        played,
        params.info_label()
    );
    Ok(ExitCode::SUCCESS)
}
