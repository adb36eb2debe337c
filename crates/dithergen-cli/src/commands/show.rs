//! Show command implementation
//!
//! Produces a single frame from explicit parameters and prints it.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use dithergen_core::{render_frame, GenerationParameters, Raster};

use crate::present;

/// Run the show command
///
/// # Returns
/// Exit code: 0 success
pub fn run(params: &GenerationParameters) -> Result<ExitCode> {
    let mut raster = Raster::new();
    render_frame(params, &mut raster);

    println!(
        "{} {} (seed {}, noise {:.3}{})",
        params.info_label().bold(),
        params.pattern_kind.to_string().cyan(),
        params.seed,
        params.noise_amount,
        if params.invert { ", inverted" } else { "" }
    );
    print!("{}", present::render(&raster));
    Ok(ExitCode::SUCCESS)
}
