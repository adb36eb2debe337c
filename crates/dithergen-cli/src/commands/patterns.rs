//! Patterns command implementation
//!
//! Lists the available pattern kinds.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use dithergen_core::PatternKind;

/// Run the patterns command
pub fn run() -> Result<ExitCode> {
    println!("{}", "Pattern kinds:".bold());
    for kind in PatternKind::ALL {
        println!("  {} {}", kind.index().to_string().cyan(), kind);
    }
    Ok(ExitCode::SUCCESS)
}
