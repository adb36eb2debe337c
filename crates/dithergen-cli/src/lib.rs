//! Dithergen CLI library.
//!
//! Terminal host for the generation core: it plays the timer, display and
//! input roles around `dithergen-core`.

pub mod commands;
pub mod config;
pub mod present;
pub mod terminal;
