//! CLI command implementations

pub mod digest;
pub mod patterns;
pub mod play;
pub mod show;
