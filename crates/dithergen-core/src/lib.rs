//! Dithergen Core
//!
//! This crate provides the deterministic generation pipeline behind the
//! `dithergen` animated display: a continuous-tone pattern field is evaluated
//! per pixel, optionally blended with hash noise, quantized to 1-bit output by
//! error diffusion, and the generation parameters evolve on their own every
//! few frames.
//!
//! # Features
//!
//! - **Pattern Primitives**: Horizontal, vertical, radial, diagonal, sine,
//!   cosine, interference, checkerboard, noise and spiral fields
//! - **Noise**: Stateless integer hash noise keyed by `(x, y, seed)`
//! - **Quantizer**: In-place Floyd-Steinberg error diffusion to 1-bit
//! - **Evolution**: Seeded xorshift policy that perturbs parameters every 30 frames
//!
//! # Example
//!
//! ```
//! use dithergen_core::{produce_frame, apply_action, GenerationParameters, Raster, UserAction};
//!
//! let mut params = GenerationParameters::new(42);
//! let mut raster = Raster::new();
//!
//! apply_action(&mut params, UserAction::NextPattern);
//! produce_frame(&mut params, &mut raster);
//!
//! assert!(raster.is_binary());
//! assert_eq!(params.frame_counter, 1);
//! ```
//!
//! # Determinism
//!
//! - Same seed + same sequence of frames and actions = bit-identical rasters
//! - All randomness flows through the xorshift stream in [`rng`]
//! - [`Raster::digest`] hashes a frame with BLAKE3 for auditing

pub mod dither;
pub mod error;
pub mod evolve;
pub mod frame;
pub mod noise;
pub mod params;
pub mod pattern;
pub mod raster;
pub mod rng;
pub mod waveform;

// Re-export main types for convenience
pub use error::DithergenError;
pub use evolve::{apply_evolution, EvolutionTick, EVOLUTION_INTERVAL};
pub use frame::{advance, apply_action, produce_frame, render_frame, UserAction};
pub use params::GenerationParameters;
pub use pattern::{evaluate, sample, PatternKind};
pub use raster::{Raster, Tone, HEIGHT, PIXEL_COUNT, WIDTH};
pub use rng::XorShift32;
