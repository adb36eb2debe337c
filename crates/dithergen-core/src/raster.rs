//! Fixed-size intensity raster.

use crate::dither;
use crate::params::GenerationParameters;
use crate::pattern::evaluate;

/// Raster width in pixels.
pub const WIDTH: u32 = 128;
/// Raster height in pixels.
pub const HEIGHT: u32 = 64;
/// Total number of pixels.
pub const PIXEL_COUNT: usize = (WIDTH * HEIGHT) as usize;

/// Value of a lit pixel after quantization.
pub const ON: u8 = 255;
/// Value of a dark pixel after quantization.
pub const OFF: u8 = 0;

/// Which representation the raster currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// 0-255 intensities straight from the pattern evaluator.
    Continuous,
    /// Every pixel is [`ON`] or [`OFF`].
    Binary,
}

/// A `WIDTH` x `HEIGHT` grid of 8-bit samples, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Box<[u8; PIXEL_COUNT]>,
    tone: Tone,
}

impl Raster {
    /// Create a dark continuous-tone raster.
    pub fn new() -> Self {
        Self {
            pixels: Box::new([OFF; PIXEL_COUNT]),
            tone: Tone::Continuous,
        }
    }

    #[inline]
    fn index(x: u32, y: u32) -> usize {
        (y * WIDTH + x) as usize
    }

    /// Current representation.
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Get a pixel.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[Self::index(x, y)]
    }

    /// Set a pixel. Marks the raster continuous-tone.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        self.pixels[Self::index(x, y)] = value;
        self.tone = Tone::Continuous;
    }

    /// Whether the pixel would be drawn lit (`> 127`).
    #[inline]
    pub fn is_on(&self, x: u32, y: u32) -> bool {
        self.get(x, y) > dither::THRESHOLD
    }

    /// Overwrite every pixel with the evaluated pattern field.
    pub fn fill(&mut self, params: &GenerationParameters) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                self.pixels[Self::index(x, y)] = evaluate(x, y, params);
            }
        }
        self.tone = Tone::Continuous;
    }

    /// Quantize to 1-bit by error diffusion, consuming the continuous-tone
    /// contents in place. After this call every pixel is [`ON`] or [`OFF`]
    /// and the original intensities are gone.
    pub fn dither_in_place(&mut self) {
        dither::diffuse(&mut self.pixels[..], WIDTH as usize, HEIGHT as usize);
        self.tone = Tone::Binary;
    }

    /// True when every pixel is exactly [`ON`] or [`OFF`].
    pub fn is_binary(&self) -> bool {
        self.pixels.iter().all(|&p| p == ON || p == OFF)
    }

    /// Raw row-major bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels[..]
    }

    /// Mean intensity in `[0, 255]`.
    pub fn mean(&self) -> f64 {
        let sum: u64 = self.pixels.iter().map(|&p| p as u64).sum();
        sum as f64 / PIXEL_COUNT as f64
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p > dither::THRESHOLD).count()
    }

    /// BLAKE3 hash of the raster bytes, lowercase hex.
    pub fn digest(&self) -> String {
        blake3::hash(self.as_bytes()).to_hex().to_string()
    }
}

impl Default for Raster {
    fn default() -> Self {
        Self::new()
    }
}
