//! Fixed-length pixel buffer
//!
//! Holds the color of every LED on the strip. The length is chosen once at
//! construction (up to the `MAX_LEDS` capacity) and never changes; index `i`
//! always addresses LED `i`.

use heapless::Vec;

use crate::{
    color::{Rgb, fade_toward, fill_segments},
    error::StripError,
};

/// Number of supported brightness steps (`0.1` to `1.0`)
const BRIGHTNESS_STEPS: usize = 10;

/// `trunc(B^(255 k / 9))` for `k` in `0..10`, `B = e^(ln 255 / 255)`
const BRIGHTNESS_CURVE: [u8; BRIGHTNESS_STEPS] = [1, 1, 3, 6, 11, 21, 40, 74, 137, 255];

/// One of the ten perceptual brightness steps
///
/// Level `k` (0-based) scales channels by `B^(255 k / 9) / 255` where
/// `B = e^(ln 255 / 255)`, truncated to an integer first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    pub const FULL: Self = Self(BRIGHTNESS_STEPS as u8 - 1);

    /// Match a factor against `0.1, 0.2, ..., 1.0`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_factor(factor: f32) -> Result<Self, StripError> {
        let scaled = factor * BRIGHTNESS_STEPS as f32;
        let step = libm::roundf(scaled);
        if !(1.0..=BRIGHTNESS_STEPS as f32).contains(&step) || libm::fabsf(scaled - step) > 1e-3
        {
            return Err(StripError::UnsupportedBrightnessLevel);
        }
        Ok(Self(step as u8 - 1))
    }

    /// Level by zero-based index, `0..=9`
    pub fn from_index(index: u8) -> Result<Self, StripError> {
        if usize::from(index) >= BRIGHTNESS_STEPS {
            return Err(StripError::UnsupportedBrightnessLevel);
        }
        Ok(Self(index))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Point on the exponential curve, `1..=255`
    pub const fn curve(self) -> u8 {
        BRIGHTNESS_CURVE[self.0 as usize]
    }

    /// Scale one color by this level, truncating
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn apply(self, color: Rgb) -> Rgb {
        let curve = self.curve() as u16;
        Rgb {
            r: (color.r as u16 * curve / 255) as u8,
            g: (color.g as u16 * curve / 255) as u8,
            b: (color.b as u16 * curve / 255) as u8,
        }
    }
}

/// The colors of every LED on the strip
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    pixels: Vec<Rgb, MAX_LEDS>,
    background: Rgb,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a buffer of `num_leds` pixels filled with `background`
    pub fn new(num_leds: usize, background: Rgb) -> Result<Self, StripError> {
        let mut pixels = Vec::new();
        if num_leds == 0 || pixels.resize(num_leds, background).is_err() {
            return Err(StripError::InvalidLedCount {
                requested: num_leds,
                capacity: MAX_LEDS,
            });
        }
        Ok(Self { pixels, background })
    }

    /// Number of LEDs
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`; a buffer holds at least one pixel
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub const fn background(&self) -> Rgb {
        self.background
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Write a single pixel
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), StripError> {
        let len = self.pixels.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange { index, len })?;
        *pixel = color;
        Ok(())
    }

    /// Set every pixel to `color`
    pub fn fill_all(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Reset every pixel to the background color
    pub fn clear(&mut self) {
        self.fill_all(self.background);
    }

    /// Copy one color per pixel; `colors` must match the strip length
    pub fn fill_custom(&mut self, colors: &[Rgb]) -> Result<(), StripError> {
        if colors.len() != self.pixels.len() {
            return Err(StripError::LengthMismatch {
                expected: self.pixels.len(),
                actual: colors.len(),
            });
        }
        self.pixels.copy_from_slice(colors);
        Ok(())
    }

    /// Paint consecutive runs of `segment_length` pixels
    ///
    /// Run `k` takes `values[k]`; runs beyond the end of `values` get the
    /// background. The last run may be shorter.
    pub fn fill_segments(
        &mut self,
        segment_length: usize,
        values: &[Rgb],
    ) -> Result<(), StripError> {
        if segment_length == 0 {
            return Err(StripError::ZeroSegmentLength);
        }
        fill_segments(&mut self.pixels, segment_length, values, self.background);
        Ok(())
    }

    /// One fade step of every pixel toward `target`
    pub fn fade_toward(&mut self, target: Rgb, rate: u8) {
        fade_toward(&mut self.pixels, target, rate);
    }

    /// Copy of this buffer scaled by a brightness factor
    ///
    /// `factor` must be one of `0.1, 0.2, ..., 1.0`.
    pub fn apply_brightness(&self, factor: f32) -> Result<Self, StripError> {
        Ok(self.with_brightness(BrightnessLevel::from_factor(factor)?))
    }

    /// Copy of this buffer scaled by `level`
    #[must_use]
    pub fn with_brightness(&self, level: BrightnessLevel) -> Self {
        Self {
            pixels: self.pixels.iter().map(|&color| level.apply(color)).collect(),
            background: self.background,
        }
    }
}
