//! The LED strip: pixel buffer, palette and configuration in one owner.

use rand::RngCore;

use crate::{
    OutputDriver,
    buffer::{BrightnessLevel, PixelBuffer},
    cancel::CancelToken,
    color::{Rgb, WHITE},
    effect::Effect,
    error::{RunError, StripError},
    frame_clock::{FrameClock, FrameSchedule, FrameTimer, RunSummary},
    palette::{Palette, PaletteName, PaletteParams, rotated},
};

/// Static strip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of LEDs, fixed for the strip's lifetime
    pub num_leds: usize,
    /// Output channel (pin, state machine, ...) as the driver understands it
    pub channel: u8,
    /// Color the buffer starts with and segments fall back to
    pub background: Rgb,
}

impl StripConfig {
    pub const fn new(num_leds: usize, channel: u8, background: Rgb) -> Self {
        Self {
            num_leds,
            channel,
            background,
        }
    }
}

/// An addressable LED strip
///
/// Owns its pixel buffer and working palette. Effects borrow the buffer
/// mutably for the span of one [`Strip::animate`] call.
pub struct Strip<const MAX_LEDS: usize, const PALETTE: usize> {
    config: StripConfig,
    buffer: PixelBuffer<MAX_LEDS>,
    palette: Palette<PALETTE>,
}

impl<const MAX_LEDS: usize, const PALETTE: usize> Strip<MAX_LEDS, PALETTE> {
    /// Create a strip filled with the configured background
    ///
    /// The palette starts as a single white entry.
    pub fn new(config: StripConfig) -> Result<Self, StripError> {
        let buffer = PixelBuffer::new(config.num_leds, config.background)?;
        let mut palette = Palette::new();
        palette.push(WHITE).map_err(|_| StripError::PaletteCapacity {
            requested: 1,
            capacity: PALETTE,
        })?;

        Ok(Self {
            config,
            buffer,
            palette,
        })
    }

    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn num_leds(&self) -> usize {
        self.buffer.len()
    }

    pub const fn buffer(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<MAX_LEDS> {
        &mut self.buffer
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    /// Replace the working palette; it must not be empty
    pub fn set_palette(&mut self, palette: Palette<PALETTE>) -> Result<(), StripError> {
        if palette.is_empty() {
            return Err(StripError::EmptyPalette);
        }
        self.palette = palette;
        Ok(())
    }

    /// Build a palette by name and make it the working palette
    pub fn define_palette<R: RngCore>(
        &mut self,
        name: &str,
        params: &PaletteParams,
        rng: &mut R,
    ) -> Result<(), StripError> {
        let palette = PaletteName::parse_from_str(name)?.build(params, rng)?;
        self.set_palette(palette)
    }

    /// Rotate the working palette left by `shift` entries
    pub fn rotate_palette(&mut self, shift: usize) -> Result<(), StripError> {
        self.palette = rotated(&self.palette, shift)?;
        Ok(())
    }

    /// Send the current buffer to `output` once
    pub fn show<O: OutputDriver>(&self, output: &mut O) -> Result<(), O::Error> {
        output.write(self.buffer.as_slice())
    }

    /// Send a brightness-scaled copy of the buffer to `output`
    ///
    /// The buffer itself is left untouched.
    pub fn show_with_brightness<O: OutputDriver>(
        &self,
        output: &mut O,
        factor: f32,
    ) -> Result<(), RunError<O::Error>> {
        let scaled = self.buffer.apply_brightness(factor)?;
        output.write(scaled.as_slice()).map_err(RunError::Output)
    }

    /// Run `effect` on this strip for the schedule's duration
    pub fn animate<E, T, O>(
        &mut self,
        effect: &mut E,
        schedule: FrameSchedule,
        timer: &mut T,
        output: &mut O,
        cancel: Option<&CancelToken>,
    ) -> Result<RunSummary, RunError<O::Error>>
    where
        E: Effect + ?Sized,
        T: FrameTimer,
        O: OutputDriver,
    {
        self.run_clock(FrameClock::new(schedule), effect, timer, output, cancel)
    }

    /// [`Strip::animate`] with every frame scaled to `level`
    pub fn animate_with_brightness<E, T, O>(
        &mut self,
        effect: &mut E,
        schedule: FrameSchedule,
        level: BrightnessLevel,
        timer: &mut T,
        output: &mut O,
        cancel: Option<&CancelToken>,
    ) -> Result<RunSummary, RunError<O::Error>>
    where
        E: Effect + ?Sized,
        T: FrameTimer,
        O: OutputDriver,
    {
        let clock = FrameClock::new(schedule).with_brightness(level);
        self.run_clock(clock, effect, timer, output, cancel)
    }

    fn run_clock<E, T, O>(
        &mut self,
        mut clock: FrameClock,
        effect: &mut E,
        timer: &mut T,
        output: &mut O,
        cancel: Option<&CancelToken>,
    ) -> Result<RunSummary, RunError<O::Error>>
    where
        E: Effect + ?Sized,
        T: FrameTimer,
        O: OutputDriver,
    {
        let Self {
            buffer, palette, ..
        } = self;
        effect.reset();
        clock.run(timer, buffer, output, cancel, |frame, ctx| {
            effect.render(ctx, frame.as_mut_slice(), palette.as_slice());
            Ok(())
        })
    }
}
