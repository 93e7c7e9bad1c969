//! Sine wave frame data
//!
//! Each channel of pixel `i` at step `s` is `(1 + sin((s + i) * rate)) * 127`
//! with a different rate per channel, giving a slowly drifting color wave.

use super::Effect;
use crate::{color::Rgb, frame_clock::FrameContext};

const DEFAULT_RATES: [f32; 3] = [0.1324, 0.1654, 0.1];

/// Produces successive frames into a caller-provided buffer
pub trait FrameSource {
    fn next_frame(&mut self, leds: &mut [Rgb]);
}

/// Per-channel sine wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    /// Angular rate for red, green and blue
    pub rates: [f32; 3],
}

impl Default for SineWave {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES,
        }
    }
}

impl SineWave {
    pub const fn new(rates: [f32; 3]) -> Self {
        Self { rates }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn channel(rate: f32, position: f32) -> u8 {
        ((1.0 + libm::sinf(position * rate)) * 127.0) as u8
    }

    /// Write the frame at `step` into `leds`
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn render_step(&self, step: u32, leds: &mut [Rgb]) {
        let [r, g, b] = self.rates;
        for (i, led) in leds.iter_mut().enumerate() {
            let position = step.wrapping_add(i as u32) as f32;
            *led = Rgb::new(
                Self::channel(r, position),
                Self::channel(g, position),
                Self::channel(b, position),
            );
        }
    }
}

impl Effect for SineWave {
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb], _palette: &[Rgb]) {
        self.render_step(ctx.index, leds);
    }
}

/// Endless sine frames; the step advances by one per frame
#[derive(Debug, Clone, Default)]
pub struct SineFrames {
    wave: SineWave,
    step: u32,
}

impl SineFrames {
    pub const fn new(wave: SineWave) -> Self {
        Self { wave, step: 0 }
    }

    /// Step of the next frame
    pub const fn step(&self) -> u32 {
        self.step
    }

    /// Start over from step zero
    pub fn restart(&mut self) {
        self.step = 0;
    }
}

impl FrameSource for SineFrames {
    fn next_frame(&mut self, leds: &mut [Rgb]) {
        self.wave.render_step(self.step, leds);
        self.step = self.step.wrapping_add(1);
    }
}
