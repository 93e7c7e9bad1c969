//! Random noise effects

use rand::{Rng, RngCore};

use super::Effect;
use crate::{color::Rgb, frame_clock::FrameContext};

/// Every pixel gets a fresh random color every frame
#[derive(Debug, Clone)]
pub struct RandomColorEffect<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandomColorEffect<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> Effect for RandomColorEffect<R> {
    fn render(&mut self, _ctx: FrameContext, leds: &mut [Rgb], _palette: &[Rgb]) {
        for led in leds.iter_mut() {
            *led = Rgb::new(self.rng.r#gen(), self.rng.r#gen(), self.rng.r#gen());
        }
    }
}

/// Every pixel picks a random palette entry every frame
///
/// With an empty palette the strip is left as is.
#[derive(Debug, Clone)]
pub struct TwinkleEffect<R: RngCore> {
    rng: R,
}

impl<R: RngCore> TwinkleEffect<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> Effect for TwinkleEffect<R> {
    fn render(&mut self, _ctx: FrameContext, leds: &mut [Rgb], palette: &[Rgb]) {
        if palette.is_empty() {
            return;
        }
        for led in leds.iter_mut() {
            *led = palette[self.rng.gen_range(0..palette.len())];
        }
    }
}
