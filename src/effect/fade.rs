//! Gradual fade of the whole strip toward one color

use super::Effect;
use crate::{
    color::{BLACK, Rgb, fade_toward},
    frame_clock::FrameContext,
};

/// Moves every pixel one step toward `target` per frame
///
/// Starts from whatever the strip currently shows, so running it after any
/// other effect fades that effect out.
#[derive(Debug, Clone)]
pub struct FadeEffect {
    target: Rgb,
    rate: u8,
}

impl FadeEffect {
    pub const fn new(target: Rgb, rate: u8) -> Self {
        Self { target, rate }
    }

    /// Fade to black
    pub const fn out(rate: u8) -> Self {
        Self::new(BLACK, rate)
    }
}

impl Effect for FadeEffect {
    fn render(&mut self, _ctx: FrameContext, leds: &mut [Rgb], _palette: &[Rgb]) {
        fade_toward(leds, self.target, self.rate);
    }
}
