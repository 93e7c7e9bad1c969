//! Moving-dot effects
//!
//! All modes advance one pixel per frame. Chase and Scanner leave a trail
//! behind the lit block that fades toward black at `fade_rate`.

use super::{Effect, palette_color};
use crate::{
    color::{BLACK, Rgb, fade_toward},
    frame_clock::FrameContext,
};

const DEFAULT_LENGTH: usize = 3;
const DEFAULT_FADE_RATE: u8 = 192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaseMode {
    /// Fill the strip pixel by pixel, next palette color on every pass
    Wipe,
    /// Block of pixels running around the strip
    Chase,
    /// Block bouncing between both ends
    Scanner,
}

#[derive(Debug, Clone)]
pub struct ChaseEffect {
    mode: ChaseMode,
    length: usize,
    fade_rate: u8,
}

impl ChaseEffect {
    pub fn new(mode: ChaseMode) -> Self {
        Self {
            mode,
            length: DEFAULT_LENGTH,
            fade_rate: DEFAULT_FADE_RATE,
        }
    }

    /// Lit block length; at least one pixel
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.max(1);
        self
    }

    #[must_use]
    pub fn with_fade_rate(mut self, fade_rate: u8) -> Self {
        self.fade_rate = fade_rate;
        self
    }

    fn wipe(leds: &mut [Rgb], frame: usize, palette: &[Rgb]) {
        let len = leds.len();
        let pass = frame / len;
        let head = frame % len;
        let Some(color) = palette_color(palette, pass) else {
            return;
        };
        leds[head] = color;
    }

    fn chase(&self, leds: &mut [Rgb], frame: usize, palette: &[Rgb]) {
        let len = leds.len();
        let Some(color) = palette_color(palette, frame / len) else {
            return;
        };
        fade_toward(leds, BLACK, self.fade_rate);
        let head = frame % len;
        for offset in 0..self.length.min(len) {
            leds[(head + offset) % len] = color;
        }
    }

    fn scanner(&self, leds: &mut [Rgb], frame: usize, palette: &[Rgb]) {
        let len = leds.len();
        let block = self.length.min(len);
        let travel = len - block;
        let Some(color) = palette_color(palette, 0) else {
            return;
        };
        fade_toward(leds, BLACK, self.fade_rate);

        let start = if travel == 0 {
            0
        } else {
            // bounce: 0..travel then back down to 1
            let cycle = frame % (travel * 2);
            if cycle <= travel {
                cycle
            } else {
                travel * 2 - cycle
            }
        };
        leds[start..start + block].fill(color);
    }
}

impl Effect for ChaseEffect {
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb], palette: &[Rgb]) {
        if leds.is_empty() {
            return;
        }
        let frame = ctx.index as usize;
        match self.mode {
            ChaseMode::Wipe => Self::wipe(leds, frame, palette),
            ChaseMode::Chase => self.chase(leds, frame, palette),
            ChaseMode::Scanner => self.scanner(leds, frame, palette),
        }
    }
}
