//! Pulsing effect: blinks or breathes through the palette
//!
//! Every period shows one palette color. Blink holds it at full value for
//! the first half of the period and off for the second half, Breathe fades
//! it in and out with an eased curve.

use embassy_time::Duration;

use super::{Effect, palette_color};
use crate::{
    color::{BLACK, Rgb, blend_colors},
    frame_clock::FrameContext,
    math8::{ease_in_out_quad, progress8},
};

const DEFAULT_PERIOD: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseStyle {
    Blink,
    Breathe,
}

#[derive(Debug, Clone)]
pub struct PulseEffect {
    period: Duration,
    style: PulseStyle,
}

impl Default for PulseEffect {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD, PulseStyle::Breathe)
    }
}

impl PulseEffect {
    pub const fn new(period: Duration, style: PulseStyle) -> Self {
        Self { period, style }
    }

    /// Blend amount of the palette color at `phase` (0..=255 through the period)
    fn level(&self, phase: u8) -> u8 {
        match self.style {
            PulseStyle::Blink => {
                if phase < 128 {
                    255
                } else {
                    0
                }
            }
            PulseStyle::Breathe => {
                // triangle 0 -> 255 -> 0 over the period
                let triangle = if phase < 128 {
                    phase << 1
                } else {
                    (255 - phase) << 1
                };
                ease_in_out_quad(triangle)
            }
        }
    }
}

impl Effect for PulseEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb], palette: &[Rgb]) {
        let period_ms = self.period.as_millis();
        if period_ms == 0 {
            // no period to pulse over, hold the first color
            if let Some(color) = palette_color(palette, 0) {
                leds.fill(color);
            }
            return;
        }

        let elapsed_ms = ctx.elapsed.as_millis();
        let cycle = (elapsed_ms / period_ms) as usize;
        let Some(color) = palette_color(palette, cycle) else {
            return;
        };

        let into_period = Duration::from_millis(elapsed_ms % period_ms);
        let phase = progress8(into_period, self.period);
        leds.fill(blend_colors(BLACK, color, self.level(phase)));
    }
}
