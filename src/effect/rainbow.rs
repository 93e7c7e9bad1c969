//! Rainbow cycling effect
//!
//! Spreads one full turn of the color wheel across the strip and shifts it
//! a few wheel positions every frame.

use super::Effect;
use crate::{
    color::{Rgb, color_wheel, mirror_half},
    frame_clock::FrameContext,
};

const DEFAULT_SPEED: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowDirection {
    Forward,
    Backward,
    Mirrored,
}

/// Color wheel sweep
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Wheel positions advanced per frame
    speed: u8,
    /// Direction of the rainbow
    direction: RainbowDirection,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            direction: RainbowDirection::Forward,
        }
    }
}

impl RainbowEffect {
    #[must_use]
    pub fn with_direction(mut self, direction: RainbowDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb], _palette: &[Rgb]) {
        if leds.is_empty() {
            return;
        }

        let offset = ctx.index.wrapping_mul(u32::from(self.speed)) as u8;
        let offset = match self.direction {
            RainbowDirection::Backward => offset.wrapping_neg(),
            RainbowDirection::Forward | RainbowDirection::Mirrored => offset,
        };

        let len = leds.len();
        let span = match self.direction {
            // the first half carries the whole wheel, the rest is mirrored
            RainbowDirection::Mirrored => len.div_ceil(2),
            RainbowDirection::Forward | RainbowDirection::Backward => len,
        };

        for (i, led) in leds.iter_mut().take(span).enumerate() {
            let position = ((i * 256 / span) as u8).wrapping_add(offset);
            *led = color_wheel(i32::from(position));
        }

        if self.direction == RainbowDirection::Mirrored {
            mirror_half(leds);
        }
    }
}
