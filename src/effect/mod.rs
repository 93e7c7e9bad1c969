//! Effect templates
//!
//! Each effect is a small strategy object that writes one frame at a time.
//! The frame clock supplies the frame position, the strip supplies its
//! pixels and working palette. Effects keep no reference to either between
//! frames.

mod chase;
mod fade;
mod pulse;
mod rainbow;
mod random;
mod static_color;
mod wave;

pub use chase::{ChaseEffect, ChaseMode};
pub use fade::FadeEffect;
pub use pulse::{PulseEffect, PulseStyle};
pub use rainbow::{RainbowDirection, RainbowEffect};
pub use random::{RandomColorEffect, TwinkleEffect};
pub use static_color::{SegmentEffect, SequenceEffect, StaticColorEffect};
pub use wave::{FrameSource, SineFrames, SineWave};

use crate::{color::Rgb, frame_clock::FrameContext};

pub trait Effect {
    /// Render a single frame
    ///
    /// `leds` still holds the previous frame, so effects may build on it.
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb], palette: &[Rgb]);

    /// Reset effect state before a new run
    fn reset(&mut self) {}
}

/// Palette entry `index`, wrapping; `None` for an empty palette
pub(crate) fn palette_color(palette: &[Rgb], index: usize) -> Option<Rgb> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()])
}
