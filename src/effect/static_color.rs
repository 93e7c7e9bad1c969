//! Solid fills: one color, palette segments, palette sequence

use super::{Effect, palette_color};
use crate::{
    color::{Rgb, fill_segments},
    frame_clock::FrameContext,
};

/// Fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: Rgb,
}

impl StaticColorEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Effect for StaticColorEffect {
    fn render(&mut self, _ctx: FrameContext, leds: &mut [Rgb], _palette: &[Rgb]) {
        leds.fill(self.color);
    }
}

/// Shows one palette color per frame, cycling through the palette
#[derive(Debug, Clone, Default)]
pub struct SequenceEffect;

impl Effect for SequenceEffect {
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb], palette: &[Rgb]) {
        if let Some(color) = palette_color(palette, ctx.index as usize) {
            leds.fill(color);
        }
    }
}

/// Splits the strip into runs of equal length, one palette color each
///
/// Runs past the end of the palette get the fallback color.
#[derive(Debug, Clone)]
pub struct SegmentEffect {
    segment_length: usize,
    fallback: Rgb,
}

impl SegmentEffect {
    /// Segments shorter than one pixel are widened to one
    pub fn new(segment_length: usize, fallback: Rgb) -> Self {
        Self {
            segment_length: segment_length.max(1),
            fallback,
        }
    }
}

impl Effect for SegmentEffect {
    fn render(&mut self, _ctx: FrameContext, leds: &mut [Rgb], palette: &[Rgb]) {
        fill_segments(leds, self.segment_length, palette, self.fallback);
    }
}
