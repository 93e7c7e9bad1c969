//! Floating point HSV and the classic color wheel.

use super::{BLACK, Rgb};

/// HSV color with every component in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvF {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl HsvF {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Shift hue (wrapping modulo 1) and nudge saturation and value
    /// (clamped to `0..=1`).
    #[must_use]
    pub fn adjust(self, hue_shift: f32, sat_adjust: f32, val_adjust: f32) -> Self {
        Self {
            h: wrap_hue(self.h + hue_shift),
            s: (self.s + sat_adjust).clamp(0.0, 1.0),
            v: (self.v + val_adjust).clamp(0.0, 1.0),
        }
    }

    /// Rotate hue only
    #[must_use]
    pub fn shifted(self, hue_shift: f32) -> Self {
        self.adjust(hue_shift, 0.0, 0.0)
    }

    /// Convert to an 8-bit color, truncating each channel
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hsv_to_rgb(self.h, self.s, self.v);
        to_byte_rgb(r, g, b)
    }
}

/// Fold a hue into `0.0..1.0`
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue - libm::floorf(hue);
    // floorf can leave exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert HSV to RGB, all components in `0.0..=1.0`
///
/// Six-sector decomposition. Each channel stays within `0..=v`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0) as i32;
    let f = h * 6.0 - sector as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Scale float channels to bytes by truncation (`x * 255` rounded down)
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_byte_rgb(r: f32, g: f32, b: f32) -> Rgb {
    Rgb {
        r: (r * 255.0) as u8,
        g: (g * 255.0) as u8,
        b: (b * 255.0) as u8,
    }
}

/// Map `0..=255` onto a red, green, blue sweep
///
/// Anything outside `0..=255` is black. Both ends of the range are red.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn color_wheel(value: i32) -> Rgb {
    if value < 0 || value > 255 {
        return BLACK;
    }
    let pos = value as u8;
    if pos < 85 {
        Rgb {
            r: 255 - pos * 3,
            g: pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 0,
            g: 255 - pos * 3,
            b: pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: pos * 3,
            g: 0,
            b: 255 - pos * 3,
        }
    }
}
