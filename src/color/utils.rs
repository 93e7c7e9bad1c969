use crate::{color::Rgb, math8::blend8};

/// Mirror the first half of the array around the center
pub fn mirror_half(leds: &mut [Rgb]) {
    if leds.is_empty() {
        return;
    }
    // Compute center for mirroring
    let leds_len = leds.len();
    let mut center = leds_len / 2;
    if !leds_len.is_multiple_of(2) {
        center += 1;
    }
    center = center.min(leds_len);
    // Mirror the first half of the array around the center
    for i in 0..center {
        let mirrored = leds_len - 1 - i;
        leds[mirrored] = leds[i];
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Interpolate with a float factor in `0.0..=1.0`
///
/// Each channel is `a + (b - a) * factor`, truncated toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn interpolate(a: Rgb, b: Rgb, factor: f32) -> Rgb {
    let channel = |from: u8, to: u8| {
        let from = f32::from(from);
        (from + (f32::from(to) - from) * factor) as u8
    };
    Rgb {
        r: channel(a.r, b.r),
        g: channel(a.g, b.g),
        b: channel(a.b, b.b),
    }
}

/// Lighten a color by averaging every channel with full scale
#[allow(clippy::cast_possible_truncation)]
pub const fn pastel(color: Rgb) -> Rgb {
    Rgb {
        r: ((color.r as u16 + 255) / 2) as u8,
        g: ((color.g as u16 + 255) / 2) as u8,
        b: ((color.b as u16 + 255) / 2) as u8,
    }
}

/// Paint consecutive runs of `segment_length` pixels
///
/// Run `k` takes `values[k]`, later runs take `fallback`. The last run may
/// be shorter. `segment_length` must be non-zero.
pub fn fill_segments(leds: &mut [Rgb], segment_length: usize, values: &[Rgb], fallback: Rgb) {
    for (k, segment) in leds.chunks_mut(segment_length).enumerate() {
        segment.fill(values.get(k).copied().unwrap_or(fallback));
    }
}

/// Move every pixel one fade step toward `target`
///
/// Higher `rate` fades faster. Every channel that has not reached the
/// target moves by at least one unit and never overshoots.
pub fn fade_toward(leds: &mut [Rgb], target: Rgb, rate: u8) {
    let divisor = f32::from((255 - rate) >> 1) + 1.1;
    for pixel in leds.iter_mut() {
        if *pixel == target {
            continue;
        }
        pixel.r = fade_channel(pixel.r, target.r, divisor);
        pixel.g = fade_channel(pixel.g, target.g, divisor);
        pixel.b = fade_channel(pixel.b, target.b, divisor);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fade_channel(current: u8, target: u8, divisor: f32) -> u8 {
    let diff = i16::from(target) - i16::from(current);
    let step = (f32::from(diff) / divisor) as i16 + diff.signum();
    (i16::from(current) + step) as u8
}
