//! Deterministic palette builders.

use super::{Palette, capacity_check};
use crate::{
    color::{Rgb, interpolate, pastel},
    error::StripError,
};

/// Drifting multi-channel ramp from one base color
///
/// Entry `i` is `(base + i * stretch / d) mod 256` per channel, with the
/// divisor `d` being 1 for red, 2 for green and 3 for blue.
pub fn generate_color_palette<const N: usize>(
    base: Rgb,
    stretch: u32,
    num_colors: usize,
) -> Result<Palette<N>, StripError> {
    capacity_check::<N>(num_colors)?;

    Ok((0..num_colors)
        .map(|i| {
            let offset = step_offset(i, stretch);
            Rgb {
                r: wrap_add(base.r, offset),
                g: wrap_add(base.g, offset / 2),
                b: wrap_add(base.b, offset / 3),
            }
        })
        .collect())
}

/// Ramp of `base + i * stretch` on every channel, mixed with white
pub fn generate_pastel_palette<const N: usize>(
    base: Rgb,
    stretch: u32,
    num_colors: usize,
) -> Result<Palette<N>, StripError> {
    capacity_check::<N>(num_colors)?;

    Ok((0..num_colors)
        .map(|i| {
            let offset = step_offset(i, stretch);
            pastel(Rgb {
                r: wrap_add(base.r, offset),
                g: wrap_add(base.g, offset),
                b: wrap_add(base.b, offset),
            })
        })
        .collect())
}

/// Piecewise linear `c1 -> c2 -> c3`
///
/// The first `n / 2` entries run from `c1` toward `c2`, the rest from `c2`
/// toward `c3`. Each segment starts exactly on its first color and stops
/// one step short of its last, so `c3` itself never appears.
pub fn generate_three_color_palette<const N: usize>(
    c1: Rgb,
    c2: Rgb,
    c3: Rgb,
    num_colors: usize,
) -> Result<Palette<N>, StripError> {
    capacity_check::<N>(num_colors)?;

    let first = num_colors / 2;
    let second = num_colors - first;
    let mut palette = Palette::new();
    for (from, to, len) in [(c1, c2, first), (c2, c3, second)] {
        for i in 0..len {
            push(&mut palette, interpolate(from, to, segment_factor(i, len)))?;
        }
    }

    Ok(palette)
}

/// [`generate_three_color_palette`] mixed with white
pub fn generate_three_color_pastel_palette<const N: usize>(
    c1: Rgb,
    c2: Rgb,
    c3: Rgb,
    num_colors: usize,
) -> Result<Palette<N>, StripError> {
    let mut palette = generate_three_color_palette::<N>(c1, c2, c3, num_colors)?;
    for color in palette.iter_mut() {
        *color = pastel(*color);
    }

    Ok(palette)
}

/// Expand a short color list into `num_steps` interpolated samples
///
/// Consecutive pairs each get `num_steps / (len - 1)` samples, starting on
/// the first color of the pair. When `num_steps` is not a multiple of
/// `len - 1` the leftover tail repeats the last color.
pub fn blend<const N: usize>(
    colors: &[Rgb],
    num_steps: usize,
) -> Result<Palette<N>, StripError> {
    if colors.len() < 2 {
        return Err(StripError::SingleColorBlend);
    }
    capacity_check::<N>(num_steps)?;
    let last = colors[colors.len() - 1];

    let segment = num_steps / (colors.len() - 1);
    let mut palette = Palette::new();
    if segment > 0 {
        for pair in colors.windows(2) {
            for j in 0..segment {
                let factor = segment_factor(j, segment);
                push(&mut palette, interpolate(pair[0], pair[1], factor))?;
            }
        }
    }
    while palette.len() < num_steps {
        push(&mut palette, last)?;
    }

    Ok(palette)
}

/// Copy of `colors` rotated left by `shift` places
pub fn rotated<const N: usize>(
    colors: &[Rgb],
    shift: usize,
) -> Result<Palette<N>, StripError> {
    capacity_check::<N>(colors.len())?;
    if colors.is_empty() {
        return Ok(Palette::new());
    }

    let shift = shift % colors.len();
    Ok(colors[shift..]
        .iter()
        .chain(&colors[..shift])
        .copied()
        .collect())
}

fn push<const N: usize>(palette: &mut Palette<N>, color: Rgb) -> Result<(), StripError> {
    palette.push(color).map_err(|_| StripError::PaletteCapacity {
        requested: palette.len() + 1,
        capacity: N,
    })
}

/// `index * stretch`, exact for any palette length
fn step_offset(index: usize, stretch: u32) -> u64 {
    (index as u64).wrapping_mul(u64::from(stretch))
}

#[allow(clippy::cast_possible_truncation)]
fn wrap_add(channel: u8, offset: u64) -> u8 {
    ((u64::from(channel) + offset % 256) % 256) as u8
}

#[allow(clippy::cast_precision_loss)]
fn segment_factor(index: usize, len: usize) -> f32 {
    index as f32 / len as f32
}
