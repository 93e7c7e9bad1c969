//! Random base colors and hue-rotation harmonies.

use heapless::Vec;
use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};

use super::{Palette, capacity_check};
use crate::{
    color::{HsvF, wrap_hue},
    error::StripError,
};

/// Hue bucket for the random base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Temperature {
    /// Reds through yellows, wrapping across hue 0
    Warm,
    /// Greens through blues
    Cool,
    /// Anywhere on the hue circle
    #[default]
    Neutral,
}

/// Hue rotation rule for deriving related colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyType {
    /// Base plus the opposite hue
    Complementary,
    /// Three hues a third apart
    Triadic,
    /// Neighbouring hues in steps of 0.05
    Analogous,
    /// Four hues a quarter apart
    Tetradic,
}

const WARM_HUE_START: f32 = 0.95;
const WARM_HUE_SPAN: f32 = 0.20;
const COOL_HUE_START: f32 = 0.45;
const COOL_HUE_END: f32 = 0.65;
const ANALOGOUS_STEP: f32 = 0.05;

/// Pick a random base color for the given temperature
///
/// The warm range crosses hue 0: it is drawn from `0.95..1.15` and folded
/// back into `0..1`, covering `0.95..1.0` and `0.0..0.15`.
pub fn generate_base_color<R: RngCore>(temperature: Temperature, rng: &mut R) -> HsvF {
    let h = match temperature {
        Temperature::Warm => {
            let raw = rng.gen_range(WARM_HUE_START..WARM_HUE_START + WARM_HUE_SPAN);
            wrap_hue(raw)
        }
        Temperature::Cool => rng.gen_range(COOL_HUE_START..COOL_HUE_END),
        Temperature::Neutral => rng.gen_range(0.0..1.0),
    };
    let s = rng.gen_range(0.6..0.9);
    let v = rng.gen_range(0.7..0.9);

    HsvF::new(h, s, v)
}

/// Derive a harmony from `base`; the base color always comes first
///
/// `num_colors` only matters for [`HarmonyType::Analogous`], which yields
/// exactly that many colors (at least one).
pub fn generate_harmony<const N: usize>(
    base: HsvF,
    harmony: HarmonyType,
    num_colors: usize,
) -> Result<Vec<HsvF, N>, StripError> {
    let count = match harmony {
        HarmonyType::Complementary => 2,
        HarmonyType::Triadic => 3,
        HarmonyType::Analogous => num_colors.max(1),
        HarmonyType::Tetradic => 4,
    };
    capacity_check::<N>(count)?;

    Ok((0..count)
        .map(|i| base.shifted(hue_shift(harmony, i)))
        .collect())
}

#[allow(clippy::cast_precision_loss)]
fn hue_shift(harmony: HarmonyType, index: usize) -> f32 {
    let index = index as f32;
    match harmony {
        HarmonyType::Complementary => index * 0.5,
        HarmonyType::Triadic => index / 3.0,
        HarmonyType::Analogous => index * ANALOGOUS_STEP,
        HarmonyType::Tetradic => index * 0.25,
    }
}

/// Random base color, harmony and conversion to RGB in one step
pub fn generate_palette<const N: usize, R: RngCore>(
    temperature: Temperature,
    harmony: HarmonyType,
    num_colors: usize,
    rng: &mut R,
) -> Result<Palette<N>, StripError> {
    let base = generate_base_color(temperature, rng);
    let colors: Vec<HsvF, N> = generate_harmony(base, harmony, num_colors)?;

    Ok(colors.iter().map(|color| color.to_rgb()).collect())
}

/// [`generate_palette`] with a fixed seed; equal seeds give equal palettes
pub fn generate_palette_seeded<const N: usize>(
    temperature: Temperature,
    harmony: HarmonyType,
    num_colors: usize,
    seed: u64,
) -> Result<Palette<N>, StripError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_palette(temperature, harmony, num_colors, &mut rng)
}
