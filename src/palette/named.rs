//! Palettes selectable by name.

use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{
    HarmonyType, Palette, Temperature, capacity_check, generate_color_palette,
    generate_pastel_palette, generate_palette, generate_three_color_palette,
    generate_three_color_pastel_palette,
};
use crate::{color::Rgb, error::StripError};

const PALETTE_NAME_HARMONY_COMPLEMENTARY: &str = "harmony1";
const PALETTE_NAME_HARMONY_TRIADIC: &str = "harmony2";
const PALETTE_NAME_HARMONY_ANALOGOUS: &str = "harmony3";
const PALETTE_NAME_HARMONY_TETRADIC: &str = "harmony4";
const PALETTE_NAME_ONE_COLOR: &str = "one_color";
const PALETTE_NAME_ONE_COLOR_PASTEL: &str = "one_color_pastel";
const PALETTE_NAME_THREE_COLORS: &str = "three_colors";
const PALETTE_NAME_THREE_COLORS_PASTEL: &str = "three_colors_pastel";
const PALETTE_NAME_BLACK_BLUE_MAGENTA_WHITE: &str = "black_blue_magenta_white";
const PALETTE_NAME_BLACK_MAGENTA_RED: &str = "black_magenta_red";
const PALETTE_NAME_BLACK_RED_MAGENTA_YELLOW: &str = "black_red_magenta_yellow";

// Gradients from the WLED palette collection
const BLACK_BLUE_MAGENTA_WHITE: [Rgb; 7] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0, 0, 45),
    Rgb::new(0, 0, 255),
    Rgb::new(42, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 55, 255),
    Rgb::new(255, 255, 255),
];

const BLACK_MAGENTA_RED: [Rgb; 5] = [
    Rgb::new(0, 0, 0),
    Rgb::new(42, 0, 45),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 0, 45),
    Rgb::new(255, 0, 0),
];

const BLACK_RED_MAGENTA_YELLOW: [Rgb; 7] = [
    Rgb::new(0, 0, 0),
    Rgb::new(42, 0, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 0, 45),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 55, 45),
    Rgb::new(255, 255, 0),
];

/// Known palette names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteName {
    HarmonyComplementary,
    HarmonyTriadic,
    HarmonyAnalogous,
    HarmonyTetradic,
    OneColor,
    OneColorPastel,
    ThreeColors,
    ThreeColorsPastel,
    BlackBlueMagentaWhite,
    BlackMagentaRed,
    BlackRedMagentaYellow,
}

/// Inputs for the parameterized palettes
#[derive(Debug, Clone, Copy)]
pub struct PaletteParams {
    /// Seed color for `one_color` and `one_color_pastel`
    pub base_color: Rgb,
    /// Ramp step for `one_color` and `one_color_pastel`
    pub stretch: u32,
    /// Anchor colors for `three_colors` and `three_colors_pastel`
    pub colors: [Rgb; 3],
    /// Number of colors to generate
    pub num_colors: usize,
    /// Hue bucket for the harmonies
    pub temperature: Temperature,
}

impl Default for PaletteParams {
    fn default() -> Self {
        Self {
            base_color: Rgb::new(128, 0, 0),
            stretch: 350,
            colors: [
                Rgb::new(90, 180, 27),
                Rgb::new(111, 123, 154),
                Rgb::new(231, 45, 120),
            ],
            num_colors: 12,
            temperature: Temperature::Neutral,
        }
    }
}

impl PaletteName {
    pub const ALL: [Self; 11] = [
        Self::HarmonyComplementary,
        Self::HarmonyTriadic,
        Self::HarmonyAnalogous,
        Self::HarmonyTetradic,
        Self::OneColor,
        Self::OneColorPastel,
        Self::ThreeColors,
        Self::ThreeColorsPastel,
        Self::BlackBlueMagentaWhite,
        Self::BlackMagentaRed,
        Self::BlackRedMagentaYellow,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HarmonyComplementary => PALETTE_NAME_HARMONY_COMPLEMENTARY,
            Self::HarmonyTriadic => PALETTE_NAME_HARMONY_TRIADIC,
            Self::HarmonyAnalogous => PALETTE_NAME_HARMONY_ANALOGOUS,
            Self::HarmonyTetradic => PALETTE_NAME_HARMONY_TETRADIC,
            Self::OneColor => PALETTE_NAME_ONE_COLOR,
            Self::OneColorPastel => PALETTE_NAME_ONE_COLOR_PASTEL,
            Self::ThreeColors => PALETTE_NAME_THREE_COLORS,
            Self::ThreeColorsPastel => PALETTE_NAME_THREE_COLORS_PASTEL,
            Self::BlackBlueMagentaWhite => PALETTE_NAME_BLACK_BLUE_MAGENTA_WHITE,
            Self::BlackMagentaRed => PALETTE_NAME_BLACK_MAGENTA_RED,
            Self::BlackRedMagentaYellow => PALETTE_NAME_BLACK_RED_MAGENTA_YELLOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Result<Self, StripError> {
        Ok(match s {
            PALETTE_NAME_HARMONY_COMPLEMENTARY => Self::HarmonyComplementary,
            PALETTE_NAME_HARMONY_TRIADIC => Self::HarmonyTriadic,
            PALETTE_NAME_HARMONY_ANALOGOUS => Self::HarmonyAnalogous,
            PALETTE_NAME_HARMONY_TETRADIC => Self::HarmonyTetradic,
            PALETTE_NAME_ONE_COLOR => Self::OneColor,
            PALETTE_NAME_ONE_COLOR_PASTEL => Self::OneColorPastel,
            PALETTE_NAME_THREE_COLORS => Self::ThreeColors,
            PALETTE_NAME_THREE_COLORS_PASTEL => Self::ThreeColorsPastel,
            PALETTE_NAME_BLACK_BLUE_MAGENTA_WHITE => Self::BlackBlueMagentaWhite,
            PALETTE_NAME_BLACK_MAGENTA_RED => Self::BlackMagentaRed,
            PALETTE_NAME_BLACK_RED_MAGENTA_YELLOW => Self::BlackRedMagentaYellow,
            _ => return Err(StripError::UnknownPalette),
        })
    }

    /// Build the palette this name stands for
    ///
    /// Only the harmonies draw from `rng`.
    pub fn build<const N: usize, R: RngCore>(
        self,
        params: &PaletteParams,
        rng: &mut R,
    ) -> Result<Palette<N>, StripError> {
        #[cfg(feature = "esp32-log")]
        println!("[PaletteName.build] building {:?}", self.as_str());

        let mut harmony = |kind: HarmonyType| {
            generate_palette::<N, R>(params.temperature, kind, params.num_colors, rng)
        };
        let [c1, c2, c3] = params.colors;

        match self {
            Self::HarmonyComplementary => harmony(HarmonyType::Complementary),
            Self::HarmonyTriadic => harmony(HarmonyType::Triadic),
            Self::HarmonyAnalogous => harmony(HarmonyType::Analogous),
            Self::HarmonyTetradic => harmony(HarmonyType::Tetradic),
            Self::OneColor => {
                generate_color_palette(params.base_color, params.stretch, params.num_colors)
            }
            Self::OneColorPastel => {
                generate_pastel_palette(params.base_color, params.stretch, params.num_colors)
            }
            Self::ThreeColors => generate_three_color_palette(c1, c2, c3, params.num_colors),
            Self::ThreeColorsPastel => {
                generate_three_color_pastel_palette(c1, c2, c3, params.num_colors)
            }
            Self::BlackBlueMagentaWhite => literal(&BLACK_BLUE_MAGENTA_WHITE),
            Self::BlackMagentaRed => literal(&BLACK_MAGENTA_RED),
            Self::BlackRedMagentaYellow => literal(&BLACK_RED_MAGENTA_YELLOW),
        }
    }
}

fn literal<const N: usize>(colors: &[Rgb]) -> Result<Palette<N>, StripError> {
    capacity_check::<N>(colors.len())?;
    Ok(colors.iter().copied().collect())
}
