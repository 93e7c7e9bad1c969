//! Palette generation
//!
//! Palettes are fixed-capacity color lists. Every builder returns a fresh
//! [`Palette`] and leaves its inputs untouched.

mod generate;
mod harmony;
mod named;

use crate::{color::Rgb, error::StripError};

pub use generate::{
    blend, generate_color_palette, generate_pastel_palette, generate_three_color_palette,
    generate_three_color_pastel_palette, rotated,
};
pub use harmony::{
    HarmonyType, Temperature, generate_base_color, generate_harmony, generate_palette,
    generate_palette_seeded,
};
pub use named::{PaletteName, PaletteParams};

/// Ordered color list holding at most `N` entries
pub type Palette<const N: usize> = heapless::Vec<Rgb, N>;

pub(crate) const fn capacity_check<const N: usize>(requested: usize) -> Result<(), StripError> {
    if requested > N {
        return Err(StripError::PaletteCapacity {
            requested,
            capacity: N,
        });
    }
    Ok(())
}
