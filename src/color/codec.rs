//! Packed 32-bit color words.
//!
//! Layout is `W << 24 | R << 16 | G << 8 | B`.

use super::Rgb;
use crate::error::StripError;

/// Pack four 8-bit channels into one word
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn pack(r: u8, g: u8, b: u8, w: u8) -> u32 {
    (w as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack wide channel values, masking each to its low 8 bits
///
/// Values above 255 wrap (`300` packs as `44`). Negative values are
/// rejected instead of being masked.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn pack_wrapping(r: i32, g: i32, b: i32, w: i32) -> Result<u32, StripError> {
    if r < 0 || g < 0 || b < 0 || w < 0 {
        return Err(StripError::NegativeChannel);
    }
    Ok(pack(
        (r & 0xFF) as u8,
        (g & 0xFF) as u8,
        (b & 0xFF) as u8,
        (w & 0xFF) as u8,
    ))
}

#[inline]
pub const fn unpack_r(color: u32) -> u8 {
    ((color >> 16) & 0xFF) as u8
}

#[inline]
pub const fn unpack_g(color: u32) -> u8 {
    ((color >> 8) & 0xFF) as u8
}

#[inline]
pub const fn unpack_b(color: u32) -> u8 {
    (color & 0xFF) as u8
}

#[inline]
pub const fn unpack_w(color: u32) -> u8 {
    ((color >> 24) & 0xFF) as u8
}

/// Split a word into `(r, g, b, w)`
pub const fn unpack(color: u32) -> (u8, u8, u8, u8) {
    (
        unpack_r(color),
        unpack_g(color),
        unpack_b(color),
        unpack_w(color),
    )
}

/// Pack an RGB color together with a white channel
pub const fn pack_rgb(color: Rgb, w: u8) -> u32 {
    pack(color.r, color.g, color.b, w)
}

/// Extract the RGB part of a word, dropping white
pub const fn unpack_rgb(color: u32) -> Rgb {
    Rgb {
        r: unpack_r(color),
        g: unpack_g(color),
        b: unpack_b(color),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    unpack_rgb(color)
}

/// Word in the green-red-blue order WS2812 pixels expect on the wire
#[allow(clippy::cast_lossless)]
pub const fn pack_grb(color: Rgb) -> u32 {
    (color.g as u32) << 16 | (color.r as u32) << 8 | color.b as u32
}
