pub mod codec;
mod space;
mod utils;

use smart_leds::RGB8;

pub use codec::{
    pack, pack_grb, pack_rgb, pack_wrapping, rgb_from_u32, unpack, unpack_b, unpack_g,
    unpack_r, unpack_rgb, unpack_w,
};
pub use space::{HsvF, color_wheel, hsv_to_rgb, to_byte_rgb, wrap_hue};
pub use utils::{blend_colors, fade_toward, fill_segments, interpolate, mirror_half, pastel};

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
/// Boot color shown while the strip initializes
pub const PURPLE: Rgb = Rgb {
    r: 180,
    g: 0,
    b: 255,
};
