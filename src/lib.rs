#![no_std]

pub mod buffer;
pub mod cancel;
pub mod color;
pub mod effect;
pub mod error;
pub mod frame_clock;
pub mod math8;
pub mod palette;
pub mod strip;

pub use buffer::{BrightnessLevel, PixelBuffer};
pub use cancel::CancelToken;
pub use color::{BLACK, HsvF, PURPLE, Rgb, WHITE};
pub use effect::Effect;
pub use error::{RunError, StripError};
pub use frame_clock::{
    BlockingTimer, FrameClock, FrameContext, FrameSchedule, FrameTimer, RunSummary,
};
pub use palette::{Palette, PaletteName, PaletteParams};
pub use strip::{Strip, StripConfig};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms. Drivers
/// receive colors in logical RGB order and handle the wire order (GRB for
/// WS2812) themselves, see [`color::pack_grb`].
pub trait OutputDriver {
    /// Hardware failure reported by the driver
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
