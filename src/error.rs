//! Error types for strip operations.
//!
//! All validation happens at the boundary (buffer construction, brightness,
//! palette dispatch). The numeric core in [`crate::math8`] and
//! [`crate::color`] never fails.

use core::fmt;

/// Caller-side contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// LED count is zero or exceeds the buffer capacity.
    InvalidLedCount { requested: usize, capacity: usize },

    /// A bulk write did not cover exactly the whole strip.
    LengthMismatch { expected: usize, actual: usize },

    /// Pixel index outside the strip.
    IndexOutOfRange { index: usize, len: usize },

    /// Brightness factor is not one of the ten supported levels.
    UnsupportedBrightnessLevel,

    /// Palette name is not in the known set.
    UnknownPalette,

    /// Blending needs at least two colors.
    SingleColorBlend,

    /// A strip palette must contain at least one color.
    EmptyPalette,

    /// Requested more colors than the palette can hold.
    PaletteCapacity { requested: usize, capacity: usize },

    /// Negative channel value passed to a packing function.
    NegativeChannel,

    /// Segments must be at least one pixel long.
    ZeroSegmentLength,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::InvalidLedCount {
                requested,
                capacity,
            } => write!(
                f,
                "led count {requested} is invalid (must be 1..={capacity})"
            ),
            StripError::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} colors, got {actual}")
            }
            StripError::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} out of range for strip of {len}")
            }
            StripError::UnsupportedBrightnessLevel => {
                write!(
                    f,
                    "brightness must be one of 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0"
                )
            }
            StripError::UnknownPalette => write!(f, "unknown palette name"),
            StripError::SingleColorBlend => {
                write!(f, "blending requires at least two colors")
            }
            StripError::EmptyPalette => write!(f, "palette must not be empty"),
            StripError::PaletteCapacity {
                requested,
                capacity,
            } => write!(
                f,
                "palette of {requested} colors exceeds capacity {capacity}"
            ),
            StripError::NegativeChannel => {
                write!(f, "color channels must not be negative")
            }
            StripError::ZeroSegmentLength => {
                write!(f, "segment length must be at least 1")
            }
        }
    }
}

/// Failure of a frame loop.
///
/// `E` is the error type of the [`crate::OutputDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError<E> {
    /// A frame step violated a strip contract.
    Strip(StripError),

    /// The output driver failed to transmit a frame.
    Output(E),
}

impl<E> From<StripError> for RunError<E> {
    fn from(err: StripError) -> Self {
        RunError::Strip(err)
    }
}

impl<E: fmt::Display> fmt::Display for RunError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Strip(err) => write!(f, "strip error: {err}"),
            RunError::Output(err) => write!(f, "output error: {err}"),
        }
    }
}
