//! Cancellation flag for running animations.
//!
//! Built on `critical-section`, so a token can live in a `static` and be
//! set from an interrupt handler or another core while a frame loop runs.

use core::cell::Cell;

use critical_section::Mutex;

/// A shared stop request.
///
/// The frame clock checks the token after every flushed frame and stops
/// early once it is set. The token stays set until [`CancelToken::reset`].
pub struct CancelToken {
    cancelled: Mutex<Cell<bool>>,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    pub const fn new() -> Self {
        Self {
            cancelled: Mutex::new(Cell::new(false)),
        }
    }

    /// Request the running animation to stop.
    pub fn cancel(&self) {
        critical_section::with(|cs| self.cancelled.borrow(cs).set(true));
    }

    /// Clear a previous request so the token can be reused.
    pub fn reset(&self) {
        critical_section::with(|cs| self.cancelled.borrow(cs).set(false));
    }

    pub fn is_cancelled(&self) -> bool {
        critical_section::with(|cs| self.cancelled.borrow(cs).get())
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
