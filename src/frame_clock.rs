//! Duration-bounded frame loop.
//!
//! [`FrameClock::run`] is the control-flow skeleton every animation shares:
//! compute a frame, flush it to the output, sleep, repeat until the
//! schedule's duration has elapsed. Time and sleeping come from a
//! [`FrameTimer`], so the same loop runs against the hardware clock or a
//! simulated one.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    buffer::{BrightnessLevel, PixelBuffer},
    cancel::CancelToken,
    error::{RunError, StripError},
};

/// Default delay between frames.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// How long a loop runs and how long each frame is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSchedule {
    /// Total running time; zero renders exactly one frame
    pub duration: Duration,
    /// Sleep after every flushed frame
    pub frame_delay: Duration,
}

impl FrameSchedule {
    pub const fn new(duration: Duration, frame_delay: Duration) -> Self {
        Self {
            duration,
            frame_delay,
        }
    }

    /// Run for `duration` at [`DEFAULT_FRAME_DELAY`]
    pub const fn for_duration(duration: Duration) -> Self {
        Self::new(duration, DEFAULT_FRAME_DELAY)
    }

    /// Render a single frame
    pub const fn once() -> Self {
        Self::new(Duration::from_millis(0), Duration::from_millis(0))
    }
}

/// Source of time for the frame loop.
pub trait FrameTimer {
    /// Current time
    fn now(&mut self) -> Instant;

    /// Block for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Busy-waiting timer on the global `embassy-time` clock.
///
/// Nothing else runs during the delay, which matches a single-core
/// microcontroller driving the strip directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingTimer;

impl FrameTimer for BlockingTimer {
    fn now(&mut self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

/// Position of the frame being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameContext {
    /// Zero-based frame counter within the current run
    pub index: u32,
    /// Time since the run started
    pub elapsed: Duration,
}

/// Frame clock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Running,
    Stopped,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames flushed to the output
    pub frames: u32,
    /// Time from start to stop
    pub elapsed: Duration,
    /// Stopped by the cancel token rather than the deadline
    pub cancelled: bool,
}

/// Runs a frame step until the schedule's duration has elapsed.
#[derive(Debug, Clone)]
pub struct FrameClock {
    schedule: FrameSchedule,
    brightness: Option<BrightnessLevel>,
    state: ClockState,
}

impl FrameClock {
    pub const fn new(schedule: FrameSchedule) -> Self {
        Self {
            schedule,
            brightness: None,
            state: ClockState::Stopped,
        }
    }

    /// Flush brightness-scaled copies instead of the raw buffer
    #[must_use]
    pub const fn with_brightness(mut self, level: BrightnessLevel) -> Self {
        self.brightness = Some(level);
        self
    }

    pub const fn schedule(&self) -> FrameSchedule {
        self.schedule
    }

    pub const fn state(&self) -> ClockState {
        self.state
    }

    /// Run the frame loop.
    ///
    /// Each iteration:
    /// 1. Calls `step` to write the next frame into `buffer`
    /// 2. Writes the frame to `output`
    /// 3. Sleeps for the frame delay
    ///
    /// The loop stops once the elapsed time reaches the duration or `cancel`
    /// is set. Both are checked after a frame is flushed, so at least one
    /// frame is always rendered. A failing step returns immediately without
    /// flushing; a failing output aborts the run.
    pub fn run<T, O, F, const MAX_LEDS: usize>(
        &mut self,
        timer: &mut T,
        buffer: &mut PixelBuffer<MAX_LEDS>,
        output: &mut O,
        cancel: Option<&CancelToken>,
        mut step: F,
    ) -> Result<RunSummary, RunError<O::Error>>
    where
        T: FrameTimer,
        O: OutputDriver,
        F: FnMut(&mut PixelBuffer<MAX_LEDS>, FrameContext) -> Result<(), StripError>,
    {
        let start = timer.now();
        let mut frames: u32 = 0;
        self.state = ClockState::Running;

        #[cfg(feature = "esp32-log")]
        println!(
            "[FrameClock.run] start: duration={:?}ms delay={:?}ms",
            self.schedule.duration.as_millis(),
            self.schedule.frame_delay.as_millis()
        );

        let result = loop {
            let ctx = FrameContext {
                index: frames,
                elapsed: timer.now().saturating_duration_since(start),
            };
            if let Err(err) = step(buffer, ctx) {
                break Err(RunError::Strip(err));
            }
            if let Err(err) = self.flush(buffer, output) {
                #[cfg(feature = "esp32-log")]
                println!("[FrameClock.run] output failed at frame {:?}", frames);
                break Err(RunError::Output(err));
            }
            frames = frames.saturating_add(1);
            timer.sleep(self.schedule.frame_delay);

            let elapsed = timer.now().saturating_duration_since(start);
            let cancelled = cancel.is_some_and(CancelToken::is_cancelled);
            if cancelled || elapsed >= self.schedule.duration {
                break Ok(RunSummary {
                    frames,
                    elapsed,
                    cancelled,
                });
            }
        };

        self.state = ClockState::Stopped;

        #[cfg(feature = "esp32-log")]
        if let Ok(summary) = &result {
            println!(
                "[FrameClock.run] stop: frames={:?} elapsed={:?}ms cancelled={:?}",
                summary.frames,
                summary.elapsed.as_millis(),
                summary.cancelled
            );
        }

        result
    }

    fn flush<O: OutputDriver, const MAX_LEDS: usize>(
        &self,
        buffer: &PixelBuffer<MAX_LEDS>,
        output: &mut O,
    ) -> Result<(), O::Error> {
        match self.brightness {
            Some(level) => output.write(buffer.with_brightness(level).as_slice()),
            None => output.write(buffer.as_slice()),
        }
    }
}
