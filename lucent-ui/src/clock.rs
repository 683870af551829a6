//! Frame clocks and surface-owned deadlines.
//!
//! Every animated component samples a [`FrameClock`] when an operation starts
//! an animation and again whenever the host calls `tick()`. Hosts normally use
//! [`SystemClock`]; tests and the headless demo drive a [`ManualClock`].

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

/// Converts seconds to a [`Duration`], rounded to whole microseconds.
///
/// Negative and NaN inputs map to zero. Rounding keeps durations written as
/// `f32` seconds (`0.1`, `0.35 * 0.4`) exact at millisecond boundaries.
pub fn duration_from_secs(secs: f32) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_micros((f64::from(secs) * 1.0e6).round() as u64)
}

/// Source of the current animation time.
///
/// Times are offsets from an arbitrary, clock-specific epoch. They must never
/// go backwards.
pub trait FrameClock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Duration;
}

/// Shared handle to a frame clock.
pub type SharedClock = Arc<dyn FrameClock>;

/// Monotonic wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// Creates a clock whose epoch is "now".
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Creates a shared handle to a fresh system clock.
    pub fn shared() -> SharedClock {
        Arc::new(Self::new())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// ```
/// use std::time::Duration;
/// use lucent_ui::{FrameClock, ManualClock};
///
/// let clock = ManualClock::new();
/// clock.advance(Duration::from_millis(16));
/// assert_eq!(clock.now(), Duration::from_millis(16));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shared manual clock. Keep the returned `Arc` to drive it.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: Duration) {
        *self.now.lock() += delta;
    }

    /// Moves the clock forward by `secs` seconds.
    pub fn advance_secs(&self, secs: f32) {
        self.advance(duration_from_secs(secs));
    }

    /// Sets the clock; times earlier than the current one are ignored.
    pub fn set(&self, now: Duration) {
        let mut current = self.now.lock();
        if now > *current {
            *current = now;
        }
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

/// A one-shot timer token owned by the surface that armed it.
///
/// The owner polls [`Deadline::take_due`] from its `tick()`. Because the
/// pending action lives inside the owner, dropping the owner or calling
/// [`Deadline::cancel`] guarantees the action never runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Duration>,
}

impl Deadline {
    /// An unarmed deadline.
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Arms (or re-arms) the deadline.
    pub fn arm(&mut self, at: Duration) {
        self.at = Some(at);
    }

    /// Disarms the deadline.
    pub fn cancel(&mut self) {
        self.at = None;
    }

    /// Returns `true` while armed.
    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// The time the deadline fires at, if armed.
    pub fn at(&self) -> Option<Duration> {
        self.at
    }

    /// Disarms and returns `true` if the deadline has passed.
    pub fn take_due(&mut self, now: Duration) -> bool {
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}
