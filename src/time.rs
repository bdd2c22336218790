//! Clock abstraction so the debounce filter can run against wall-clock time
//! on hardware and a synthetic clock in tests.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Millisecond tick counters wrap; implementations should use wrapping
    /// subtraction so the result stays correct across the rollover.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Returns true if strictly more than `window` has passed since `earlier`.
    #[inline]
    fn elapsed_exceeds(&self, earlier: Self, window: Self::Duration) -> bool {
        self.duration_since(earlier).as_millis() > window.as_millis()
    }
}
