//! Time abstraction traits for platform-agnostic timing.
//!
//! All driver timing is difference-based. Implementations of
//! [`TimeInstant::duration_since`] on fixed-width hardware counters should
//! use wrapping subtraction so elapsed-time math stays correct across
//! counter rollover (~49 days for a 32-bit millisecond timer).

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
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
