//! Entropy abstraction for effects that draw randomness.
//!
//! Only the [`Glitch`](crate::Effect::Glitch) effect consumes random values:
//! one byte for the chance roll and one per channel when it samples a random
//! color. Injecting the source keeps glitch behavior deterministic in tests,
//! the same way [`TimeSource`](crate::TimeSource) keeps timing deterministic.

/// Trait for abstracting random number sources.
pub trait RandomSource {
    /// Returns a uniformly distributed random byte.
    fn next_u8(&mut self) -> u8;
}
