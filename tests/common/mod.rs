//! Shared test infrastructure for rgb-led-driver integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use rgb_led_driver::{RandomSource, RgbLed, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Shared recording sink for duty writes, observable after the LED has been
/// moved into a driver
pub struct LedSink {
    history: core::cell::RefCell<heapless::Vec<Srgb<u8>, 64>>,
}

impl LedSink {
    pub fn new() -> Self {
        Self {
            history: core::cell::RefCell::new(heapless::Vec::new()),
        }
    }

    /// The most recent duty triple written to the LED
    pub fn last_color(&self) -> Srgb<u8> {
        *self.history.borrow().last().expect("no writes recorded")
    }

    pub fn write_count(&self) -> usize {
        self.history.borrow().len()
    }
}

/// Mock LED that records every write into a [`LedSink`]
pub struct MockLed<'a> {
    sink: &'a LedSink,
}

impl<'a> MockLed<'a> {
    pub fn new(sink: &'a LedSink) -> Self {
        Self { sink }
    }
}

impl RgbLed for MockLed<'_> {
    fn set_color(&mut self, color: Srgb<u8>) {
        let _ = self.sink.history.borrow_mut().push(color);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds (wrapping, like a
    /// hardware millisecond counter)
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Random Source
// ============================================================================

/// Mock random source that replays a fixed script of bytes, cycling when
/// the script is exhausted
pub struct MockRandom {
    script: heapless::Vec<u8, 32>,
    index: usize,
}

impl MockRandom {
    pub fn new(script: &[u8]) -> Self {
        let mut values = heapless::Vec::new();
        values.extend_from_slice(script).unwrap();
        Self {
            script: values,
            index: 0,
        }
    }
}

impl RandomSource for MockRandom {
    fn next_u8(&mut self) -> u8 {
        let value = self.script[self.index % self.script.len()];
        self.index += 1;
        value
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use rgb_led_driver::{BLACK, BLUE, GREEN, RED};
