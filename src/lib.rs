#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RgbLedDriver`**: Controls a single RGB LED, compositing target color,
//!   transition, effect, brightness, and polarity into 8-bit duty values
//! - **`NamedColor`**: Preset palette (`Red`, `Orange`, `Pink`, ...) plus
//!   `Custom` for colors set from raw bytes
//! - **`Transition`**: How the displayed color moves to a new target
//!   (instant `None` or 500 ms `Fade`)
//! - **`Effect`**: Continuous time-periodic modulation (`Blink`, `Pulse`,
//!   `Glitch`) applied on top of the displayed color
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`RandomSource`**: Trait to implement for your entropy source
//!
//! The library uses `Srgb<u8>` (0-255 per channel) for all color operations.
//! `RgbLed` implementations receive final duty values with brightness and
//! polarity already applied, so they only forward the three channels.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod driver;
pub mod rand;
pub mod time;
pub mod types;

pub use driver::{RgbLed, RgbLedDriver};
pub use rand::RandomSource;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Effect, NamedColor, Transition};

pub use types::{
    BLACK, BLUE, CYAN, GREEN, MAGENTA, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW,
};
