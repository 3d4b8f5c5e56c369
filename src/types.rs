//! Core types for color, transition, and effect selection.

use palette::Srgb;

pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const YELLOW: Srgb<u8> = Srgb::new(255, 255, 0);
pub const CYAN: Srgb<u8> = Srgb::new(0, 255, 255);
pub const MAGENTA: Srgb<u8> = Srgb::new(255, 0, 255);
pub const ORANGE: Srgb<u8> = Srgb::new(255, 165, 0);
pub const PURPLE: Srgb<u8> = Srgb::new(128, 0, 128);
pub const PINK: Srgb<u8> = Srgb::new(255, 105, 180);

/// Preset colors resolvable to fixed RGB triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamedColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Purple,
    Pink,

    /// Marks a color that was set from explicit channel bytes, not a preset.
    Custom,
}

impl NamedColor {
    /// Resolves the preset to its RGB triple.
    ///
    /// Returns `None` for [`NamedColor::Custom`], which has no fixed triple.
    pub const fn rgb(self) -> Option<Srgb<u8>> {
        match self {
            NamedColor::Black => Some(BLACK),
            NamedColor::White => Some(WHITE),
            NamedColor::Red => Some(RED),
            NamedColor::Green => Some(GREEN),
            NamedColor::Blue => Some(BLUE),
            NamedColor::Yellow => Some(YELLOW),
            NamedColor::Cyan => Some(CYAN),
            NamedColor::Magenta => Some(MAGENTA),
            NamedColor::Orange => Some(ORANGE),
            NamedColor::Purple => Some(PURPLE),
            NamedColor::Pink => Some(PINK),
            NamedColor::Custom => None,
        }
    }
}

/// How the displayed color moves to a newly set target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Instant cut to the target color.
    None,

    /// Per-channel linear interpolation over 500 ms, from the color that was
    /// displayed when the target was set. Self-terminates to `None`.
    Fade,
}

/// Continuous time-periodic modulation applied on top of the displayed color.
///
/// Only one effect is active at a time; selecting a new one abandons the
/// mid-cycle state of the previous effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Pass-through: the displayed color is shown unmodified.
    None,

    /// Alternates the displayed color with black, using independently
    /// configurable on and off phase durations.
    Blink,

    /// Sinusoidal brightness envelope over a configurable period.
    Pulse,

    /// Reserved for hue rotation. Currently passes colors through unchanged.
    Rainbow,

    /// Resamples every 100 ms: usually a fully random triple, sometimes the
    /// target color, held for the full window. Produces a flicker/static look.
    Glitch,
}
