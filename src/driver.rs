//! RGB LED driver with transition and effect compositing.
//!
//! Provides [`RgbLedDriver`] which maps a target color, an in-flight
//! transition, and a continuous effect onto three 8-bit PWM duty values,
//! recomputed from a polling loop. Also defines the [`RgbLed`] trait for
//! hardware abstraction.

use core::f32::consts::TAU;

use palette::Srgb;

use crate::colors::linear_interpolate;
use crate::rand::RandomSource;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{BLACK, Effect, NamedColor, Transition};

/// Minimum wall-clock interval between recomputes in [`RgbLedDriver::update`].
const UPDATE_INTERVAL_MS: u64 = 25;

/// Window over which a [`Transition::Fade`] runs.
const FADE_DURATION_MS: u64 = 500;

/// Hold window between glitch resamples.
const GLITCH_HOLD_MS: u64 = 100;

/// Chance (out of 100) that a glitch sample is a random triple rather than
/// a revert to the target color.
const GLITCH_RANDOM_CHANCE: u8 = 70;

const DEFAULT_BLINK_MS: u64 = 1000;
const DEFAULT_PULSE_PERIOD_MS: u64 = 2000;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO PWM channels, LED driver ICs,
/// etc.). The driver hands over final 8-bit duty values with brightness
/// scaling and polarity inversion already applied, so implementations only
/// forward the three channels. Handle any hardware errors internally - this
/// method cannot fail.
pub trait RgbLed {
    /// Writes the three channel duty values to the hardware.
    fn set_color(&mut self, color: Srgb<u8>);
}

/// Drives a single RGB LED by compositing color, transition, and effect
/// state into PWM duty values.
///
/// Call [`update`](Self::update) from your main loop; recomputation is
/// internally rate-limited to one step per 25 ms, so calling it every
/// iteration is fine. The per-tick pipeline is:
///
/// 1. Transition resolution (fade interpolation toward the target)
/// 2. Effect overlay (blink / pulse / glitch) on the transition's output
/// 3. Scaling by the on/off gate and luminosity
/// 4. Polarity inversion for active-low wiring
/// 5. One [`RgbLed::set_color`] write
///
/// Setters may be called at any time, including mid-transition or
/// mid-effect-cycle; new intent simply overwrites old.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - LED implementation type
/// * `T` - Time source implementation type
/// * `R` - Random source implementation type
pub struct RgbLedDriver<'t, I: TimeInstant, L: RgbLed, T: TimeSource<I>, R: RandomSource> {
    led: L,
    time_source: &'t T,
    rng: R,
    pwm_inverted: bool,

    named: NamedColor,
    target: Srgb<u8>,
    previous: Srgb<u8>,
    displayed: Srgb<u8>,

    transition: Transition,
    transition_start: I,

    effect: Effect,
    // Shared by all effects: blink phase start, pulse origin, glitch sample
    // time. Only one effect is active at a time.
    effect_clock: I,
    blink_phase_on: bool,
    blink_on_duration: I::Duration,
    blink_off_duration: I::Duration,
    pulse_period: I::Duration,
    glitch_sample: Option<Srgb<u8>>,

    is_on: bool,
    luminosity: f32,
    last_update: Option<I>,
}

impl<'t, I: TimeInstant, L: RgbLed, T: TimeSource<I>, R: RandomSource>
    RgbLedDriver<'t, I, L, T, R>
{
    /// Creates a new driver and drives the LED to black.
    ///
    /// Set `pwm_inverted` for active-low wiring (common anode LEDs), where
    /// the hardware expects `255 - duty` on every channel.
    pub fn new(led: L, time_source: &'t T, rng: R, pwm_inverted: bool) -> Self {
        let now = time_source.now();

        let mut driver = Self {
            led,
            time_source,
            rng,
            pwm_inverted,
            named: NamedColor::Black,
            target: BLACK,
            previous: BLACK,
            displayed: BLACK,
            transition: Transition::None,
            transition_start: now,
            effect: Effect::None,
            effect_clock: now,
            blink_phase_on: true,
            blink_on_duration: I::Duration::from_millis(DEFAULT_BLINK_MS),
            blink_off_duration: I::Duration::from_millis(DEFAULT_BLINK_MS),
            pulse_period: I::Duration::from_millis(DEFAULT_PULSE_PERIOD_MS),
            glitch_sample: None,
            is_on: true,
            luminosity: 1.0,
            last_update: None,
        };

        driver.emit(BLACK);
        driver
    }

    /// Sets the target color from explicit channel bytes.
    ///
    /// Snapshots the currently *displayed* color as the transition's start
    /// point, so re-targeting mid-fade continues from what the eye currently
    /// sees. Restarts the given transition and recomputes immediately,
    /// bypassing the update throttle.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8, transition: Transition) {
        self.named = NamedColor::Custom;
        self.previous = self.displayed;
        self.target = Srgb::new(r, g, b);
        self.set_transition(transition);
        self.render();
    }

    /// Sets the target color from a preset.
    ///
    /// [`NamedColor::Custom`] has no fixed triple and is an inert no-op.
    pub fn set_named_color(&mut self, color: NamedColor, transition: Transition) {
        let Some(rgb) = color.rgb() else {
            return;
        };

        self.set_color(rgb.red, rgb.green, rgb.blue, transition);
        self.named = color;
    }

    /// Changes the active transition mode and restarts its timer.
    ///
    /// Target and previous colors are left untouched.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
        self.transition_start = self.time_source.now();
    }

    /// Changes the active effect, abandoning the previous effect's
    /// mid-cycle state.
    pub fn set_effect(&mut self, effect: Effect) {
        self.effect = effect;
        self.effect_clock = self.time_source.now();
        self.blink_phase_on = true;
        self.glitch_sample = None;
    }

    /// Sets the global brightness multiplier, clamped to 0.0-1.0.
    pub fn set_luminosity(&mut self, luminosity: f32) {
        self.luminosity = luminosity.clamp(0.0, 1.0);
    }

    /// Sets how long the blink effect holds its "on" phase.
    pub fn set_blink_on_duration(&mut self, duration: I::Duration) {
        self.blink_on_duration = duration;
    }

    /// Sets how long the blink effect holds its "off" phase.
    pub fn set_blink_off_duration(&mut self, duration: I::Duration) {
        self.blink_off_duration = duration;
    }

    /// Sets the full-cycle period of the pulse effect's brightness envelope.
    pub fn set_pulse_period(&mut self, period: I::Duration) {
        self.pulse_period = period;
    }

    /// Enables output. Takes effect on the next tick.
    pub fn on(&mut self) {
        self.is_on = true;
    }

    /// Disables output, forcing all channels to zero on the next tick.
    ///
    /// This is a multiplicative gate, not a mode: target, transition, and
    /// effect state are preserved for when the driver is turned back on.
    pub fn off(&mut self) {
        self.is_on = false;
    }

    /// Recomputes the output and writes it to the LED.
    ///
    /// Rate-limited to one recompute per 25 ms of wall-clock time; calls
    /// inside the window are no-ops. Intended to be invoked from a tight
    /// polling loop.
    pub fn update(&mut self) {
        let now = self.time_source.now();

        if let Some(last) = self.last_update {
            if now.duration_since(last).as_millis() < UPDATE_INTERVAL_MS {
                return;
            }
        }
        self.last_update = Some(now);

        self.render();
    }

    /// Returns the most recently set preset, or `Custom` after a raw set.
    pub fn named_color(&self) -> NamedColor {
        self.named
    }

    /// Returns the active transition mode.
    ///
    /// A completed fade reports [`Transition::None`].
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Returns the active effect.
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Returns the global brightness multiplier.
    pub fn luminosity(&self) -> f32 {
        self.luminosity
    }

    /// Returns the target color.
    pub fn rgb(&self) -> Srgb<u8> {
        self.target
    }

    /// Returns the displayed color: the transition pipeline's latest output,
    /// before effect overlay and output scaling.
    pub fn current_color(&self) -> Srgb<u8> {
        self.displayed
    }

    /// Returns true if output is enabled.
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the blink effect's "on" phase duration.
    pub fn blink_on_duration(&self) -> I::Duration {
        self.blink_on_duration
    }

    /// Returns the blink effect's "off" phase duration.
    pub fn blink_off_duration(&self) -> I::Duration {
        self.blink_off_duration
    }

    /// Returns the pulse effect's full-cycle period.
    pub fn pulse_period(&self) -> I::Duration {
        self.pulse_period
    }

    /// Runs the full pipeline once, unconditionally.
    fn render(&mut self) {
        let now = self.time_source.now();

        let displayed = self.transition_color(now);
        self.displayed = displayed;

        let overlaid = self.effect_color(displayed, now);
        self.emit(overlaid);
    }

    /// Resolves the in-flight transition into the displayed color.
    fn transition_color(&mut self, now: I) -> Srgb<u8> {
        match self.transition {
            Transition::None => self.target,
            Transition::Fade => {
                let elapsed = now.duration_since(self.transition_start).as_millis();
                let t = (elapsed as f32 / FADE_DURATION_MS as f32).min(1.0);

                let rgb = Srgb::new(
                    linear_interpolate(self.previous.red, self.target.red, t),
                    linear_interpolate(self.previous.green, self.target.green, t),
                    linear_interpolate(self.previous.blue, self.target.blue, t),
                );

                if t >= 1.0 {
                    self.transition = Transition::None;
                }

                rgb
            }
        }
    }

    /// Applies the active effect on top of the displayed color.
    fn effect_color(&mut self, rgb: Srgb<u8>, now: I) -> Srgb<u8> {
        match self.effect {
            Effect::Blink => {
                let phase_duration = if self.blink_phase_on {
                    self.blink_on_duration
                } else {
                    self.blink_off_duration
                };

                let elapsed = now.duration_since(self.effect_clock).as_millis();
                if elapsed > phase_duration.as_millis() {
                    self.blink_phase_on = !self.blink_phase_on;
                    self.effect_clock = now;
                }

                if self.blink_phase_on { rgb } else { BLACK }
            }
            Effect::Pulse => {
                let period = self.pulse_period.as_millis();
                if period == 0 {
                    return rgb;
                }

                let elapsed = now.duration_since(self.effect_clock).as_millis();
                let phase = (elapsed % period) as f32 / period as f32;
                let envelope = (libm::sinf(TAU * phase) + 1.0) / 2.0;

                Srgb::new(
                    apply_envelope(rgb.red, envelope),
                    apply_envelope(rgb.green, envelope),
                    apply_envelope(rgb.blue, envelope),
                )
            }
            Effect::Glitch => {
                let elapsed = now.duration_since(self.effect_clock).as_millis();
                if self.glitch_sample.is_none() || elapsed >= GLITCH_HOLD_MS {
                    let roll = self.rng.next_u8() % 100;
                    let sample = if roll < GLITCH_RANDOM_CHANCE {
                        Srgb::new(self.rng.next_u8(), self.rng.next_u8(), self.rng.next_u8())
                    } else {
                        self.target
                    };

                    self.glitch_sample = Some(sample);
                    self.effect_clock = now;
                }

                self.glitch_sample.unwrap_or(rgb)
            }
            Effect::None | Effect::Rainbow => rgb,
        }
    }

    /// Scales by the on/off gate and luminosity, applies polarity inversion,
    /// and writes the result to the LED.
    fn emit(&mut self, color: Srgb<u8>) {
        let scaled = Srgb::new(
            self.scale(color.red),
            self.scale(color.green),
            self.scale(color.blue),
        );
        self.led.set_color(scaled);
    }

    fn scale(&self, value: u8) -> u8 {
        let gate = if self.is_on { 1.0 } else { 0.0 };
        let scaled = libm::roundf(f32::from(value) * gate * self.luminosity) as u8;
        self.apply_pwm_inversion(scaled)
    }

    fn apply_pwm_inversion(&self, value: u8) -> u8 {
        if self.pwm_inverted { 255 - value } else { value }
    }
}

/// Multiplies a channel by a 0.0-1.0 brightness envelope, rounding to nearest.
fn apply_envelope(value: u8, envelope: f32) -> u8 {
    libm::roundf(f32::from(value) * envelope) as u8
}
