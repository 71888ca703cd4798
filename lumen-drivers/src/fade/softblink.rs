//! Software breathing envelope
//!
//! Produces the duty sequence for a slow "breathing" fade:
//!
//! ```text
//! duty_max      ┌────on────┐
//!              ╱            ╲
//!             ╱              ╲
//! duty_min ──┘                └───off───┘ ...
//!           RampUp  HoldOn  RampDown  HoldOff
//! ```
//!
//! # Usage
//!
//! The driver is advanced by calling `step()` once per
//! `step_interval_ms`. It returns the duty to apply to every faded light.
//!
//! ```ignore
//! let mut blink = SoftBlink::new(config);
//! let mut ticker = Ticker::every(Duration::from_millis(config.step_interval_ms as u64));
//! loop {
//!     ticker.next().await;
//!     leds.set_masked(mask, blink.step());
//! }
//! ```

use lumen_core::config::FadeConfig;

/// Envelope phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoftBlinkPhase {
    /// Duty rising towards `duty_max`
    RampUp,
    /// Holding at `duty_max`
    HoldOn,
    /// Duty falling towards `duty_min`
    RampDown,
    /// Holding at `duty_min`
    HoldOff,
}

/// Breathing envelope generator
pub struct SoftBlink {
    config: FadeConfig,
    duty: u8,
    phase: SoftBlinkPhase,
    /// Steps left in the current hold phase
    hold_remaining: u32,
}

impl SoftBlink {
    /// Create a generator sitting at the bottom of the ramp
    pub fn new(config: FadeConfig) -> Self {
        Self {
            duty: config.duty_min,
            config,
            phase: SoftBlinkPhase::RampUp,
            hold_remaining: 0,
        }
    }

    /// Restart from the bottom of the ramp
    pub fn reset(&mut self) {
        self.duty = self.config.duty_min;
        self.phase = SoftBlinkPhase::RampUp;
        self.hold_remaining = 0;
    }

    /// Get the configuration
    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    /// Duty returned by the last step
    pub fn duty(&self) -> u8 {
        self.duty
    }

    /// Current envelope phase
    pub fn phase(&self) -> SoftBlinkPhase {
        self.phase
    }

    /// Advance one step and return the duty to apply
    pub fn step(&mut self) -> u8 {
        match self.phase {
            SoftBlinkPhase::RampUp => self.ramp_up(),
            SoftBlinkPhase::HoldOn => {
                if self.hold_remaining > 0 {
                    self.hold_remaining -= 1;
                } else {
                    self.ramp_down();
                }
            }
            SoftBlinkPhase::RampDown => self.ramp_down(),
            SoftBlinkPhase::HoldOff => {
                if self.hold_remaining > 0 {
                    self.hold_remaining -= 1;
                } else {
                    self.ramp_up();
                }
            }
        }
        self.duty
    }

    fn ramp_up(&mut self) {
        self.phase = SoftBlinkPhase::RampUp;
        self.duty = self
            .duty
            .saturating_add(self.config.duty_step)
            .min(self.config.duty_max);
        if self.duty >= self.config.duty_max {
            self.phase = SoftBlinkPhase::HoldOn;
            self.hold_remaining = self.config.on_steps();
        }
    }

    fn ramp_down(&mut self) {
        self.phase = SoftBlinkPhase::RampDown;
        self.duty = self
            .duty
            .saturating_sub(self.config.duty_step)
            .max(self.config.duty_min);
        if self.duty <= self.config.duty_min {
            self.phase = SoftBlinkPhase::HoldOff;
            self.hold_remaining = self.config.off_steps();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> FadeConfig {
        FadeConfig {
            duty_min: 0,
            duty_max: 3,
            duty_step: 1,
            on_time_ms: 20,
            off_time_ms: 10,
            step_interval_ms: 10,
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut blink = SoftBlink::new(small_config());
        let mut duties = [0u8; 10];
        for duty in duties.iter_mut() {
            *duty = blink.step();
        }

        // Up to max, hold 2 steps, down to min, hold 1 step, up again
        assert_eq!(duties, [1, 2, 3, 3, 3, 2, 1, 0, 0, 1]);
        assert_eq!(blink.phase(), SoftBlinkPhase::RampUp);
    }

    #[test]
    fn test_phases() {
        let mut blink = SoftBlink::new(small_config());
        assert_eq!(blink.phase(), SoftBlinkPhase::RampUp);

        for _ in 0..3 {
            blink.step();
        }
        assert_eq!(blink.phase(), SoftBlinkPhase::HoldOn);

        for _ in 0..5 {
            blink.step();
        }
        assert_eq!(blink.phase(), SoftBlinkPhase::HoldOff);
        assert_eq!(blink.duty(), 0);
    }

    #[test]
    fn test_step_overshoot_clamps() {
        let config = FadeConfig {
            duty_min: 10,
            duty_max: 25,
            duty_step: 10,
            on_time_ms: 0,
            off_time_ms: 0,
            step_interval_ms: 1,
        };
        let mut blink = SoftBlink::new(config);

        assert_eq!(blink.step(), 20);
        assert_eq!(blink.step(), 25);
        // No hold: next step already ramps down
        assert_eq!(blink.step(), 15);
        assert_eq!(blink.step(), 10);
        assert_eq!(blink.step(), 20);
    }

    #[test]
    fn test_duty_stays_in_range() {
        let config = FadeConfig::default();
        let mut blink = SoftBlink::new(config);

        for _ in 0..5000 {
            let duty = blink.step();
            assert!(duty >= config.duty_min && duty <= config.duty_max);
        }
    }

    #[test]
    fn test_reset() {
        let mut blink = SoftBlink::new(small_config());
        for _ in 0..4 {
            blink.step();
        }
        blink.reset();

        assert_eq!(blink.duty(), 0);
        assert_eq!(blink.phase(), SoftBlinkPhase::RampUp);
        assert_eq!(blink.step(), 1);
    }

    #[test]
    fn test_default_ramp_length() {
        let mut blink = SoftBlink::new(FadeConfig::default());
        let mut steps = 0;
        while blink.phase() == SoftBlinkPhase::RampUp {
            blink.step();
            steps += 1;
        }
        assert_eq!(steps, 220);
        assert_eq!(blink.duty(), 220);
    }
}
