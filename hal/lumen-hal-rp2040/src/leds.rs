//! PWM indicator light bank
//!
//! Four lights on two PWM slices, two channels each:
//!
//! | Light | Slice | Channel |
//! |-------|-------|---------|
//! | 0     | low   | A       |
//! | 1     | low   | B       |
//! | 2     | high  | A       |
//! | 3     | high  | B       |
//!
//! With the default board wiring the low slice is PWM1 (GPIO2/3) and the
//! high slice is PWM2 (GPIO4/5).

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use lumen_core::traits::{DutyBank, LightMask};

/// Number of lights in the bank
pub const LED_COUNT: usize = 4;

/// PWM counter wrap value, giving 8-bit duty resolution
pub const PWM_TOP: u16 = 255;

/// Compare value for a duty; full duty sits above `top` so the output never drops
fn compare(duty: u8) -> u16 {
    if duty == u8::MAX {
        PWM_TOP + 1
    } else {
        duty as u16
    }
}

/// Duty channel within a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    A,
    B,
}

/// Four lights driven by two PWM slices
pub struct PwmLedBank {
    slices: [Pwm<'static>; 2],
    configs: [PwmConfig; 2],
}

impl PwmLedBank {
    /// Take ownership of two configured slices and switch every light off
    ///
    /// `active_high` selects the polarity: when false the outputs are
    /// inverted so duty 0 still means "off".
    pub fn new(low: Pwm<'static>, high: Pwm<'static>, active_high: bool) -> Self {
        let config = Self::slice_config(active_high);
        let mut bank = Self {
            slices: [low, high],
            configs: [config.clone(), config],
        };
        bank.apply(0);
        bank.apply(1);
        bank
    }

    /// PWM config for a slice with both outputs off
    ///
    /// Pass it when constructing the `Pwm` instances so the pins never
    /// glitch on before [`PwmLedBank::new`] takes over.
    pub fn slice_config(active_high: bool) -> PwmConfig {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        config.compare_b = 0;
        config.invert_a = !active_high;
        config.invert_b = !active_high;
        config
    }

    fn locate(index: usize) -> Option<(usize, Channel)> {
        if index >= LED_COUNT {
            return None;
        }
        let channel = if index % 2 == 0 { Channel::A } else { Channel::B };
        Some((index / 2, channel))
    }

    fn apply(&mut self, slice: usize) {
        self.slices[slice].set_config(&self.configs[slice]);
    }
}

impl DutyBank for PwmLedBank {
    fn count(&self) -> usize {
        LED_COUNT
    }

    fn set_duty(&mut self, index: usize, duty: u8) {
        let Some((slice, channel)) = Self::locate(index) else {
            return;
        };
        let config = &mut self.configs[slice];
        match channel {
            Channel::A => config.compare_a = compare(duty),
            Channel::B => config.compare_b = compare(duty),
        }
        self.apply(slice);
    }

    fn set_all(&mut self, duty: u8) {
        for config in self.configs.iter_mut() {
            config.compare_a = compare(duty);
            config.compare_b = compare(duty);
        }
        self.apply(0);
        self.apply(1);
    }

    /// Writes each slice once, however many of its lights are selected
    fn set_masked(&mut self, mask: LightMask, duty: u8) {
        let mut touched = [false; 2];
        for index in mask.iter() {
            if let Some((slice, channel)) = Self::locate(index) {
                match channel {
                    Channel::A => self.configs[slice].compare_a = compare(duty),
                    Channel::B => self.configs[slice].compare_b = compare(duty),
                }
                touched[slice] = true;
            }
        }
        for (slice, touched) in touched.into_iter().enumerate() {
            if touched {
                self.apply(slice);
            }
        }
    }
}
