//! Configuration type definitions

/// Slots in the firmware's event queue
pub const EVENT_QUEUE_CAPACITY: usize = 10;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `duty_min` must be below `duty_max`
    EmptyFadeRange,
    /// `duty_step` must be non-zero
    ZeroFadeStep,
    /// `step_interval_ms` must be non-zero
    ZeroFadeInterval,
    /// Inactivity timeout must be non-zero
    ZeroTimeout,
    /// Button debounce time must be non-zero
    ZeroDebounce,
}

/// Breathing effect envelope
///
/// Duty ramps from `duty_min` to `duty_max` in `duty_step` increments,
/// one increment per `step_interval_ms`, holds at the top for
/// `on_time_ms`, ramps back down and holds at the bottom for
/// `off_time_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeConfig {
    /// Lowest duty (0-255)
    pub duty_min: u8,
    /// Highest duty (0-255)
    pub duty_max: u8,
    /// Duty change per step
    pub duty_step: u8,
    /// Hold time at `duty_max`
    pub on_time_ms: u32,
    /// Hold time at `duty_min`
    pub off_time_ms: u32,
    /// Time between envelope steps
    pub step_interval_ms: u32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            duty_min: 0,
            duty_max: 220,
            duty_step: 1,
            on_time_ms: 5000,
            off_time_ms: 5000,
            step_interval_ms: 8,
        }
    }
}

impl FadeConfig {
    /// Validate the envelope parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duty_min >= self.duty_max {
            return Err(ConfigError::EmptyFadeRange);
        }
        if self.duty_step == 0 {
            return Err(ConfigError::ZeroFadeStep);
        }
        if self.step_interval_ms == 0 {
            return Err(ConfigError::ZeroFadeInterval);
        }
        Ok(())
    }

    /// Envelope steps spent holding at the top
    pub fn on_steps(&self) -> u32 {
        self.on_time_ms / self.step_interval_ms.max(1)
    }

    /// Envelope steps spent holding at the bottom
    pub fn off_steps(&self) -> u32 {
        self.off_time_ms / self.step_interval_ms.max(1)
    }
}

/// Board-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Settle time before a button press counts
    pub debounce_ms: u32,
    /// Breathing mode inactivity timeout
    pub inactivity_timeout_ms: u32,
    /// Lights are lit when their pin is driven high
    pub leds_active_high: bool,
    /// Breathing envelope
    pub fade: FadeConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            inactivity_timeout_ms: 10_000,
            leds_active_high: true,
            fade: FadeConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Validate the whole board configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.inactivity_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.fade.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(BoardConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_fade_range() {
        let fade = FadeConfig {
            duty_min: 100,
            duty_max: 100,
            ..Default::default()
        };
        assert_eq!(fade.validate(), Err(ConfigError::EmptyFadeRange));
    }

    #[test]
    fn test_zero_step_and_interval() {
        let fade = FadeConfig {
            duty_step: 0,
            ..Default::default()
        };
        assert_eq!(fade.validate(), Err(ConfigError::ZeroFadeStep));

        let fade = FadeConfig {
            step_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(fade.validate(), Err(ConfigError::ZeroFadeInterval));
    }

    #[test]
    fn test_board_errors() {
        let config = BoardConfig {
            debounce_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounce));

        let config = BoardConfig {
            inactivity_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_hold_steps() {
        let fade = FadeConfig::default();
        assert_eq!(fade.on_steps(), 625);
        assert_eq!(fade.off_steps(), 625);
    }
}
