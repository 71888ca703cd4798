//! Indicator light bank trait

/// Set of light indices, one bit per light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightMask(u32);

impl LightMask {
    /// Largest bank a mask can describe
    pub const MAX_LIGHTS: usize = 32;

    /// Mask from raw bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Mask covering lights `0..count`
    pub const fn all(count: usize) -> Self {
        if count >= Self::MAX_LIGHTS {
            Self::from_bits(u32::MAX)
        } else {
            Self::from_bits((1u32 << count as u32) - 1)
        }
    }

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if `index` is part of the mask
    pub const fn contains(self, index: usize) -> bool {
        index < Self::MAX_LIGHTS && self.0 & (1u32 << index as u32) != 0
    }

    /// Check if the mask selects no light
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices in the mask, lowest first
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..Self::MAX_LIGHTS).filter(move |&i| self.contains(i))
    }
}

/// Trait for a fixed-size bank of indicator lights
///
/// Exactly one state drives the bank at a time. `start_fade` hands the
/// selected lights to an autonomous breathing effect that keeps running
/// until `stop_fade` is called; `stop_fade` must take effect before it
/// returns so the next state's output is never overwritten.
pub trait Lights {
    /// Number of lights in the bank
    fn count(&self) -> usize;

    /// Switch every light off
    fn all_off(&mut self);

    /// Switch every light on
    fn all_on(&mut self);

    /// Switch one light on, leaving the others as they are
    ///
    /// Out-of-range indices are ignored.
    fn on(&mut self, index: usize);

    /// Start the breathing effect on the lights in `mask`
    fn start_fade(&mut self, mask: LightMask);

    /// Stop the breathing effect and switch the faded lights off
    fn stop_fade(&mut self);
}

/// Raw per-light duty output
///
/// Duty 0 is off and 255 is fully on. Out-of-range indices are ignored.
pub trait DutyBank {
    /// Number of lights in the bank
    fn count(&self) -> usize;

    /// Set one light's duty
    fn set_duty(&mut self, index: usize, duty: u8);

    /// Set every light to the same duty
    fn set_all(&mut self, duty: u8);

    /// Set the lights selected by `mask`, leaving the rest alone
    fn set_masked(&mut self, mask: LightMask, duty: u8) {
        for index in mask.iter() {
            self.set_duty(index, duty);
        }
    }
}
