//! Shared light bank with fade ownership
//!
//! The bank is written from two places: the control loop (solid patterns)
//! and the fade task (breathing steps). Both go through one blocking
//! mutex. The slot remembers which lights the fade currently owns, and a
//! fade step is only applied while its mask is still the owned one, so
//! once [`SharedBank::stop_fade`] returns no fade step can touch the
//! lights again.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use lumen_core::traits::{DutyBank, LightMask};

/// Duty for a fully lit light
pub const FULL_DUTY: u8 = u8::MAX;

struct Slot<B> {
    bank: B,
    /// Lights currently owned by the fade
    fade: Option<LightMask>,
}

/// Light bank shared between the control loop and the fade task
///
/// Every operation is a no-op until a bank is installed.
pub struct SharedBank<M: RawMutex, B> {
    slot: Mutex<M, RefCell<Option<Slot<B>>>>,
}

impl<M: RawMutex, B: DutyBank> SharedBank<M, B> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(None)),
        }
    }

    /// Hand the bank over to the slot, switching every light off
    pub fn install(&self, mut bank: B) {
        bank.set_all(0);
        self.slot.lock(|slot| {
            slot.replace(Some(Slot { bank, fade: None }));
        });
    }

    fn with<R>(&self, f: impl FnOnce(&mut Slot<B>) -> R) -> Option<R> {
        self.slot.lock(|slot| slot.borrow_mut().as_mut().map(f))
    }

    /// Number of lights, 0 before a bank is installed
    pub fn count(&self) -> usize {
        self.with(|slot| slot.bank.count()).unwrap_or(0)
    }

    /// Switch every light off
    pub fn all_off(&self) {
        self.with(|slot| slot.bank.set_all(0));
    }

    /// Switch every light fully on
    pub fn all_on(&self) {
        self.with(|slot| slot.bank.set_all(FULL_DUTY));
    }

    /// Switch one light fully on
    pub fn on(&self, index: usize) {
        self.with(|slot| slot.bank.set_duty(index, FULL_DUTY));
    }

    /// Hand the lights in `mask` to the fade, starting from dark
    ///
    /// Returns false if there is nothing to fade (empty mask or no bank).
    pub fn start_fade(&self, mask: LightMask) -> bool {
        if mask.is_empty() {
            return false;
        }
        self.with(|slot| {
            slot.fade = Some(mask);
            slot.bank.set_masked(mask, 0);
        })
        .is_some()
    }

    /// Take the lights back from the fade and switch them off
    ///
    /// Returns the mask the fade owned, if any.
    pub fn stop_fade(&self) -> Option<LightMask> {
        self.with(|slot| {
            let mask = slot.fade.take()?;
            slot.bank.set_masked(mask, 0);
            Some(mask)
        })
        .flatten()
    }

    /// Apply one fade step to `mask`
    ///
    /// Returns false (and writes nothing) once the fade on `mask` has been
    /// stopped or replaced.
    pub fn apply_fade(&self, mask: LightMask, duty: u8) -> bool {
        self.with(|slot| {
            if slot.fade == Some(mask) {
                slot.bank.set_masked(mask, duty);
                true
            } else {
                false
            }
        })
        .unwrap_or(false)
    }
}

impl<M: RawMutex, B: DutyBank> Default for SharedBank<M, B> {
    fn default() -> Self {
        Self::new()
    }
}
