//! Shared light bank
//!
//! The PWM bank lives in a [`SharedBank`] written by the control task
//! (through [`BoardLights`]) and by the fade task. The slot tracks fade
//! ownership, so once `stop_fade` returns no fade step can touch the
//! lights again.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use lumen_core::traits::{LightMask, Lights};
use lumen_drivers::SharedBank;
use lumen_hal_rp2040::PwmLedBank;

use crate::channels::FADE_START;

static BANK: SharedBank<CriticalSectionRawMutex, PwmLedBank> = SharedBank::new();

/// Hand the PWM bank over to the shared slot
pub fn install(leds: PwmLedBank) {
    BANK.install(leds);
}

/// Apply one fade step to `mask`
///
/// Returns false once the fade on `mask` has been stopped.
pub fn apply_fade(mask: LightMask, duty: u8) -> bool {
    let applied = BANK.apply_fade(mask, duty);
    if applied {
        trace!("Fade duty {}", duty);
    }
    applied
}

/// [`Lights`] implementation over the shared bank
pub struct BoardLights;

impl Lights for BoardLights {
    fn count(&self) -> usize {
        BANK.count()
    }

    fn all_off(&mut self) {
        BANK.all_off();
    }

    fn all_on(&mut self) {
        BANK.all_on();
    }

    fn on(&mut self, index: usize) {
        BANK.on(index);
    }

    fn start_fade(&mut self, mask: LightMask) {
        if BANK.start_fade(mask) {
            FADE_START.signal(mask);
        } else {
            warn!("Fade not started on {:?}", mask);
        }
    }

    fn stop_fade(&mut self) {
        if let Some(mask) = BANK.stop_fade() {
            trace!("Fade released {:?}", mask);
        }
    }
}
