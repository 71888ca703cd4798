//! Inactivity timer task
//!
//! Waits to be armed, then races the timeout against a re-arm. Expiry
//! posts a single `Timeout` event; a re-arm restarts the countdown.
//! There is no cancel, so a timeout armed by a state that has already
//! been left still fires.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};

use lumen_core::traits::InactivityTimer;
use lumen_core::Event;

use crate::channels::{ARM_INACTIVITY, EVENT_QUEUE};

/// [`InactivityTimer`] that arms [`inactivity_task`]
pub struct SignalTimer;

impl InactivityTimer for SignalTimer {
    fn arm(&mut self) {
        ARM_INACTIVITY.signal(());
    }
}

/// Single-shot inactivity timer
#[embassy_executor::task]
pub async fn inactivity_task(timeout: Duration) {
    info!("Inactivity task started ({}ms)", timeout.as_millis());

    loop {
        ARM_INACTIVITY.wait().await;
        debug!("Inactivity timer armed");

        loop {
            match select(Timer::after(timeout), ARM_INACTIVITY.wait()).await {
                Either::First(()) => {
                    match EVENT_QUEUE.try_enqueue(Event::Timeout) {
                        Ok(()) => debug!("Inactivity timeout"),
                        Err(e) => warn!("Timeout dropped: {:?}", e),
                    }
                    break;
                }
                Either::Second(()) => debug!("Inactivity timer re-armed"),
            }
        }
    }
}
