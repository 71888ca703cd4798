//! Breathing effect task
//!
//! Runs the soft-blink envelope on the lights handed over by
//! `FADE_START` until the control task stops the fade.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use lumen_core::config::FadeConfig;
use lumen_drivers::fade::SoftBlink;

use crate::channels::FADE_START;
use crate::lights;

/// Breathing effect task
#[embassy_executor::task]
pub async fn fade_task(config: FadeConfig) {
    info!("Fade task started");

    let mut blink = SoftBlink::new(config);
    let interval = Duration::from_millis(config.step_interval_ms as u64);

    let mut mask = FADE_START.wait().await;
    loop {
        debug!("Fade started on {:?}", mask);
        blink.reset();
        let mut ticker = Ticker::every(interval);

        mask = loop {
            match select(ticker.next(), FADE_START.wait()).await {
                Either::First(()) => {
                    if !lights::apply_fade(mask, blink.step()) {
                        debug!("Fade stopped");
                        break FADE_START.wait().await;
                    }
                }
                // Restart the envelope on the new mask
                Either::Second(next) => break next,
            }
        };
    }
}
