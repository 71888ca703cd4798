//! Button input task
//!
//! One instance per button. A press is a falling edge that is still low
//! after the debounce time; it is posted to the event queue once, then
//! the task waits for a clean release before listening again.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use lumen_core::Event;

use crate::channels::EVENT_QUEUE;

/// Button watch task (buttons are active low with pull-ups)
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(mut button: Input<'static>, event: Event, debounce: Duration) {
    info!("Button task started for {:?}", event);

    loop {
        button.wait_for_falling_edge().await;

        // Bounce filter
        Timer::after(debounce).await;
        if button.is_high() {
            trace!("{:?} bounce ignored", event);
            continue;
        }

        match EVENT_QUEUE.try_enqueue(event) {
            Ok(()) => debug!("{:?} pressed", event),
            Err(e) => warn!("{:?} dropped: {:?}", event, e),
        }

        button.wait_for_high().await;
        Timer::after(debounce).await;
    }
}
