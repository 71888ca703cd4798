//! Control task
//!
//! Owns the state machine and runs it forever, logging every transition.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Delay;

use lumen_core::config::EVENT_QUEUE_CAPACITY;
use lumen_core::{ControlLoop, StateId};

use crate::channels::EVENT_QUEUE;
use crate::lights::BoardLights;
use crate::tasks::SignalTimer;

type Machine = ControlLoop<
    'static,
    CriticalSectionRawMutex,
    BoardLights,
    SignalTimer,
    Delay,
    EVENT_QUEUE_CAPACITY,
>;

/// State machine task
#[embassy_executor::task]
pub async fn control_task() {
    info!("Control task started in {:?}", StateId::INITIAL);

    let mut machine: Machine = ControlLoop::new(&EVENT_QUEUE, BoardLights, SignalTimer, Delay);

    loop {
        let transition = machine.run_state().await;
        if transition.is_self_loop() {
            debug!("{:?} stays on {:?}", transition.from, transition.event);
        } else {
            info!(
                "{:?} -> {:?} on {:?}",
                transition.from, transition.to, transition.event
            );
        }
    }
}
