//! Lumen - Indicator Light Mode Controller
//!
//! Main firmware binary for RP2040-based boards. Four lights cycle
//! through rotation, blink and breathing patterns; three buttons and an
//! inactivity timeout feed a table-driven state machine.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::Pwm;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use lumen_core::Event;
use lumen_hal_rp2040::PwmLedBank;

use crate::config::BOARD;

mod channels;
mod config;
mod lights;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumen firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    if let Err(e) = BOARD.validate() {
        defmt::panic!("Invalid board configuration: {:?}", e);
    }
    info!(
        "Board config: debounce={}ms, timeout={}ms, active_high={}",
        BOARD.debounce_ms, BOARD.inactivity_timeout_ms, BOARD.leds_active_high
    );

    // Lights: GPIO2/3 on PWM slice 1, GPIO4/5 on PWM slice 2
    let slice_config = PwmLedBank::slice_config(BOARD.leds_active_high);
    let low = Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, slice_config.clone());
    let high = Pwm::new_output_ab(p.PWM_SLICE2, p.PIN_4, p.PIN_5, slice_config);
    lights::install(PwmLedBank::new(low, high, BOARD.leds_active_high));
    info!("Light bank initialized");

    // Buttons: active low with pull-ups
    let debounce = Duration::from_millis(BOARD.debounce_ms as u64);
    let buttons = [
        (Input::new(p.PIN_10, Pull::Up), Event::Button1),
        (Input::new(p.PIN_11, Pull::Up), Event::Button2),
        (Input::new(p.PIN_12, Pull::Up), Event::Button3),
    ];
    for (input, event) in buttons {
        spawner
            .spawn(tasks::button_task(input, event, debounce))
            .unwrap();
    }

    let timeout = Duration::from_millis(BOARD.inactivity_timeout_ms as u64);
    spawner.spawn(tasks::inactivity_task(timeout)).unwrap();
    spawner.spawn(tasks::fade_task(BOARD.fade)).unwrap();
    spawner.spawn(tasks::control_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
