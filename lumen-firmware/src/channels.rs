//! Inter-task communication channels
//!
//! Defines the statics shared between the input tasks, the control task
//! and the light effects. Uses embassy-sync primitives so producers may
//! run in any context.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use lumen_core::config::EVENT_QUEUE_CAPACITY;
use lumen_core::traits::LightMask;
use lumen_core::EventQueue;

/// Events from the buttons and the inactivity timer, consumed by the control task
pub static EVENT_QUEUE: EventQueue<CriticalSectionRawMutex, EVENT_QUEUE_CAPACITY> =
    EventQueue::new();

/// Start (or restart) the inactivity countdown
pub static ARM_INACTIVITY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Start the breathing effect on the given lights
pub static FADE_START: Signal<CriticalSectionRawMutex, LightMask> = Signal::new();
