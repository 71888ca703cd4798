//! Control loop
//!
//! Drives the state machine: for the active state, run its enter action
//! once, then repeatedly tick, wait the state's poll interval and poll the
//! event queue. The first real event ends the activation: the exit action
//! runs and the transition table picks the next state.
//!
//! The wait is a fixed-interval delay rather than a blocking receive, so
//! tick cadence (rotation speed, blink rate) stays per-state while input
//! latency is bounded by one poll interval.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::modes::Modes;
use crate::queue::EventQueue;
use crate::state::{Event, StateId};
use crate::traits::{InactivityTimer, Lights};

/// One completed state activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// State that was active
    pub from: StateId,
    /// Event that ended it
    pub event: Event,
    /// State that becomes active next
    pub to: StateId,
}

impl Transition {
    /// Check if the machine stays in the same state (exit and enter still run)
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// State machine driver
///
/// Owns the light bank, the inactivity timer and the delay; shares the
/// event queue with the input sources.
pub struct ControlLoop<'q, M, L, T, D, const N: usize>
where
    M: RawMutex,
    L: Lights,
    T: InactivityTimer,
    D: DelayNs,
{
    queue: &'q EventQueue<M, N>,
    lights: L,
    timer: T,
    delay: D,
    modes: Modes,
    current: StateId,
}

impl<'q, M, L, T, D, const N: usize> ControlLoop<'q, M, L, T, D, N>
where
    M: RawMutex,
    L: Lights,
    T: InactivityTimer,
    D: DelayNs,
{
    /// Create a control loop starting in [`StateId::INITIAL`]
    pub fn new(queue: &'q EventQueue<M, N>, lights: L, timer: T, delay: D) -> Self {
        Self {
            queue,
            lights,
            timer,
            delay,
            modes: Modes::new(),
            current: StateId::INITIAL,
        }
    }

    /// Currently active state
    pub fn current(&self) -> StateId {
        self.current
    }

    /// Per-state tick data
    pub fn modes(&self) -> &Modes {
        &self.modes
    }

    /// The light bank
    pub fn lights(&self) -> &L {
        &self.lights
    }

    /// Mutable access to the light bank
    pub fn lights_mut(&mut self) -> &mut L {
        &mut self.lights
    }

    /// The inactivity timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Run the current state from enter to exit and advance to the next
    pub async fn run_state(&mut self) -> Transition {
        let state = self.current;

        self.modes.enter(state, &mut self.lights, &mut self.timer);

        let event = loop {
            self.modes.tick(state, &mut self.lights);
            self.delay.delay_ms(state.poll_interval_ms()).await;

            let event = self.queue.try_dequeue();
            if !event.is_none() {
                break event;
            }
        };

        self.modes.exit(state, &mut self.lights);

        let next = state.transition(event);
        self.current = next;

        Transition {
            from: state,
            event,
            to: next,
        }
    }
}
