//! Board-agnostic core logic for the Lumen indicator firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Event queue bridging interrupt-context producers to the control loop
//! - State descriptors and the transition table
//! - Per-mode light behavior (enter / tick / exit)
//! - The control loop driving it all
//! - Hardware boundary traits (lights, inactivity timer)
//! - Board configuration types

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod modes;
pub mod queue;
pub mod state;
pub mod traits;

pub use control::{ControlLoop, Transition};
pub use queue::{EnqueueError, EventQueue};
pub use state::{Event, StateId};
