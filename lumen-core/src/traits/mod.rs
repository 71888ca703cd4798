//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod lights;
pub mod timer;

pub use lights::{DutyBank, LightMask, Lights};
pub use timer::InactivityTimer;
