//! Fade drivers

pub mod softblink;

pub use softblink::{SoftBlink, SoftBlinkPhase};
