//! RP2040-specific HAL for the indicator firmware
//!
//! This crate provides RP2040-specific implementations:
//! - PWM-driven indicator light bank (implements `lumen_core::traits::DutyBank`)

#![no_std]

pub mod leds;

pub use leds::{PwmLedBank, LED_COUNT, PWM_TOP};
