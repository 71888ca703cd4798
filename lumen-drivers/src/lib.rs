//! Hardware driver implementations
//!
//! This crate provides chip-independent drivers used by the firmware:
//!
//! - Fade drivers (software breathing envelope)
//! - Shared light bank with fade ownership

#![no_std]
#![deny(unsafe_code)]

pub mod bank;
pub mod fade;

pub use bank::SharedBank;
