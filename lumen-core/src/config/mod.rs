//! Configuration types
//!
//! Board timing and the breathing envelope. The transition table and the
//! per-state poll intervals are fixed and live in [`crate::state`].

pub mod types;

pub use types::{BoardConfig, ConfigError, FadeConfig, EVENT_QUEUE_CAPACITY};
