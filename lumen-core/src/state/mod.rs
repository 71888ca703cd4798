//! State machine definition
//!
//! Four light modes, a closed set of events, and a fixed table mapping
//! every (mode, event) pair to the next mode.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{StateDescriptor, StateId, TransitionTable, STATES, TRANSITIONS};
