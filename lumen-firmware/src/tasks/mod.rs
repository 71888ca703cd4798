//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod control;
pub mod fade;
pub mod inactivity;

pub use buttons::button_task;
pub use control::control_task;
pub use fade::fade_task;
pub use inactivity::{inactivity_task, SignalTimer};
