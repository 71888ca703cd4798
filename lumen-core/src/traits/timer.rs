//! Inactivity timer trait

/// Single-shot timer that produces `Event::Timeout` when it expires
///
/// There is no cancel: a timer armed by a state that has since been left
/// still fires, and the next state's transition row decides what the
/// stale timeout does.
pub trait InactivityTimer {
    /// Start the countdown, restarting it if already running
    fn arm(&mut self);
}
