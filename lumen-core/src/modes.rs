//! Per-state light behavior
//!
//! Each state has an enter, tick and exit action. They are dispatched by
//! matching on [`StateId`], so every state has all three by construction.
//! Tick data (rotation offsets, blink phase) belongs to one state only and
//! persists across activations.

use crate::state::StateId;
use crate::traits::{InactivityTimer, LightMask, Lights};

/// Clockwise light order
pub const CLOCKWISE_PATTERN: [usize; 4] = [0, 1, 3, 2];

/// Counter-clockwise light order
pub const COUNTER_CLOCKWISE_PATTERN: [usize; 4] = [0, 2, 3, 1];

/// Single lit light advancing through a fixed cyclic order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pattern: [usize; 4],
    offset: usize,
}

impl Rotation {
    /// Start at the first entry of `pattern`
    pub const fn new(pattern: [usize; 4]) -> Self {
        Self { pattern, offset: 0 }
    }

    /// Current position in the pattern
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Light the next entry and advance
    fn tick<L: Lights>(&mut self, lights: &mut L) {
        lights.all_off();
        if let Some(&index) = self.pattern.get(self.offset) {
            lights.on(index);
        }
        self.offset = (self.offset + 1) % self.pattern.len();
    }
}

/// All lights toggling together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinker {
    lit_next: bool,
}

impl Blinker {
    /// First tick switches the lights on
    pub const fn new() -> Self {
        Self { lit_next: true }
    }

    /// Whether the next tick switches the lights on
    pub fn lit_next(&self) -> bool {
        self.lit_next
    }

    fn tick<L: Lights>(&mut self, lights: &mut L) {
        if self.lit_next {
            lights.all_on();
        } else {
            lights.all_off();
        }
        self.lit_next = !self.lit_next;
    }
}

impl Default for Blinker {
    fn default() -> Self {
        Self::new()
    }
}

/// Behavior of all four states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modes {
    clockwise: Rotation,
    blink: Blinker,
    counter_clockwise: Rotation,
}

impl Modes {
    pub const fn new() -> Self {
        Self {
            clockwise: Rotation::new(CLOCKWISE_PATTERN),
            blink: Blinker::new(),
            counter_clockwise: Rotation::new(COUNTER_CLOCKWISE_PATTERN),
        }
    }

    /// Clockwise rotation data
    pub fn clockwise(&self) -> &Rotation {
        &self.clockwise
    }

    /// Blink data
    pub fn blink(&self) -> &Blinker {
        &self.blink
    }

    /// Counter-clockwise rotation data
    pub fn counter_clockwise(&self) -> &Rotation {
        &self.counter_clockwise
    }

    /// Run once when `state` becomes active
    pub fn enter<L, T>(&mut self, state: StateId, lights: &mut L, timer: &mut T)
    where
        L: Lights,
        T: InactivityTimer,
    {
        match state {
            StateId::Clockwise | StateId::Blink | StateId::CounterClockwise => lights.all_off(),
            StateId::Breathing => {
                timer.arm();
                let mask = LightMask::all(lights.count());
                lights.start_fade(mask);
            }
        }
    }

    /// Run repeatedly while `state` is active
    pub fn tick<L: Lights>(&mut self, state: StateId, lights: &mut L) {
        match state {
            StateId::Clockwise => self.clockwise.tick(lights),
            StateId::Blink => self.blink.tick(lights),
            StateId::CounterClockwise => self.counter_clockwise.tick(lights),
            // The fade runs on its own
            StateId::Breathing => {}
        }
    }

    /// Run once when `state` is left
    pub fn exit<L: Lights>(&mut self, state: StateId, lights: &mut L) {
        match state {
            StateId::Clockwise | StateId::Blink | StateId::CounterClockwise => lights.all_off(),
            StateId::Breathing => lights.stop_fade(),
        }
    }
}

impl Default for Modes {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{LightOp, MockLights, MockTimer};
    use super::*;

    #[test]
    fn test_clockwise_rotation_wraps() {
        let mut modes = Modes::new();
        let mut lights = MockLights::default();

        for _ in 0..6 {
            modes.tick(StateId::Clockwise, &mut lights);
        }

        assert_eq!(lights.lit().as_slice(), &[0, 1, 3, 2, 0, 1]);
        assert_eq!(modes.clockwise().offset(), 2);
    }

    #[test]
    fn test_counter_clockwise_rotation() {
        let mut modes = Modes::new();
        let mut lights = MockLights::default();

        for _ in 0..4 {
            modes.tick(StateId::CounterClockwise, &mut lights);
        }

        assert_eq!(lights.lit().as_slice(), &[0, 2, 3, 1]);
        assert_eq!(modes.counter_clockwise().offset(), 0);
    }

    #[test]
    fn test_rotation_clears_before_lighting() {
        let mut modes = Modes::new();
        let mut lights = MockLights::default();

        modes.tick(StateId::Clockwise, &mut lights);

        assert_eq!(lights.ops.as_slice(), &[LightOp::AllOff, LightOp::On(0)]);
    }

    #[test]
    fn test_blink_alternates() {
        let mut modes = Modes::new();
        let mut lights = MockLights::default();

        for _ in 0..3 {
            modes.tick(StateId::Blink, &mut lights);
        }

        assert_eq!(
            lights.ops.as_slice(),
            &[LightOp::AllOn, LightOp::AllOff, LightOp::AllOn]
        );
        assert!(!modes.blink().lit_next());
    }

    #[test]
    fn test_rotations_are_independent() {
        let mut modes = Modes::new();
        let mut lights = MockLights::default();

        modes.tick(StateId::Clockwise, &mut lights);
        modes.tick(StateId::Clockwise, &mut lights);

        assert_eq!(modes.clockwise().offset(), 2);
        assert_eq!(modes.counter_clockwise().offset(), 0);
    }

    #[test]
    fn test_breathing_enter_and_exit() {
        let mut modes = Modes::new();
        let mut lights = MockLights::default();
        let mut timer = MockTimer::default();

        modes.enter(StateId::Breathing, &mut lights, &mut timer);
        modes.tick(StateId::Breathing, &mut lights);
        modes.exit(StateId::Breathing, &mut lights);

        assert_eq!(timer.armed, 1);
        assert_eq!(
            lights.ops.as_slice(),
            &[LightOp::StartFade(LightMask::all(4)), LightOp::StopFade]
        );
    }

    #[test]
    fn test_pattern_states_clear_on_enter_and_exit() {
        let mut modes = Modes::new();
        let mut timer = MockTimer::default();

        for state in [StateId::Clockwise, StateId::Blink, StateId::CounterClockwise] {
            let mut lights = MockLights::default();
            modes.enter(state, &mut lights, &mut timer);
            modes.exit(state, &mut lights);
            assert_eq!(lights.ops.as_slice(), &[LightOp::AllOff, LightOp::AllOff]);
        }
        assert_eq!(timer.armed, 0);
    }
}
