//! State machine definition
//!
//! All light behavior is a function of the current state; the next state
//! is a function of the current state and an event, looked up in a fixed
//! table.

use super::events::Event;

/// Light modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StateId {
    /// One light at a time, rotating clockwise
    Clockwise = 0,
    /// All lights toggling together
    Blink = 1,
    /// One light at a time, rotating counter-clockwise
    CounterClockwise = 2,
    /// Ambient breathing across all lights, guarded by the inactivity timer
    Breathing = 3,
}

impl StateId {
    /// Number of states
    pub const COUNT: usize = 4;

    /// State entered at power-on
    pub const INITIAL: StateId = StateId::Clockwise;

    /// All states in table row order
    pub const ALL: [StateId; StateId::COUNT] = [
        StateId::Clockwise,
        StateId::Blink,
        StateId::CounterClockwise,
        StateId::Breathing,
    ];

    /// Row index into the transition table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical descriptor for this state
    pub fn descriptor(self) -> &'static StateDescriptor {
        &STATES[self.index()]
    }

    /// Time to wait between ticks (and queue polls) while this state is active
    pub fn poll_interval_ms(self) -> u32 {
        self.descriptor().poll_interval_ms
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> StateId {
        TRANSITIONS.next(self, event)
    }
}

/// Immutable per-state record
///
/// The enter/tick/exit hooks are dispatched by `id` in [`crate::modes::Modes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateDescriptor {
    pub id: StateId,
    pub poll_interval_ms: u32,
}

/// Canonical state records, indexed by `StateId::index()`
pub static STATES: [StateDescriptor; StateId::COUNT] = [
    StateDescriptor {
        id: StateId::Clockwise,
        poll_interval_ms: 200,
    },
    StateDescriptor {
        id: StateId::Blink,
        poll_interval_ms: 200,
    },
    StateDescriptor {
        id: StateId::CounterClockwise,
        poll_interval_ms: 100,
    },
    StateDescriptor {
        id: StateId::Breathing,
        poll_interval_ms: 200,
    },
];

/// Total mapping from (state, event) to the next state
///
/// Every cell is filled by construction, so there is no undefined transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTable {
    rows: [[StateId; Event::COUNT]; StateId::COUNT],
}

impl TransitionTable {
    /// Build a table from rows indexed by state, columns indexed by event
    pub const fn new(rows: [[StateId; Event::COUNT]; StateId::COUNT]) -> Self {
        Self { rows }
    }

    /// Next state for `event` while in `state`
    pub const fn next(&self, state: StateId, event: Event) -> StateId {
        self.rows[state.index()][event.index()]
    }

    /// Check that an empty poll never moves the machine
    pub const fn none_is_self_loop(&self) -> bool {
        let mut row = 0;
        while row < StateId::COUNT {
            if self.rows[row][Event::None.index()] as usize != row {
                return false;
            }
            row += 1;
        }
        true
    }
}

/// The transition table
///
/// Columns: Button1, Button2, Button3, Timeout, None.
pub const TRANSITIONS: TransitionTable = {
    use StateId::*;
    TransitionTable::new([
        [Clockwise, Blink, Breathing, Clockwise, Clockwise],
        [Clockwise, Blink, Breathing, Blink, Blink],
        [Blink, Clockwise, Breathing, CounterClockwise, CounterClockwise],
        [Breathing, Breathing, Clockwise, Breathing, Breathing],
    ])
};

const _: () = assert!(
    TRANSITIONS.none_is_self_loop(),
    "every state must map Event::None to itself"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_total() {
        for state in StateId::ALL {
            for event in Event::ALL {
                let next = state.transition(event);
                assert!(StateId::ALL.contains(&next));
            }
        }
    }

    #[test]
    fn test_none_is_self_loop() {
        for state in StateId::ALL {
            assert_eq!(state.transition(Event::None), state);
        }
    }

    #[test]
    fn test_self_loop_check_rejects_bad_table() {
        use StateId::*;
        let bad = TransitionTable::new([
            [Clockwise; Event::COUNT],
            [Clockwise; Event::COUNT],
            [Clockwise; Event::COUNT],
            [Clockwise; Event::COUNT],
        ]);
        assert!(!bad.none_is_self_loop());
    }

    #[test]
    fn test_descriptors_match_ids() {
        for (i, state) in StateId::ALL.into_iter().enumerate() {
            assert_eq!(state.descriptor().id, state);
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn test_poll_intervals() {
        assert_eq!(StateId::Clockwise.poll_interval_ms(), 200);
        assert_eq!(StateId::Blink.poll_interval_ms(), 200);
        assert_eq!(StateId::CounterClockwise.poll_interval_ms(), 100);
        assert_eq!(StateId::Breathing.poll_interval_ms(), 200);
    }

    #[test]
    fn test_clockwise_row() {
        let state = StateId::Clockwise;
        assert_eq!(state.transition(Event::Button1), StateId::Clockwise);
        assert_eq!(state.transition(Event::Button2), StateId::Blink);
        assert_eq!(state.transition(Event::Button3), StateId::Breathing);
        assert_eq!(state.transition(Event::Timeout), StateId::Clockwise);
    }

    #[test]
    fn test_blink_row() {
        let state = StateId::Blink;
        assert_eq!(state.transition(Event::Button1), StateId::Clockwise);
        assert_eq!(state.transition(Event::Button2), StateId::Blink);
        assert_eq!(state.transition(Event::Button3), StateId::Breathing);
        assert_eq!(state.transition(Event::Timeout), StateId::Blink);
    }

    #[test]
    fn test_counter_clockwise_row() {
        let state = StateId::CounterClockwise;
        assert_eq!(state.transition(Event::Button1), StateId::Blink);
        assert_eq!(state.transition(Event::Button2), StateId::Clockwise);
        assert_eq!(state.transition(Event::Button3), StateId::Breathing);
        assert_eq!(state.transition(Event::Timeout), StateId::CounterClockwise);
    }

    #[test]
    fn test_breathing_is_sticky() {
        // Only button 3 leaves the ambient mode
        let state = StateId::Breathing;
        assert_eq!(state.transition(Event::Button1), StateId::Breathing);
        assert_eq!(state.transition(Event::Button2), StateId::Breathing);
        assert_eq!(state.transition(Event::Timeout), StateId::Breathing);
        assert_eq!(state.transition(Event::Button3), StateId::Clockwise);
    }

    #[test]
    fn test_stale_timeout_is_harmless() {
        // A timeout arriving after the breathing mode was left must not
        // move any state somewhere undefined
        for state in StateId::ALL {
            assert_eq!(state.transition(Event::Timeout), state);
        }
    }
}
