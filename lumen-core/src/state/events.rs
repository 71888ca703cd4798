//! Events that trigger state transitions

/// Events that can trigger state transitions
///
/// The discriminant doubles as the column index into the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Event {
    /// Debounced press of button 1
    Button1 = 0,
    /// Debounced press of button 2
    Button2 = 1,
    /// Debounced press of button 3
    Button3 = 2,
    /// Inactivity timer expired
    Timeout = 3,
    /// Queue empty. Never produced by an input source.
    None = 4,
}

impl Event {
    /// Number of events, including the `None` sentinel
    pub const COUNT: usize = 5;

    /// All events in table column order
    pub const ALL: [Event; Event::COUNT] = [
        Event::Button1,
        Event::Button2,
        Event::Button3,
        Event::Timeout,
        Event::None,
    ];

    /// Column index into the transition table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Check if this is the empty-queue sentinel
    pub fn is_none(&self) -> bool {
        matches!(self, Event::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_declaration_order() {
        for (i, event) in Event::ALL.iter().enumerate() {
            assert_eq!(event.index(), i);
        }
    }

    #[test]
    fn test_sentinel() {
        assert!(Event::None.is_none());
        assert!(!Event::Timeout.is_none());
    }
}
