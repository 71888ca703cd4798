//! Interrupt-safe event queue
//!
//! Bounded FIFO that hands events from asynchronous producers (button
//! edges, the inactivity timer) to the single control loop consumer.
//!
//! ```text
//! ┌──────────────┐
//! │ Button 1..3  │──┐    try_enqueue    ┌─────────────┐   try_dequeue   ┌──────────────┐
//! └──────────────┘  ├──────────────────▶│ EventQueue  │────────────────▶│ Control loop │
//! ┌──────────────┐  │                   │ (N slots)   │                 └──────────────┘
//! │ Inactivity   │──┘                   └─────────────┘
//! └──────────────┘
//! ```
//!
//! Both operations run inside the raw mutex `M`. With
//! `CriticalSectionRawMutex` that is a short critical section, so
//! producers may call `try_enqueue` from interrupt context. Neither
//! operation blocks or allocates.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::Deque;

use crate::state::Event;

/// Reasons an event was not queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnqueueError {
    /// All slots are taken; the event is dropped
    Full,
    /// `Event::None` marks an empty queue and cannot be queued
    Sentinel,
}

/// Bounded multi-producer, single-consumer event FIFO
pub struct EventQueue<M: RawMutex, const N: usize> {
    inner: Mutex<M, RefCell<Deque<Event, N>>>,
}

impl<M: RawMutex, const N: usize> EventQueue<M, N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Append `event` behind everything already queued
    ///
    /// On failure the queue is left untouched.
    pub fn try_enqueue(&self, event: Event) -> Result<(), EnqueueError> {
        if event.is_none() {
            return Err(EnqueueError::Sentinel);
        }
        self.inner.lock(|queue| {
            queue
                .borrow_mut()
                .push_back(event)
                .map_err(|_| EnqueueError::Full)
        })
    }

    /// Remove and return the oldest event, or `Event::None` if empty
    pub fn try_dequeue(&self) -> Event {
        self.inner
            .lock(|queue| queue.borrow_mut().pop_front())
            .unwrap_or(Event::None)
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.inner.lock(|queue| queue.borrow().len())
    }

    /// Check if no event is queued
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of queued events
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<M: RawMutex, const N: usize> Default for EventQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    type Queue = EventQueue<NoopRawMutex, 10>;

    #[test]
    fn test_fifo_order() {
        let queue = Queue::new();
        queue.try_enqueue(Event::Button1).unwrap();
        queue.try_enqueue(Event::Button2).unwrap();
        queue.try_enqueue(Event::Timeout).unwrap();

        assert_eq!(queue.try_dequeue(), Event::Button1);
        assert_eq!(queue.try_dequeue(), Event::Button2);
        assert_eq!(queue.try_dequeue(), Event::Timeout);
        assert_eq!(queue.try_dequeue(), Event::None);
    }

    #[test]
    fn test_full_queue_rejects_without_corruption() {
        let queue = Queue::new();
        let pattern = [Event::Button1, Event::Button2, Event::Button3, Event::Timeout];

        for i in 0..10 {
            queue.try_enqueue(pattern[i % pattern.len()]).unwrap();
        }
        assert_eq!(queue.len(), queue.capacity());

        assert_eq!(queue.try_enqueue(Event::Button3), Err(EnqueueError::Full));
        assert_eq!(queue.len(), 10);

        for i in 0..10 {
            assert_eq!(queue.try_dequeue(), pattern[i % pattern.len()]);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sentinel_rejected() {
        let queue = Queue::new();
        assert_eq!(queue.try_enqueue(Event::None), Err(EnqueueError::Sentinel));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_dequeue_is_idempotent() {
        let queue = Queue::new();
        for _ in 0..100 {
            assert_eq!(queue.try_dequeue(), Event::None);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_space_frees_after_dequeue() {
        let queue = Queue::new();
        for _ in 0..10 {
            queue.try_enqueue(Event::Button1).unwrap();
        }
        assert_eq!(queue.try_enqueue(Event::Timeout), Err(EnqueueError::Full));

        assert_eq!(queue.try_dequeue(), Event::Button1);
        queue.try_enqueue(Event::Timeout).unwrap();

        for _ in 0..9 {
            assert_eq!(queue.try_dequeue(), Event::Button1);
        }
        assert_eq!(queue.try_dequeue(), Event::Timeout);
    }
}
