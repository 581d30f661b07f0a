//! The notification channel used to inform dependents that the state of a board has changed.

use crate::{Cell, CellPosition};

/// Describes a change to the state of a board.
///
/// Receiving an event is enough for an observer to resynchronise its view of the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardEvent {
    /// A single cell was set by an edit.
    CellChanged {
        /// The position of the cell that changed.
        position: CellPosition,
        /// The state the cell now has.
        cell: Cell,
    },
    /// Any number of cells may have changed.
    /// The whole board needs to be read again.
    BoardChanged {
        /// The generation the board is now on.
        generation: u64,
    },
}

/// A subscriber to [`BoardEvent`]s.
pub type Observer = Box<dyn FnMut(&BoardEvent) + Send>;

/// An ordered list of [`Observer`]s.
///
/// Observers are notified synchronously, in the order they subscribed.
#[derive(Default)]
pub struct Observers {
    subscribers: Vec<Observer>,
}

impl Observers {
    /// Adds an observer to the end of the notification order.
    pub fn subscribe(&mut self, observer: impl FnMut(&BoardEvent) + Send + 'static) {
        self.subscribers.push(Box::new(observer));
    }

    /// Adds an observer & immediately sends it the given event, so it starts out synchronised.
    pub fn subscribe_with(
        &mut self,
        mut observer: impl FnMut(&BoardEvent) + Send + 'static,
        initial_event: BoardEvent,
    ) {
        observer(&initial_event);
        self.subscribe(observer);
    }

    /// Sends the event to every observer.
    pub fn notify(&mut self, event: BoardEvent) {
        for observer in &mut self.subscribers {
            observer(&event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    /// Observers are called in the order they subscribed.
    fn notify_in_subscription_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::default();

        for id in 0..5 {
            let calls = calls.clone();
            observers.subscribe(move |_| calls.lock().unwrap().push(id));
        }

        observers.notify(BoardEvent::BoardChanged { generation: 1 });
        assert_eq!(*calls.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    /// Every observer receives the event that was sent.
    fn notify_passes_event() {
        let received = Arc::new(Mutex::new(None));
        let mut observers = Observers::default();

        let received_clone = received.clone();
        observers.subscribe(move |event| *received_clone.lock().unwrap() = Some(*event));

        let event = BoardEvent::CellChanged {
            position: (1, 2).into(),
            cell: Cell::Alive,
        };
        observers.notify(event);
        assert_eq!(*received.lock().unwrap(), Some(event));
    }

    #[test]
    /// Only the newly subscribed observer receives the initial event.
    fn subscribe_with_initial_event() {
        let first = Arc::new(Mutex::new(0));
        let second = Arc::new(Mutex::new(0));
        let mut observers = Observers::default();

        let first_clone = first.clone();
        observers.subscribe(move |_| *first_clone.lock().unwrap() += 1);
        let second_clone = second.clone();
        observers.subscribe_with(
            move |_| *second_clone.lock().unwrap() += 1,
            BoardEvent::BoardChanged { generation: 0 },
        );

        assert_eq!(*first.lock().unwrap(), 0);
        assert_eq!(*second.lock().unwrap(), 1);

        observers.notify(BoardEvent::BoardChanged { generation: 1 });
        assert_eq!(*first.lock().unwrap(), 1);
        assert_eq!(*second.lock().unwrap(), 2);
    }
}
