//! Listener interface for grid notifications.

use crate::types::{Cell, Position};

/// Receives notifications from a `Grid`.
///
/// Both methods default to no-ops so a listener only implements what it needs.
pub trait GameObserver {
    /// A real cell flipped. Fired for the toggled cell and then each on-board
    /// neighbor, in up, right, down, left order.
    fn cell_changed(&mut self, _cell: &Cell) {}

    /// The grid transitioned to the won state. Fired once per win.
    fn game_won(&mut self) {}
}

/// One recorded notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    CellChanged { position: Position, is_on: bool },
    GameWon,
}

/// An observer that records every notification it receives.
///
/// The log is shared through an `Rc`, so a clone can be handed to
/// `Grid::subscribe` while the caller keeps reading the original.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: std::rc::Rc<std::cell::RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn wins(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameWon))
            .count()
    }
}

impl GameObserver for EventLog {
    fn cell_changed(&mut self, cell: &Cell) {
        self.events.borrow_mut().push(GameEvent::CellChanged {
            position: cell.position(),
            is_on: cell.is_on(),
        });
    }

    fn game_won(&mut self) {
        self.events.borrow_mut().push(GameEvent::GameWon);
    }
}
