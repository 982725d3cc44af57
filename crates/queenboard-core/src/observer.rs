//! Change notification for hosts that render or react to a board.
//!
//! [`ObservedBoard`] wraps a [`Board`] and calls every registered observer
//! after each successful toggle. Read access goes through [`Deref`], so all
//! conflict queries are available directly; mutation is only possible
//! through [`ObservedBoard::toggle`], which guarantees observers see every
//! change.
//!
//! # Examples
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//!
//! use queenboard_core::{Board, ObservedBoard};
//!
//! let changes = Rc::new(Cell::new(0));
//! let mut board = ObservedBoard::new(Board::new(4));
//! let id = board.subscribe({
//!     let changes = Rc::clone(&changes);
//!     move |_event| changes.set(changes.get() + 1)
//! });
//!
//! board.toggle(0, 0)?;
//! board.toggle(1, 2)?;
//! assert_eq!(changes.get(), 2);
//! assert!(!board.has_any_queens_conflicts());
//!
//! board.unsubscribe(id);
//! board.toggle(1, 2)?;
//! assert_eq!(changes.get(), 2);
//! # Ok::<(), queenboard_core::BoardError>(())
//! ```

use std::{fmt, ops::Deref};

use crate::{Board, BoardError, Cell, Position};

/// Notification sent to observers after a cell was toggled.
///
/// Observers may use the payload or simply re-read the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardChanged {
    /// The toggled cell.
    pub position: Position,
    /// The cell's new value.
    pub cell: Cell,
}

/// Handle identifying a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&BoardChanged)>;

/// A [`Board`] that notifies observers when it changes.
pub struct ObservedBoard {
    board: Board,
    observers: Vec<(ObserverId, Observer)>,
    next_id: u64,
}

impl fmt::Debug for ObservedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservedBoard")
            .field("board", &self.board)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl From<Board> for ObservedBoard {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

impl Deref for ObservedBoard {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

impl ObservedBoard {
    /// Wraps `board` with an empty observer list.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the wrapped board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unwraps the board, dropping all observers.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Registers an observer, returning a handle for [`Self::unsubscribe`].
    ///
    /// Observers are called in registration order.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&BoardChanged) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        log::debug!("registered observer {id:?}");
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        let removed = self.observers.len() != len;
        if removed {
            log::debug!("unregistered observer {id:?}");
        }
        removed
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Toggles the cell at `(row, col)` and notifies every observer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] if the position is off the
    /// board. No observer is notified in that case.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let cell = self.board.toggle(row, col)?;
        let event = BoardChanged {
            position: Position::new(row, col),
            cell,
        };
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
        Ok(cell)
    }
}
