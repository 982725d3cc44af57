//! Board model for rook and queen placement puzzles.
//!
//! This crate represents a square `n × n` board of empty or occupied cells, as
//! used by the N-rooks and N-queens puzzles, and answers conflict queries:
//! does any row, column, or diagonal hold more than one piece?
//!
//! # Overview
//!
//! - [`board`]: the [`Board`] value type with construction, toggling, and all
//!   conflict queries.
//! - [`line`]: [`Line`] and [`LineFamily`], which define which cells make up a
//!   row, column, or diagonal.
//! - [`diagonal`]: the key functions that identify the diagonal through a cell.
//! - [`observer`]: [`ObservedBoard`], which notifies registered observers after
//!   every toggle.
//! - [`cell`], [`position`], [`error`]: supporting types.
//!
//! # Examples
//!
//! ```
//! use queenboard_core::{Board, Line};
//!
//! let board = Board::from_matrix(vec![
//!     vec![1, 0, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 1],
//! ])?;
//!
//! // Safe for rooks, but every piece is on the main diagonal.
//! assert!(!board.has_any_rooks_conflicts());
//! assert!(board.has_any_major_diagonal_conflicts());
//! assert_eq!(board.queen_conflicts(), [Line::MajorDiagonal { key: 0 }]);
//! # Ok::<(), queenboard_core::BoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod diagonal;
pub mod error;
pub mod line;
pub mod observer;
pub mod position;

pub use self::{
    board::{Board, BoardInit},
    cell::{Cell, InvalidCellValue},
    error::BoardError,
    line::{Line, LineFamily, Lines},
    observer::{BoardChanged, ObservedBoard, ObserverId},
    position::Position,
};
