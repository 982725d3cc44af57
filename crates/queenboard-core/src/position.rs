//! Board position type.

use std::fmt::{self, Display};

use crate::diagonal::{major_diagonal_key, minor_diagonal_key};

/// A cell address on the board, as `(row, col)`.
///
/// Both coordinates are 0-based. A position carries no board size; bounds are
/// checked by [`Board`](crate::Board) when the position is used.
///
/// # Examples
///
/// ```
/// use queenboard_core::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.major_diagonal(), 2);
/// assert_eq!(pos.minor_diagonal(), 4);
/// assert_eq!(pos.to_string(), "(1, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the key of the major diagonal through this position.
    #[must_use]
    pub const fn major_diagonal(self) -> isize {
        major_diagonal_key(self.row, self.col)
    }

    /// Returns the key of the minor diagonal through this position.
    #[must_use]
    pub const fn minor_diagonal(self) -> usize {
        minor_diagonal_key(self.row, self.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
