//! Board errors.

/// Errors returned by [`Board`](crate::Board) construction, parsing, and cell access.
///
/// Variants fall into two classes: invalid construction arguments
/// ([`BoardError::is_invalid_argument`]) and positions outside the board
/// ([`BoardError::is_index_out_of_bounds`]). All of them indicate a caller
/// mistake; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A board size was negative.
    #[display("board size must be non-negative, got {n}")]
    NegativeSize {
        /// The rejected size.
        n: i64,
    },
    /// A board size was so large that its `n * n` cells cannot be stored.
    #[display("board size {n} is too large")]
    SizeTooLarge {
        /// The rejected size.
        n: i64,
    },
    /// A matrix row did not have one cell per row of the matrix.
    #[display("row {row} has {len} cells, expected {n}")]
    JaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Number of rows in the matrix.
        n: usize,
    },
    /// A matrix cell held a value other than 0 or 1.
    #[display("cell ({row}, {col}) must be 0 or 1, got {value}")]
    InvalidCellValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },
    /// Board text contained something other than a cell value.
    #[display("invalid token {token:?} on line {line}")]
    InvalidToken {
        /// 1-based line number in the input text, blank lines included.
        line: usize,
        /// The rejected text.
        token: String,
    },
    /// A position lay outside the board.
    #[display("position ({row}, {col}) is outside the {n}x{n} board")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size.
        n: usize,
    },
}

impl BoardError {
    /// Returns `true` if this error rejects a construction argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::NegativeSize { .. }
            | Self::SizeTooLarge { .. }
            | Self::JaggedMatrix { .. }
            | Self::InvalidCellValue { .. }
            | Self::InvalidToken { .. } => true,
            Self::IndexOutOfBounds { .. } => false,
        }
    }

    /// Returns `true` if this error rejects a position outside the board.
    #[must_use]
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }
}
