//! Square board of binary cells with rook and queen conflict queries.
//!
//! A [`Board`] stores `n × n` [`Cell`]s. A line (row, column, or diagonal) is
//! in *conflict* when it holds more than one piece. Rooks conflict along rows
//! and columns; queens additionally along both diagonal families.
//!
//! # Examples
//!
//! ```
//! use queenboard_core::Board;
//!
//! let mut board = Board::new(4);
//! board.toggle(0, 0)?;
//! board.toggle(1, 1)?;
//!
//! assert!(!board.has_any_rooks_conflicts());
//! assert!(board.has_major_diagonal_conflict_at(0));
//! assert!(board.has_any_queens_conflicts());
//! # Ok::<(), queenboard_core::BoardError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{BoardError, Cell, Line, LineFamily, Position};

/// A square board of empty or occupied cells.
///
/// The size `n` is fixed at construction. Cells are addressed by
/// `(row, col)` with both coordinates in `0..n`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    /// Row-major, `n * n` cells.
    cells: Vec<Cell>,
}

/// The two ways a host describes a board to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardInit {
    /// An empty board of the given size.
    Size {
        /// Board size. Negative sizes are rejected.
        n: i64,
    },
    /// A populated board; the number of rows fixes the size.
    Matrix(Vec<Vec<u8>>),
}

impl TryFrom<BoardInit> for Board {
    type Error = BoardError;

    fn try_from(init: BoardInit) -> Result<Self, Self::Error> {
        match init {
            BoardInit::Size { n } => Self::try_new(n),
            BoardInit::Matrix(matrix) => Self::from_matrix(matrix),
        }
    }
}

impl Board {
    /// Creates an empty `n × n` board.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` cells cannot be stored, i.e. the cell count overflows
    /// `usize` or exceeds `isize::MAX`. Use [`Board::try_new`] to reject such
    /// sizes with an error instead.
    #[must_use]
    pub fn new(n: usize) -> Self {
        let len = cell_count(n)
            .unwrap_or_else(|| panic!("board size {n} is too large to allocate"));
        log::debug!("creating empty {n}x{n} board");
        Self {
            n,
            cells: vec![Cell::Empty; len],
        }
    }

    /// Creates an empty board from a signed size.
    ///
    /// # Errors
    ///
    /// - [`BoardError::NegativeSize`] if `n` is negative.
    /// - [`BoardError::SizeTooLarge`] if `n * n` cells cannot be stored.
    pub fn try_new(n: i64) -> Result<Self, BoardError> {
        if n < 0 {
            return Err(BoardError::NegativeSize { n });
        }
        let size = usize::try_from(n)
            .ok()
            .filter(|&size| cell_count(size).is_some())
            .ok_or(BoardError::SizeTooLarge { n })?;
        Ok(Self::new(size))
    }

    /// Creates a board from a matrix of 0/1 values.
    ///
    /// The number of rows fixes the board size, and every row must have
    /// exactly that many cells.
    ///
    /// # Errors
    ///
    /// - [`BoardError::JaggedMatrix`] if a row's length differs from the row count.
    /// - [`BoardError::InvalidCellValue`] if a value is neither 0 nor 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use queenboard_core::{Board, BoardError};
    ///
    /// let board = Board::from_matrix(vec![vec![1, 0], vec![0, 1]])?;
    /// assert_eq!(board.n(), 2);
    ///
    /// let err = Board::from_matrix(vec![vec![1, 0], vec![0]]).unwrap_err();
    /// assert_eq!(err, BoardError::JaggedMatrix { row: 1, len: 1, n: 2 });
    /// # Ok::<(), BoardError>(())
    /// ```
    pub fn from_matrix(matrix: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        let n = matrix.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in matrix.into_iter().enumerate() {
            if values.len() != n {
                return Err(BoardError::JaggedMatrix {
                    row,
                    len: values.len(),
                    n,
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|e| BoardError::InvalidCellValue { row, col, value: e.value })?;
                cells.push(cell);
            }
        }
        let board = Self { n, cells };
        log::debug!(
            "created {n}x{n} board from matrix with {} pieces",
            board.piece_count()
        );
        Ok(board)
    }

    /// Returns the board size `n`.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the rows of the board, top to bottom. Exactly `n` rows are yielded.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        // chunk size must be non-zero; an empty board has no cells to chunk
        self.cells.chunks_exact(self.n.max(1))
    }

    /// Returns the board contents as a matrix of 0/1 values.
    #[must_use]
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    /// Returns `true` if both indices lie in `0..n`.
    ///
    /// Indices are signed so that neighbours of edge cells can be probed
    /// without underflow.
    #[must_use]
    pub fn is_in_bounds(&self, row: i64, col: i64) -> bool {
        let in_range = |i: i64| usize::try_from(i).is_ok_and(|i| i < self.n);
        in_range(row) && in_range(col)
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.n && pos.col < self.n
    }

    fn checked_index(&self, pos: Position) -> Result<usize, BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::IndexOutOfBounds {
                row: pos.row,
                col: pos.col,
                n: self.n,
            });
        }
        Ok(pos.row * self.n + pos.col)
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] if the position is off the board.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let index = self.checked_index(Position::new(row, col))?;
        Ok(self.cells[index])
    }

    /// Flips the cell at `(row, col)` between empty and occupied, returning
    /// the new value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] if the position is off the
    /// board. The board is left unchanged.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let index = self.checked_index(Position::new(row, col))?;
        let cell = self.cells[index].toggled();
        self.cells[index] = cell;
        log::trace!("toggled ({row}, {col}) to {cell}");
        Ok(cell)
    }

    /// Returns the number of occupied cells on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Returns the positions of all occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Position> + '_ {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .map(move |(i, _)| Position::new(i / n, i % n))
    }

    /// Returns the number of pieces on `line`.
    ///
    /// A line whose selector lies outside the board holds no cells and
    /// counts 0.
    #[must_use]
    pub fn line_count(&self, line: Line) -> usize {
        self.occupied_on(line).count()
    }

    fn occupied_on(&self, line: Line) -> impl Iterator<Item = Position> + '_ {
        line.positions(self.n)
            .filter(|pos| self.cells[pos.row * self.n + pos.col].is_occupied())
    }

    /// Returns `true` if `line` holds more than one piece.
    #[must_use]
    pub fn has_conflict_on(&self, line: Line) -> bool {
        self.occupied_on(line).nth(1).is_some()
    }

    /// Returns every line of `family` that holds more than one piece.
    pub fn conflicting_lines(&self, family: LineFamily) -> impl Iterator<Item = Line> + '_ {
        family
            .lines(self.n)
            .filter(|&line| self.has_conflict_on(line))
    }

    fn has_any_conflicts_in(&self, family: LineFamily) -> bool {
        match self.conflicting_lines(family).next() {
            Some(line) => {
                log::trace!("conflict on {line}");
                true
            }
            None => false,
        }
    }

    /// Returns `true` if row `row` holds more than one piece.
    #[must_use]
    pub fn has_row_conflict_at(&self, row: usize) -> bool {
        self.has_conflict_on(Line::Row { row })
    }

    /// Returns `true` if any row holds more than one piece.
    #[must_use]
    pub fn has_any_row_conflicts(&self) -> bool {
        self.has_any_conflicts_in(LineFamily::Rows)
    }

    /// Returns `true` if column `col` holds more than one piece.
    #[must_use]
    pub fn has_col_conflict_at(&self, col: usize) -> bool {
        self.has_conflict_on(Line::Column { col })
    }

    /// Returns `true` if any column holds more than one piece.
    #[must_use]
    pub fn has_any_col_conflicts(&self) -> bool {
        self.has_any_conflicts_in(LineFamily::Columns)
    }

    /// Returns `true` if the major diagonal with key `col - row` holds more
    /// than one piece.
    ///
    /// See [`diagonal`](crate::diagonal) for the key scheme.
    #[must_use]
    pub fn has_major_diagonal_conflict_at(&self, key: isize) -> bool {
        self.has_conflict_on(Line::MajorDiagonal { key })
    }

    /// Returns `true` if any major diagonal holds more than one piece.
    #[must_use]
    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        self.has_any_conflicts_in(LineFamily::MajorDiagonals)
    }

    /// Returns `true` if the minor diagonal with key `col + row` holds more
    /// than one piece.
    #[must_use]
    pub fn has_minor_diagonal_conflict_at(&self, key: usize) -> bool {
        self.has_conflict_on(Line::MinorDiagonal { key })
    }

    /// Returns `true` if any minor diagonal holds more than one piece.
    #[must_use]
    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        self.has_any_conflicts_in(LineFamily::MinorDiagonals)
    }

    /// Returns `true` if any row or column holds more than one piece.
    #[must_use]
    pub fn has_any_rooks_conflicts(&self) -> bool {
        self.has_any_row_conflicts() || self.has_any_col_conflicts()
    }

    /// Returns `true` if any row, column, or diagonal holds more than one piece.
    #[must_use]
    pub fn has_any_queens_conflicts(&self) -> bool {
        self.has_any_rooks_conflicts()
            || self.has_any_major_diagonal_conflicts()
            || self.has_any_minor_diagonal_conflicts()
    }

    /// Returns `true` if any of the four lines through `(row, col)` holds
    /// more than one piece.
    ///
    /// Only those four lines are scanned, which makes this suitable for
    /// checking a single placement incrementally.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] if the position is off the board.
    pub fn has_any_queen_conflicts_on(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        let pos = Position::new(row, col);
        self.checked_index(pos)?;
        Ok(Line::through(pos)
            .into_iter()
            .any(|line| self.has_conflict_on(line)))
    }

    /// Returns every conflicting row and column.
    #[must_use]
    pub fn rook_conflicts(&self) -> Vec<Line> {
        self.conflicts_in(&LineFamily::ROOKS)
    }

    /// Returns every conflicting row, column, and diagonal, in family order.
    #[must_use]
    pub fn queen_conflicts(&self) -> Vec<Line> {
        self.conflicts_in(&LineFamily::QUEENS)
    }

    fn conflicts_in(&self, families: &[LineFamily]) -> Vec<Line> {
        families
            .iter()
            .flat_map(|&family| self.conflicting_lines(family))
            .collect()
    }
}

/// Returns `n * n` if that many cells fit in a `Vec`.
fn cell_count(n: usize) -> Option<usize> {
    n.checked_mul(n)
        .filter(|&len| isize::try_from(len).is_ok())
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                Display::fmt(cell, f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses a board from text, one row per non-blank line.
    ///
    /// Cells are separated by whitespace or commas. A line without
    /// separators is read one character per cell, so `"10\n01"` and
    /// `"1 0\n0 1"` describe the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let matrix = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_number, line)| parse_row(line_number, line))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_matrix(matrix)
    }
}

fn parse_row(line: usize, text: &str) -> Result<Vec<u8>, BoardError> {
    let is_separator = |c: char| c.is_whitespace() || c == ',';
    let parse = |token: &str| {
        token.parse::<u8>().map_err(|_| BoardError::InvalidToken {
            line,
            token: token.to_owned(),
        })
    };
    if text.contains(is_separator) {
        text.split(is_separator)
            .filter(|token| !token.is_empty())
            .map(parse)
            .collect()
    } else {
        text.char_indices()
            .map(|(i, c)| parse(&text[i..i + c.len_utf8()]))
            .collect()
    }
}
