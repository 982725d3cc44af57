//! Lines of cells that a rook or queen attacks along.
//!
//! A [`Line`] is a row, a column, a major diagonal, or a minor diagonal. Lines
//! are grouped into four [`LineFamily`] values; rooks attack along rows and
//! columns, queens along all four families.
//!
//! Membership of a line on an `n × n` board is defined cell by cell (see
//! [`Line::position_at`]) rather than by hand-derived loop bounds, so every
//! line, including the single-cell corner diagonals, enumerates exactly the
//! cells it contains.
//!
//! # Examples
//!
//! ```
//! use queenboard_core::{Line, LineFamily, Position};
//!
//! let diagonal = Line::MajorDiagonal { key: 1 };
//! let cells: Vec<_> = diagonal.positions(3).collect();
//! assert_eq!(cells, [Position::new(0, 1), Position::new(1, 2)]);
//!
//! assert_eq!(LineFamily::MinorDiagonals.lines(3).len(), 5);
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::Range,
};

use crate::{
    Position,
    diagonal::{major_diagonal_keys, minor_diagonal_keys},
};

/// A single line of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// All cells `(row, j)`.
    Row {
        /// Row index.
        row: usize,
    },
    /// All cells `(i, col)`.
    Column {
        /// Column index.
        col: usize,
    },
    /// All cells `(i, i + key)`.
    MajorDiagonal {
        /// `col - row`, constant along the diagonal.
        key: isize,
    },
    /// All cells `(i, key - i)`.
    MinorDiagonal {
        /// `col + row`, constant along the diagonal.
        key: usize,
    },
}

impl Line {
    /// Returns the rook-and-queen lines passing through `pos`, in family order.
    #[must_use]
    pub const fn through(pos: Position) -> [Self; 4] {
        [
            Self::Row { row: pos.row },
            Self::Column { col: pos.col },
            Self::MajorDiagonal {
                key: pos.major_diagonal(),
            },
            Self::MinorDiagonal {
                key: pos.minor_diagonal(),
            },
        ]
    }

    /// Returns the family this line belongs to.
    #[must_use]
    pub const fn family(self) -> LineFamily {
        match self {
            Self::Row { .. } => LineFamily::Rows,
            Self::Column { .. } => LineFamily::Columns,
            Self::MajorDiagonal { .. } => LineFamily::MajorDiagonals,
            Self::MinorDiagonal { .. } => LineFamily::MinorDiagonals,
        }
    }

    /// Returns the cell of this line on row `i` (column `i` for rows), if the
    /// line has one within an `n × n` board.
    ///
    /// A line whose selector lies outside the board has no cells at all.
    #[must_use]
    pub fn position_at(self, i: usize, n: usize) -> Option<Position> {
        if i >= n {
            return None;
        }
        match self {
            Self::Row { row } => (row < n).then_some(Position::new(row, i)),
            Self::Column { col } => (col < n).then_some(Position::new(i, col)),
            Self::MajorDiagonal { key } => i
                .checked_add_signed(key)
                .filter(|&col| col < n)
                .map(|col| Position::new(i, col)),
            Self::MinorDiagonal { key } => key
                .checked_sub(i)
                .filter(|&col| col < n)
                .map(|col| Position::new(i, col)),
        }
    }

    /// Returns every cell of this line on an `n × n` board, top to bottom
    /// (left to right for rows).
    pub fn positions(self, n: usize) -> impl Iterator<Item = Position> {
        (0..n).filter_map(move |i| self.position_at(i, n))
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { row } => write!(f, "row {row}"),
            Self::Column { col } => write!(f, "column {col}"),
            Self::MajorDiagonal { key } => write!(f, "major diagonal {key}"),
            Self::MinorDiagonal { key } => write!(f, "minor diagonal {key}"),
        }
    }
}

/// A family of parallel lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineFamily {
    /// Rows, left to right.
    Rows,
    /// Columns, top to bottom.
    Columns,
    /// Major diagonals, top-left to bottom-right.
    MajorDiagonals,
    /// Minor diagonals, top-right to bottom-left.
    MinorDiagonals,
}

impl LineFamily {
    /// Families a rook attacks along.
    pub const ROOKS: [Self; 2] = [Self::Rows, Self::Columns];

    /// Families a queen attacks along.
    pub const QUEENS: [Self; 4] = [
        Self::Rows,
        Self::Columns,
        Self::MajorDiagonals,
        Self::MinorDiagonals,
    ];

    /// Returns every distinct line of this family on an `n × n` board, each
    /// exactly once.
    ///
    /// There are `n` rows and `n` columns, and `2n - 1` diagonals in each
    /// diagonal family.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn lines(self, n: usize) -> Lines {
        let keys = match self {
            Self::Rows | Self::Columns => 0..n as isize,
            Self::MajorDiagonals => major_diagonal_keys(n),
            Self::MinorDiagonals => {
                let keys = minor_diagonal_keys(n);
                (keys.start as isize)..(keys.end as isize)
            }
        };
        Lines { family: self, keys }
    }
}

impl Display for LineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
            Self::MajorDiagonals => "major diagonals",
            Self::MinorDiagonals => "minor diagonals",
        };
        f.write_str(name)
    }
}

/// Iterator over the lines of a [`LineFamily`].
#[derive(Debug, Clone)]
pub struct Lines {
    family: LineFamily,
    keys: Range<isize>,
}

impl Lines {
    #[expect(clippy::cast_sign_loss)]
    fn line(&self, key: isize) -> Line {
        match self.family {
            LineFamily::Rows => Line::Row { row: key as usize },
            LineFamily::Columns => Line::Column { col: key as usize },
            LineFamily::MajorDiagonals => Line::MajorDiagonal { key },
            LineFamily::MinorDiagonals => Line::MinorDiagonal { key: key as usize },
        }
    }
}

impl Iterator for Lines {
    type Item = Line;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        Some(self.line(key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for Lines {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        Some(self.line(key))
    }
}

impl FusedIterator for Lines {}
impl ExactSizeIterator for Lines {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_row_and_column_membership() {
        let row: Vec<_> = Line::Row { row: 1 }.positions(3).collect();
        assert_eq!(
            row,
            [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
        );

        let col: Vec<_> = Line::Column { col: 2 }.positions(3).collect();
        assert_eq!(
            col,
            [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_diagonal_membership() {
        let major: Vec<_> = Line::MajorDiagonal { key: -2 }.positions(4).collect();
        assert_eq!(major, [Position::new(2, 0), Position::new(3, 1)]);

        let minor: Vec<_> = Line::MinorDiagonal { key: 4 }.positions(4).collect();
        assert_eq!(
            minor,
            [Position::new(1, 3), Position::new(2, 2), Position::new(3, 1)]
        );
    }

    #[test]
    fn test_corner_diagonals_have_one_cell() {
        let n = 5;
        assert_eq!(Line::MajorDiagonal { key: 4 }.positions(n).count(), 1);
        assert_eq!(Line::MajorDiagonal { key: -4 }.positions(n).count(), 1);
        assert_eq!(Line::MinorDiagonal { key: 0 }.positions(n).count(), 1);
        assert_eq!(Line::MinorDiagonal { key: 8 }.positions(n).count(), 1);
    }

    #[test]
    fn test_out_of_range_selectors_are_empty() {
        assert_eq!(Line::Row { row: 3 }.positions(3).count(), 0);
        assert_eq!(Line::Column { col: 9 }.positions(3).count(), 0);
        assert_eq!(Line::MajorDiagonal { key: 3 }.positions(3).count(), 0);
        assert_eq!(Line::MajorDiagonal { key: -3 }.positions(3).count(), 0);
        assert_eq!(Line::MinorDiagonal { key: 5 }.positions(3).count(), 0);
    }

    #[test]
    fn test_each_family_partitions_the_board() {
        for n in 0..7 {
            for family in LineFamily::QUEENS {
                let mut seen = HashSet::new();
                for line in family.lines(n) {
                    assert_eq!(line.family(), family);
                    for pos in line.positions(n) {
                        assert!(seen.insert(pos), "{pos} appears twice in {family}");
                    }
                }
                assert_eq!(seen.len(), n * n);
            }
        }
    }

    #[test]
    fn test_lines_iterator() {
        let lines = LineFamily::MajorDiagonals.lines(3);
        assert_eq!(lines.len(), 5);
        let mut lines = lines;
        assert_eq!(lines.next(), Some(Line::MajorDiagonal { key: -2 }));
        assert_eq!(lines.next_back(), Some(Line::MajorDiagonal { key: 2 }));
        assert_eq!(lines.len(), 3);

        assert_eq!(LineFamily::Rows.lines(0).count(), 0);
        assert_eq!(LineFamily::MinorDiagonals.lines(0).count(), 0);
    }

    #[test]
    fn test_through() {
        let lines = Line::through(Position::new(2, 1));
        assert_eq!(
            lines,
            [
                Line::Row { row: 2 },
                Line::Column { col: 1 },
                Line::MajorDiagonal { key: -1 },
                Line::MinorDiagonal { key: 3 },
            ]
        );
        assert_eq!(lines[2].to_string(), "major diagonal -1");
    }
}
