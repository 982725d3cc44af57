//! Binary cell values.

use std::fmt::{self, Display};

/// The contents of a single board cell.
///
/// A cell is either empty (`0`) or holds a piece (`1`). The numeric encoding
/// is preserved by [`Cell::value`] and the [`u8`] conversions.
///
/// # Examples
///
/// ```
/// use queenboard_core::Cell;
///
/// assert_eq!(Cell::Empty.toggled(), Cell::Occupied);
/// assert_eq!(u8::from(Cell::Occupied), 1);
/// assert_eq!(Cell::try_from(0u8), Ok(Cell::Empty));
/// assert!(Cell::try_from(2u8).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
#[repr(u8)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty = 0,
    /// A piece.
    Occupied = 1,
}

impl Cell {
    /// Returns the numeric value of this cell (0 or 1).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the complement of this cell.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Empty => Self::Occupied,
            Self::Occupied => Self::Empty,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.value()
    }
}

impl From<bool> for Cell {
    fn from(occupied: bool) -> Self {
        if occupied { Self::Occupied } else { Self::Empty }
    }
}

/// Error returned when a value other than 0 or 1 is converted into a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell value must be 0 or 1, got {value}")]
pub struct InvalidCellValue {
    /// The rejected value.
    pub value: u8,
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Occupied),
            _ => Err(InvalidCellValue { value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Cell::Empty.value(), 0);
        assert_eq!(Cell::Occupied.value(), 1);
        assert_eq!(Cell::Empty.toggled().toggled(), Cell::Empty);
        assert!(Cell::Occupied.is_occupied());
        assert!(Cell::from(false).is_empty());

        assert_eq!(format!("{}", Cell::Occupied), "1");
        let value: u8 = Cell::Empty.into();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_try_from_rejects_non_binary() {
        assert_eq!(Cell::try_from(1u8), Ok(Cell::Occupied));
        let err = Cell::try_from(7u8).unwrap_err();
        assert_eq!(err, InvalidCellValue { value: 7 });
        assert_eq!(err.to_string(), "cell value must be 0 or 1, got 7");
    }
}
