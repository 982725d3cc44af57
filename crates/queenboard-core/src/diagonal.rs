//! Diagonal keys.
//!
//! Every cell `(row, col)` lies on exactly one major diagonal (running from
//! top-left to bottom-right) and one minor diagonal (running from top-right to
//! bottom-left). Diagonals are identified by a key that is constant along the
//! line:
//!
//! - a major diagonal by `col - row`, which ranges over `-(n - 1)..=n - 1`,
//! - a minor diagonal by `col + row`, which ranges over `0..=2n - 2`.
//!
//! Projected onto row 0, the key is the column at which the diagonal would
//! cross the first row, so a major key may be negative and a minor key may be
//! `n` or greater.
//!
//! # Examples
//!
//! ```
//! use queenboard_core::diagonal::{
//!     major_diagonal_key, major_diagonal_keys, minor_diagonal_key, minor_diagonal_keys,
//! };
//!
//! assert_eq!(major_diagonal_key(2, 3), 1);
//! assert_eq!(major_diagonal_key(3, 0), -3);
//! assert_eq!(minor_diagonal_key(3, 0), 3);
//!
//! // A 4x4 board has 7 diagonals in each direction.
//! assert_eq!(major_diagonal_keys(4), -3..4);
//! assert_eq!(minor_diagonal_keys(4), 0..7);
//! ```

use std::ops::Range;

/// Returns the key of the major diagonal through `(row, col)`: `col - row`.
#[must_use]
#[inline]
#[expect(clippy::cast_possible_wrap)]
pub const fn major_diagonal_key(row: usize, col: usize) -> isize {
    col as isize - row as isize
}

/// Returns the key of the minor diagonal through `(row, col)`: `col + row`.
#[must_use]
#[inline]
pub const fn minor_diagonal_key(row: usize, col: usize) -> usize {
    col + row
}

/// Returns every major diagonal key of an `n × n` board.
///
/// The range holds `2n - 1` keys, and is empty when `n` is 0.
#[must_use]
#[inline]
#[expect(clippy::cast_possible_wrap)]
pub const fn major_diagonal_keys(n: usize) -> Range<isize> {
    let n = n as isize;
    (1 - n)..n
}

/// Returns every minor diagonal key of an `n × n` board.
///
/// The range holds `2n - 1` keys, and is empty when `n` is 0.
#[must_use]
#[inline]
pub const fn minor_diagonal_keys(n: usize) -> Range<usize> {
    0..(2 * n).saturating_sub(1)
}
