//! Conflict scenarios on small hand-built boards.

use queenboard_core::{Board, BoardError, Line};

#[test]
fn test_identity_matrix_conflicts_only_on_main_diagonal() {
    let board = Board::from_matrix(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();

    assert!(!board.has_any_row_conflicts());
    assert!(!board.has_any_col_conflicts());
    assert!(board.has_any_major_diagonal_conflicts());
    assert!(!board.has_any_minor_diagonal_conflicts());
    assert!(!board.has_any_rooks_conflicts());
    assert!(board.has_any_queens_conflicts());
}

#[test]
fn test_two_toggles_on_main_diagonal() {
    let mut board = Board::new(4);
    board.toggle(0, 0).unwrap();
    board.toggle(1, 1).unwrap();

    assert!(board.has_major_diagonal_conflict_at(0));
    assert!(board.has_any_queens_conflicts());
    assert_eq!(board.has_any_queen_conflicts_on(3, 3), Ok(true));
    assert_eq!(board.has_any_queen_conflicts_on(0, 3), Ok(false));
}

#[test]
fn test_two_pieces_in_first_row() {
    let board = Board::from_matrix(vec![vec![1, 1], vec![0, 0]]).unwrap();

    assert!(board.has_any_row_conflicts());
    assert!(!board.has_any_col_conflicts());
    assert_eq!(board.rook_conflicts(), [Line::Row { row: 0 }]);
}

#[test]
fn test_off_main_diagonals() {
    let mut board = Board::new(4);
    board.toggle(0, 1).unwrap();
    board.toggle(2, 3).unwrap();
    assert!(board.has_major_diagonal_conflict_at(1));
    assert!(!board.has_any_minor_diagonal_conflicts());

    let mut board = Board::new(4);
    board.toggle(0, 3).unwrap();
    board.toggle(3, 0).unwrap();
    assert!(board.has_minor_diagonal_conflict_at(3));
    assert!(!board.has_any_major_diagonal_conflicts());
    assert!(!board.has_any_rooks_conflicts());
}

#[test]
fn test_lower_triangle_major_diagonal() {
    // Diagonals starting below row 0 have negative keys.
    let board: Board = "0000\n1000\n0100\n0000".parse().unwrap();
    assert!(board.has_major_diagonal_conflict_at(-1));
    assert_eq!(board.queen_conflicts(), [Line::MajorDiagonal { key: -1 }]);
}

#[test]
fn test_lower_triangle_minor_diagonal() {
    // Diagonals ending right of the last column have keys of n or more.
    let board: Board = "0000\n0000\n0001\n0010".parse().unwrap();
    assert!(board.has_minor_diagonal_conflict_at(5));
    assert_eq!(board.queen_conflicts(), [Line::MinorDiagonal { key: 5 }]);
}

#[test]
fn test_every_conflicting_line_is_reported() {
    let board: Board = "1 1 0\n0 0 0\n1 0 1".parse().unwrap();
    assert_eq!(
        board.queen_conflicts(),
        [
            Line::Row { row: 0 },
            Line::Row { row: 2 },
            Line::Column { col: 0 },
            Line::MajorDiagonal { key: 0 },
        ]
    );
}

#[test]
fn test_invalid_construction() {
    assert_eq!(
        Board::try_new(-4).unwrap_err(),
        BoardError::NegativeSize { n: -4 }
    );
    let err = Board::from_matrix(vec![vec![0], vec![0, 0]]).unwrap_err();
    assert_eq!(err, BoardError::JaggedMatrix { row: 0, len: 1, n: 2 });
    assert!(err.is_invalid_argument());
}
