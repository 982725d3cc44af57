//! Benchmarks for whole-board conflict scans.
//!
//! # Benchmarks
//!
//! - **`queens_conflicts`**: Runs `has_any_queens_conflicts` on boards that
//!   contain no conflict, so every line of every family is scanned.
//! - **`queen_conflicts_list`**: Collects every conflicting line of a densely
//!   filled board.
//!
//! # Test Data
//!
//! - **`empty`**: an all-empty board.
//! - **`solved`**: one queen per row on an `(n - 1)`-sized board, placed by the
//!   `2k mod n` construction, which is conflict-free for these sizes.
//! - **`dense`**: a checkerboard, where most diagonals conflict.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench conflicts
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use queenboard_core::Board;

const SIZES: [usize; 3] = [8, 32, 128];

fn solved_board(n: usize) -> Board {
    // For n ≡ 1 or 5 (mod 6), queens at (k, 2k mod n) never attack each other.
    let mut board = Board::new(n);
    for row in 0..n {
        board.toggle(row, (2 * row) % n).unwrap();
    }
    board
}

fn checkerboard(n: usize) -> Board {
    let mut board = Board::new(n);
    for row in 0..n {
        for col in (row % 2..n).step_by(2) {
            board.toggle(row, col).unwrap();
        }
    }
    board
}

fn bench_queens_conflicts(c: &mut Criterion) {
    for n in SIZES {
        let cases = [("empty", Board::new(n)), ("solved", solved_board(n - 1))];
        for (name, board) in cases {
            assert!(!board.has_any_queens_conflicts());
            c.bench_with_input(
                BenchmarkId::new("queens_conflicts", format!("{name}_{}", board.n())),
                &board,
                |b, board| b.iter(|| hint::black_box(board).has_any_queens_conflicts()),
            );
        }
    }
}

fn bench_queen_conflicts_list(c: &mut Criterion) {
    for n in SIZES {
        let board = checkerboard(n);
        c.bench_with_input(
            BenchmarkId::new("queen_conflicts_list", format!("dense_{n}")),
            &board,
            |b, board| b.iter(|| hint::black_box(board).queen_conflicts()),
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_queens_conflicts,
        bench_queen_conflicts_list
);
criterion_main!(benches);
