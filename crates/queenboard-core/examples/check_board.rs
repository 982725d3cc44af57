//! Example reporting rook or queen conflicts on a board.
//!
//! This example shows how to:
//! - Build a `Board` either empty or from a 0/1 matrix
//! - Toggle pieces through an `ObservedBoard` and watch the change events
//! - List every conflicting line
//!
//! # Usage
//!
//! Check a board read from a file (one row per line, `0`/`1` cells):
//!
//! ```sh
//! cargo run --example check_board -- --file board.txt
//! ```
//!
//! Place queens on an empty 8x8 board:
//!
//! ```sh
//! cargo run --example check_board -- --size 8 --toggle 0,0 --toggle 1,2
//! ```
//!
//! Read the board from stdin and only check rook conflicts:
//!
//! ```sh
//! printf '1 0\n0 1\n' | cargo run --example check_board -- --family rooks
//! ```
//!
//! Set `RUST_LOG=trace` to log each toggle and scan.
//!
//! The process exits with status 1 if a conflict is found and 2 if the input is invalid.

use std::{fs, io, path::PathBuf, process, str::FromStr};

use clap::{Parser, ValueEnum};
use queenboard_core::{Board, ObservedBoard, Position};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Family {
    Rooks,
    Queens,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Start from an empty board of this size instead of reading a matrix.
    #[arg(short = 'n', long, value_name = "N", conflicts_with = "file")]
    size: Option<i64>,

    /// Read the board from this file instead of stdin.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Toggle the cell at ROW,COL before checking. Repeatable.
    #[arg(short, long = "toggle", value_name = "ROW,COL", value_parser = parse_position)]
    toggles: Vec<Position>,

    /// Which pieces to check conflicts for.
    #[arg(long, value_name = "FAMILY", default_value = "queens")]
    family: Family,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let parse = |v: &str| usize::from_str(v.trim()).map_err(|e| format!("{v:?}: {e}"));
    Ok(Position::new(parse(row)?, parse(col)?))
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let board = match load_board(&args) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let mut board = ObservedBoard::new(board);
    board.subscribe(|event| {
        log::info!("toggled {} to {}", event.position, event.cell);
    });
    for pos in &args.toggles {
        if let Err(e) = board.toggle(pos.row, pos.col) {
            eprintln!("{e}");
            process::exit(2);
        }
    }

    println!("Board:");
    for row in board.to_string().lines() {
        println!("  {row}");
    }
    println!();

    let conflicts = match args.family {
        Family::Rooks => board.rook_conflicts(),
        Family::Queens => board.queen_conflicts(),
    };
    if conflicts.is_empty() {
        println!("No conflicts ({} pieces).", board.piece_count());
        return;
    }

    println!("Conflicts:");
    for line in &conflicts {
        println!("  {line}: {} pieces", board.line_count(*line));
    }
    process::exit(1);
}

fn load_board(args: &Args) -> Result<Board, String> {
    if let Some(n) = args.size {
        return Board::try_new(n).map_err(|e| format!("invalid board: {e}"));
    }
    let text = match &args.file {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => io::read_to_string(io::stdin()).map_err(|e| format!("stdin: {e}"))?,
    };
    text.parse().map_err(|e| format!("invalid board: {e}"))
}
