//! Four-in-a-row detection.
//!
//! [`has_win`] scans every anchor cell on the board and needs no knowledge of
//! the last move. [`has_win_through`] only walks the lines through a single
//! cell; the engine calls it after each drop.

use super::board::{Board, Cell, Position};
use super::player::Player;

/// Number of aligned pieces needed to win
pub const WIN_LENGTH: usize = 4;

/// The four line directions as (row step, column step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// The run of `WIN_LENGTH` cells anchored at `anchor` going in `direction`.
///
/// Returns `None` if any cell of the run falls off the board.
fn run_from(board: &Board, anchor: Position, direction: Direction) -> Option<[Position; WIN_LENGTH]> {
    let (dr, dc) = direction.step();
    let mut run = [anchor; WIN_LENGTH];
    for (k, slot) in run.iter_mut().enumerate() {
        let row = anchor.row as isize + dr * k as isize;
        let col = anchor.col as isize + dc * k as isize;
        board.try_get(row, col)?;
        *slot = Position::new(row as usize, col as usize);
    }
    Some(run)
}

/// First winning run for `player` in row-major anchor order
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; WIN_LENGTH]> {
    let target = player.to_cell();
    for (anchor, _) in board.cells() {
        for direction in Direction::ALL {
            // Bounds are checked before occupancy: partial runs never match.
            let Some(run) = run_from(board, anchor, direction) else {
                continue;
            };
            if run.iter().all(|pos| board.get(pos.row, pos.col) == target) {
                return Some(run);
            }
        }
    }
    None
}

/// Check whether `player` has four in a row anywhere on the board
pub fn has_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Check whether the piece at (row, col) is part of a four-in-a-row.
///
/// Returns false for an empty cell.
pub fn has_win_through(board: &Board, row: usize, col: usize) -> bool {
    let cell = board.get(row, col);
    if cell == Cell::Empty {
        return false;
    }

    Direction::ALL
        .iter()
        .any(|&direction| line_length(board, row, col, direction, cell) >= WIN_LENGTH)
}

/// Length of the contiguous run of `cell` through (row, col) along `direction`,
/// counting both ways.
fn line_length(board: &Board, row: usize, col: usize, direction: Direction, cell: Cell) -> usize {
    let (dr, dc) = direction.step();
    let count_towards = |dr: isize, dc: isize| {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while board.try_get(r, c) == Some(cell) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    };

    1 + count_towards(dr, dc) + count_towards(-dr, -dc)
}
