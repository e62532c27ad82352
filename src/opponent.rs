//! The computer opponent: a one-ply greedy move selector
//!
//! The policy is intentionally shallow: take an immediate win, block an
//! immediate loss, otherwise play a uniformly random empty cell. It
//! looks one move ahead only and will not spot a fork being set up.

use rand::Rng;
use tracing::trace;

use crate::board::{Board, Marker};
use crate::rules;

/// Selects the computer's next move as a `(col, row)` cell
///
/// Empty cells are considered in column-major, row-ascending order.
/// Priorities, highest first:
///
/// 1. a cell that completes a run for `own`
/// 2. a cell that would complete a run for `other` (claimed as a block)
/// 3. a uniformly random empty cell
///
/// Must only be called while the board has at least one empty cell. The
/// chosen cell is returned, not committed; the caller places the marker.
pub fn select_move(
    board: &Board,
    own: Marker,
    other: Marker,
    rng: &mut impl Rng,
) -> (usize, usize) {
    let mut empties = Vec::with_capacity(board.cols() * board.rows());
    for col in 0..board.cols() {
        for row in 0..board.rows() {
            if board.is_empty_at(col, row) {
                empties.push((col, row));
            }
        }
    }
    debug_assert!(!empties.is_empty(), "select_move called on a full board");

    // take a win where one exists
    for &(col, row) in &empties {
        if completes_run(board, col, row, own) {
            trace!(col, row, "taking winning cell");
            return (col, row);
        }
    }

    // deny the opponent their win
    for &(col, row) in &empties {
        if completes_run(board, col, row, other) {
            trace!(col, row, "blocking cell");
            return (col, row);
        }
    }

    // no threat either way, pick an empty cell at random
    empties[rng.gen_range(0..empties.len())]
}

/// Probes a marker into a cell on a scratch copy of the board and
/// reports whether it completes a run; the live board never shows the
/// tentative mark
fn completes_run(board: &Board, col: usize, row: usize, marker: Marker) -> bool {
    let mut scratch = board.clone();
    scratch.place(col, row, marker);
    rules::has_match(&scratch, marker)
}
