//! Win detection: directional scans for an unbroken run of one marker

use crate::board::{Board, Cell, MatchSpan, Marker};
use crate::RUN_LENGTH;

/// Reports whether `marker` holds an unbroken run of [`RUN_LENGTH`]
/// cells anywhere on the board
pub fn has_match(board: &Board, marker: Marker) -> bool {
    for col in 0..board.cols() {
        for row in 0..board.rows() {
            if matches_horizontal(board, col, row, marker)
                || matches_vertical(board, col, row, marker)
                || matches_diagonal_south(board, col, row, marker)
                || matches_diagonal_north(board, col, row, marker)
            {
                return true;
            }
        }
    }
    false
}

/// Finds the first winning run for `marker` and returns its span
///
/// Scan order is column-major, row-ascending, testing directions in the
/// order horizontal, vertical, diagonal-south, diagonal-north. When
/// several winning runs exist at once this order decides which one gets
/// highlighted.
pub fn locate_match(board: &Board, marker: Marker) -> Option<MatchSpan> {
    for col in 0..board.cols() {
        for row in 0..board.rows() {
            if matches_horizontal(board, col, row, marker) {
                return Some(MatchSpan {
                    start: (col, row),
                    end: (col + RUN_LENGTH - 1, row),
                });
            }
            if matches_vertical(board, col, row, marker) {
                return Some(MatchSpan {
                    start: (col, row),
                    end: (col, row + RUN_LENGTH - 1),
                });
            }
            if matches_diagonal_south(board, col, row, marker) {
                return Some(MatchSpan {
                    start: (col, row),
                    end: (col + RUN_LENGTH - 1, row + RUN_LENGTH - 1),
                });
            }
            if matches_diagonal_north(board, col, row, marker) {
                return Some(MatchSpan {
                    start: (col, row),
                    end: (col + RUN_LENGTH - 1, row - (RUN_LENGTH - 1)),
                });
            }
        }
    }
    None
}

/// Run going right from (col, row)
fn matches_horizontal(board: &Board, col: usize, row: usize, marker: Marker) -> bool {
    for step in 0..RUN_LENGTH {
        let col = col + step;
        if col >= board.cols() {
            return false;
        }
        if board.cell(col, row) != Cell::Marked(marker) {
            return false;
        }
    }
    true
}

/// Run going down from (col, row)
fn matches_vertical(board: &Board, col: usize, row: usize, marker: Marker) -> bool {
    for step in 0..RUN_LENGTH {
        let row = row + step;
        if row >= board.rows() {
            return false;
        }
        if board.cell(col, row) != Cell::Marked(marker) {
            return false;
        }
    }
    true
}

/// Run going down-right from (col, row)
fn matches_diagonal_south(board: &Board, col: usize, row: usize, marker: Marker) -> bool {
    for step in 0..RUN_LENGTH {
        let col = col + step;
        let row = row + step;
        if col >= board.cols() || row >= board.rows() {
            return false;
        }
        if board.cell(col, row) != Cell::Marked(marker) {
            return false;
        }
    }
    true
}

/// Run going up-right from (col, row)
fn matches_diagonal_north(board: &Board, col: usize, row: usize, marker: Marker) -> bool {
    for step in 0..RUN_LENGTH {
        let col = col + step;
        if col >= board.cols() || step > row {
            return false;
        }
        if board.cell(col, row - step) != Cell::Marked(marker) {
            return false;
        }
    }
    true
}
