//! The game board: cell storage, pointer-to-cell mapping and mutation

use thiserror::Error;

use crate::{CELL_DIMENSION, DEFAULT_BOARD_DIMENSION, RUN_LENGTH};

/// One of the two symbols a player places
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Marker {
    /// Player one's marker, moves first
    X,
    /// Player two's marker (the computer in single player)
    O,
}

impl Marker {
    /// Returns the other marker
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Marked(Marker),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// The start and end cells of a winning run, as `(col, row)` pairs
///
/// Recorded once when a win is detected so the presentation layer can
/// highlight the run; cleared on [`Board::reset`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MatchSpan {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum BoardError {
    #[error("invalid board dimensions {cols}x{rows}, each must be at least 3")]
    InvalidDimensions { cols: usize, rows: usize },
}

/// A rectangular grid of cells with a pixel-space layout
///
/// The layout (origin plus per-cell size) maps continuous pointer
/// coordinates onto discrete cells. Cells transition from empty to
/// marked exactly once; only [`Board::reset`] empties them again.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>, // row-major
    origin: (f32, f32),
    cell_size: f32,
    match_span: Option<MatchSpan>,
}

impl Board {
    /// Creates the standard 3x3 board with the default cell size and
    /// an origin at (0, 0)
    pub fn new() -> Self {
        Self::build(DEFAULT_BOARD_DIMENSION, DEFAULT_BOARD_DIMENSION)
    }

    /// Creates a board of the given dimensions
    ///
    /// Fails if either dimension cannot contain a winning run; a board
    /// is never silently clamped to a workable size.
    pub fn with_dimensions(cols: usize, rows: usize) -> Result<Self, BoardError> {
        if cols < RUN_LENGTH || rows < RUN_LENGTH {
            return Err(BoardError::InvalidDimensions { cols, rows });
        }
        Ok(Self::build(cols, rows))
    }

    fn build(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Empty; cols * rows],
            origin: (0.0, 0.0),
            cell_size: CELL_DIMENSION,
            match_span: None,
        }
    }

    /// Assigns where the board sits in continuous space: the coordinate
    /// of the top-left corner of cell (0, 0) and the cell edge length
    pub fn set_layout(&mut self, origin_x: f32, origin_y: f32, cell_size: f32) {
        self.origin = (origin_x, origin_y);
        self.cell_size = cell_size;
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Overall width of the board in pixels
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    /// Overall height of the board in pixels
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Pixel coordinate of the centre of a cell, for drawing and for
    /// synthesizing pointer events
    pub fn cell_center(&self, col: usize, row: usize) -> (f32, f32) {
        (
            self.origin.0 + (col as f32 + 0.5) * self.cell_size,
            self.origin.1 + (row as f32 + 0.5) * self.cell_size,
        )
    }

    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn is_empty_at(&self, col: usize, row: usize) -> bool {
        self.cell(col, row).is_empty()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Places a marker at the cell containing the given point
    ///
    /// The hit test is an open rectangle per cell: a point exactly on a
    /// gridline belongs to no cell and is rejected. Points outside the
    /// board and points resolving to an occupied cell are also rejected.
    /// Returns whether the marker was placed.
    pub fn place_at_point(&mut self, x: f32, y: f32, marker: Marker) -> bool {
        let (origin_x, origin_y) = self.origin;

        for col in 0..self.cols {
            for row in 0..self.rows {
                let x_west = origin_x + col as f32 * self.cell_size;
                let x_east = x_west + self.cell_size;
                let y_north = origin_y + row as f32 * self.cell_size;
                let y_south = y_north + self.cell_size;

                if x > x_west && x < x_east && y > y_north && y < y_south {
                    if self.cell(col, row).is_empty() {
                        self.place(col, row, marker);
                        return true;
                    }
                    // occupied
                    return false;
                }
            }
        }

        // the point hit no cell
        false
    }

    /// Writes a marker directly into a cell without an occupancy check;
    /// callers validate emptiness themselves
    pub fn place(&mut self, col: usize, row: usize, marker: Marker) {
        self.cells[row * self.cols + col] = Cell::Marked(marker);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empties every cell and forgets any recorded winning run
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
        self.match_span = None;
    }

    pub fn match_span(&self) -> Option<MatchSpan> {
        self.match_span
    }

    pub fn set_match_span(&mut self, span: MatchSpan) {
        self.match_span = Some(span);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
