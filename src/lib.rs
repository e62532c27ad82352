//! A tic-tac-toe game engine with a greedy computer opponent
//!
//! The engine owns the board model, move validation, win/tie detection
//! and the turn/scoring state machine. Rendering and input translation
//! are the caller's job: it feeds pointer-release events (in board-local
//! coordinates) into a [`session::GameSession`] and draws from the
//! session's [`session::Snapshot`].
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_engine::session::{GameSession, Mode};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut session = GameSession::new(Mode::MultiPlayer);
//!
//! // player one claims the centre cell by its pixel midpoint
//! let result = session.handle_pointer(180.0, 180.0);
//! assert!(result.accepted);
//!
//! // the same point now resolves to an occupied cell
//! let result = session.handle_pointer(180.0, 180.0);
//! assert!(!result.accepted);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod opponent;

pub mod session;


/// The number of consecutive cells a marker needs to win
pub const RUN_LENGTH: usize = 3;

/// Rows and columns of the standard board
pub const DEFAULT_BOARD_DIMENSION: usize = 3;

/// Default edge length of one cell in board-local pixels
pub const CELL_DIMENSION: f32 = 120.0;

// ensure the default board can contain a winning run
const_assert!(DEFAULT_BOARD_DIMENSION >= RUN_LENGTH);
