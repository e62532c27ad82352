//! The turn-taking state machine tying the board, win detection and the
//! computer opponent together

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Cell, Marker, MatchSpan};
use crate::{opponent, rules};

/// The marker the human drives in single player
const HUMAN: Marker = Marker::X;
/// The marker the heuristic drives in single player
const COMPUTER: Marker = Marker::O;
/// The marker that opens every round
const STARTING_MARKER: Marker = Marker::X;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mode {
    /// Human (X) against the greedy heuristic (O)
    SinglePlayer,
    /// Two humans sharing the pointer
    MultiPlayer,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    Win(Marker),
    Tie,
}

/// Cumulative results across rounds; survives `reset`, zeroed on a mode
/// change
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

/// What a single move attempt did
///
/// `outcome` is `Some` only when this move just concluded the round, so
/// the host can derive its "move placed" / "win" / "tie" signals from
/// one result value.
#[derive(Copy, Clone, Debug)]
pub struct MoveResult {
    pub accepted: bool,
    pub outcome: Option<Outcome>,
}

impl MoveResult {
    fn rejected() -> Self {
        Self {
            accepted: false,
            outcome: None,
        }
    }
}

/// Read-only view of the session for rendering
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub cols: usize,
    pub rows: usize,
    /// Cells in row-major order
    pub grid: Vec<Cell>,
    pub active_marker: Marker,
    pub outcome: Outcome,
    pub scores: Scoreboard,
    pub match_span: Option<MatchSpan>,
}

/// One game session: a board, the active turn, the outcome and the
/// running scoreboard
///
/// All operations are synchronous and run to completion; the session
/// holds no locks and expects callers to serialize access. Once a round
/// concludes, every move attempt is ignored until [`GameSession::reset`].
pub struct GameSession {
    mode: Mode,
    board: Board,
    active: Marker,
    outcome: Outcome,
    scores: Scoreboard,
    rng: StdRng,
}

impl GameSession {
    pub fn new(mode: Mode) -> Self {
        Self::with_board(mode, Board::new())
    }

    /// Builds a session around a pre-configured board (non-default
    /// dimensions or layout)
    pub fn with_board(mode: Mode, board: Board) -> Self {
        Self {
            mode,
            board,
            active: STARTING_MARKER,
            outcome: Outcome::InProgress,
            scores: Scoreboard::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Builds a session with a caller-supplied generator so the
    /// opponent's random fallback is reproducible
    pub fn with_rng(mode: Mode, rng: StdRng) -> Self {
        Self {
            rng,
            ..Self::new(mode)
        }
    }

    /// Consumes a pointer-release event in board-local coordinates
    ///
    /// Ignored while the round is concluded and, in single player,
    /// while it is the computer's turn. A pointer resolving to no cell
    /// or an occupied cell is rejected without a turn change.
    pub fn handle_pointer(&mut self, x: f32, y: f32) -> MoveResult {
        if self.outcome != Outcome::InProgress {
            return MoveResult::rejected();
        }
        if self.mode == Mode::SinglePlayer && self.active == COMPUTER {
            return MoveResult::rejected();
        }
        if !self.board.place_at_point(x, y, self.active) {
            return MoveResult::rejected();
        }
        self.conclude_move()
    }

    /// Advances the computer once per host frame
    ///
    /// In single player, when the computer holds the turn and the round
    /// is still running, its move is selected and committed through the
    /// same transition sequence a pointer move takes. A no-op in every
    /// other state, so the host loop can call it unconditionally.
    pub fn tick(&mut self) -> MoveResult {
        if self.outcome != Outcome::InProgress {
            return MoveResult::rejected();
        }
        if self.mode != Mode::SinglePlayer || self.active != COMPUTER {
            return MoveResult::rejected();
        }

        let (col, row) = opponent::select_move(&self.board, COMPUTER, HUMAN, &mut self.rng);
        self.board.place(col, row, COMPUTER);
        self.conclude_move()
    }

    /// Post-placement transition: win check, tie check, turn flip
    fn conclude_move(&mut self) -> MoveResult {
        let mover = self.active;

        if rules::has_match(&self.board, mover) {
            if let Some(span) = rules::locate_match(&self.board, mover) {
                self.board.set_match_span(span);
            }
            self.outcome = Outcome::Win(mover);
            match mover {
                Marker::X => self.scores.x_wins += 1,
                Marker::O => self.scores.o_wins += 1,
            }
            debug!(?mover, "round won");
            return MoveResult {
                accepted: true,
                outcome: Some(self.outcome),
            };
        }

        if self.board.is_full() {
            self.outcome = Outcome::Tie;
            self.scores.ties += 1;
            debug!("round tied");
            return MoveResult {
                accepted: true,
                outcome: Some(Outcome::Tie),
            };
        }

        self.active = mover.opponent();
        MoveResult {
            accepted: true,
            outcome: None,
        }
    }

    /// Clears the board for the next round; the scoreboard carries over
    pub fn reset(&mut self) {
        self.board.reset();
        self.outcome = Outcome::InProgress;
        self.active = STARTING_MARKER;
    }

    /// Switches the play mode, zeroing the scoreboard when the mode
    /// actually changes, and starts a fresh round
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.scores = Scoreboard::default();
            debug!(?mode, "mode changed, scoreboard cleared");
        }
        self.mode = mode;
        self.reset();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cols: self.board.cols(),
            rows: self.board.rows(),
            grid: self.board.cells().to_vec(),
            active_marker: self.active,
            outcome: self.outcome,
            scores: self.scores,
            match_span: self.board.match_span(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_marker(&self) -> Marker {
        self.active
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
