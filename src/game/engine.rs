use log::{debug, info, warn};

use super::board::Board;
use super::observer::{GameObserver, GameResult};
use super::player::Player;
use super::win;
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Player),
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::Ongoing
    }

    /// The terminal result, or `None` while the game is still running
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameOutcome::Ongoing => None,
            GameOutcome::Win(player) => Some(GameResult::Win(player)),
            GameOutcome::Tie => Some(GameResult::Tie),
        }
    }
}

/// A recorded move: where the piece came to rest and who dropped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// What an accepted drop produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropReport {
    pub mv: Move,
    pub outcome: GameOutcome,
}

/// One game session: board, turn tracker and outcome.
///
/// Player 1 always moves first. Once the outcome is terminal every further
/// request fails with [`MoveError::GameAlreadyOver`]; start a new game with a
/// new engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
    moves_played: usize,
    last_move: Option<Move>,
}

impl GameEngine {
    /// Start a game on an empty board of the given dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(width, height)?))
    }

    /// Start a game on the standard 7x6 board
    pub fn standard() -> Self {
        Self::with_board(Board::standard())
    }

    fn with_board(board: Board) -> Self {
        GameEngine {
            board,
            current_player: Player::One,
            outcome: GameOutcome::Ongoing,
            moves_played: 0,
            last_move: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is. After a win this stays the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Number of accepted moves so far
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Columns that would accept a drop right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Rejected requests leave the engine untouched and are reported both as
    /// the returned error and through `observer.on_illegal_move`.
    pub fn request_drop(
        &mut self,
        column: usize,
        observer: &mut dyn GameObserver,
    ) -> Result<DropReport, MoveError> {
        match self.apply_drop(column, observer) {
            Ok(report) => Ok(report),
            Err(reason) => {
                warn!("rejected drop in column {column}: {reason}");
                observer.on_illegal_move(reason);
                Err(reason)
            }
        }
    }

    fn apply_drop(
        &mut self,
        column: usize,
        observer: &mut dyn GameObserver,
    ) -> Result<DropReport, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        let mv = Move { column, row, player };
        self.moves_played += 1;
        self.last_move = Some(mv);
        debug!("{player} landed at row {row}, column {column}");
        observer.on_piece_landed(row, column, player);

        // Win takes precedence: the fullness scan only runs when nobody won.
        self.outcome = if win::has_win_through(&self.board, row, column) {
            GameOutcome::Win(player)
        } else if self.board.is_full() {
            GameOutcome::Tie
        } else {
            GameOutcome::Ongoing
        };

        match self.outcome.result() {
            Some(result) => {
                info!("game over after {} moves: {result:?}", self.moves_played);
                observer.on_game_ended(result);
            }
            None => self.current_player = player.other(),
        }

        Ok(DropReport {
            mv,
            outcome: self.outcome,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::standard()
    }
}
