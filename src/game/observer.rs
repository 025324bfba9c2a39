use serde::Serialize;

use super::player::Player;
use crate::error::MoveError;

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "player", rename_all = "snake_case")]
pub enum GameResult {
    Win(Player),
    Tie,
}

/// Notifications the engine emits while processing a drop request.
///
/// All methods are invoked synchronously, before `request_drop` returns.
pub trait GameObserver {
    /// Called exactly once per accepted move.
    fn on_piece_landed(&mut self, _row: usize, _column: usize, _player: Player) {}

    /// Called exactly once, on the transition to a terminal state.
    fn on_game_ended(&mut self, _result: GameResult) {}

    /// Called for every rejected request.
    fn on_illegal_move(&mut self, _reason: MoveError) {}
}

/// Ignores every notification.
impl GameObserver for () {}

/// One recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PieceLanded {
        row: usize,
        column: usize,
        player: Player,
    },
    GameEnded {
        #[serde(flatten)]
        result: GameResult,
    },
    IllegalMove {
        #[serde(flatten)]
        reason: MoveError,
    },
}

/// Records every notification in order.
impl GameObserver for Vec<GameEvent> {
    fn on_piece_landed(&mut self, row: usize, column: usize, player: Player) {
        self.push(GameEvent::PieceLanded {
            row,
            column,
            player,
        });
    }

    fn on_game_ended(&mut self, result: GameResult) {
        self.push(GameEvent::GameEnded { result });
    }

    fn on_illegal_move(&mut self, reason: MoveError) {
        self.push(GameEvent::IllegalMove { reason });
    }
}
