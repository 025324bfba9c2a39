//! Core Connect Four game logic: board, drop resolution, win detection and
//! the turn state machine that reports to a [`GameObserver`].

mod board;
mod engine;
mod observer;
mod player;
pub mod win;

pub use board::{Board, Cell, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use engine::{DropReport, GameEngine, GameOutcome, Move};
pub use observer::{GameEvent, GameObserver, GameResult};
pub use player::Player;
pub use win::{has_win, has_win_through, winning_line};
