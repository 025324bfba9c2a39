use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{error, info};
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{GameEngine, GameObserver, GameResult, Player};

/// Turns engine notifications into the one-line message shown under the board.
#[derive(Debug, Default)]
pub struct StatusLine {
    message: Option<String>,
}

impl StatusLine {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

impl GameObserver for StatusLine {
    fn on_piece_landed(&mut self, _row: usize, _column: usize, _player: Player) {
        self.message = None;
    }

    fn on_game_ended(&mut self, result: GameResult) {
        self.set(match result {
            GameResult::Win(player) => format!("{player} won!"),
            GameResult::Tie => "Board filled. Game is a tie.".to_string(),
        });
    }

    fn on_illegal_move(&mut self, reason: MoveError) {
        self.set(match reason {
            MoveError::ColumnFull { .. } => "Column is full!",
            MoveError::ColumnOutOfRange { .. } => "Invalid column!",
            MoveError::GameAlreadyOver => "Game over! Press 'r' to restart.",
        });
    }
}

pub struct App {
    config: AppConfig,
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    status: StatusLine,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = config.new_engine()?;
        Ok(App {
            selected_column: config.ui.start_column,
            config,
            engine,
            should_quit: false,
            status: StatusLine::default(),
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.status.message()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events(tick_rate)?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self, tick_rate: Duration) -> io::Result<()> {
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.status.clear();
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                self.status.clear();
                if self.selected_column + 1 < self.engine.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        // Rejections are reported through the status line
        let _ = self
            .engine
            .request_drop(self.selected_column, &mut self.status);
    }

    /// Replace the engine with a fresh one; a finished game is never reset in place
    fn new_game(&mut self) {
        match self.config.new_engine() {
            Ok(engine) => {
                self.engine = engine;
                self.selected_column = self.config.ui.start_column;
                self.status.set("New game started!");
                info!("new game started");
            }
            Err(e) => {
                error!("could not start a new game: {e}");
                self.status.set(format!("Could not start a new game: {e}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            self.status.message(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameOutcome;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn drop_in(app: &mut App, column: usize) {
        while app.selected_column() > column {
            press(app, KeyCode::Left);
        }
        while app.selected_column() < column {
            press(app, KeyCode::Right);
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.selected_column(), 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            drop_in(&mut app, col);
        }
        assert_eq!(app.engine().outcome(), GameOutcome::Win(Player::One));
        assert_eq!(app.message(), Some("Player 1 won!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().moves_played(), 0);
        assert_eq!(app.engine().outcome(), GameOutcome::Ongoing);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_restart_keeps_configured_board() {
        let mut config = AppConfig::default();
        config.board.width = 9;
        config.board.height = 8;
        config.ui.start_column = 5;
        let mut app = App::new(config).unwrap();

        drop_in(&mut app, 0);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().board().width(), 9);
        assert_eq!(app.engine().board().height(), 8);
        assert_eq!(app.engine().moves_played(), 0);
        assert_eq!(app.selected_column(), 5);
    }

    #[test]
    fn test_restart_reports_unusable_board() {
        let mut app = App::new(AppConfig::default()).unwrap();
        drop_in(&mut app, 3);
        app.config.board.width = 0;

        press(&mut app, KeyCode::Char('r'));
        // The running game is kept rather than swapped for a different board
        assert_eq!(app.engine().moves_played(), 1);
        assert!(app
            .message()
            .is_some_and(|m| m.starts_with("Could not start a new game")));
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..6 {
            drop_in(&mut app, 2);
        }
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.engine().moves_played(), 6);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_status_line_messages() {
        let mut status = StatusLine::default();
        status.on_game_ended(GameResult::Tie);
        assert_eq!(status.message(), Some("Board filled. Game is a tie."));
        status.on_illegal_move(MoveError::ColumnOutOfRange { column: 8, width: 7 });
        assert_eq!(status.message(), Some("Invalid column!"));
        status.on_piece_landed(5, 0, Player::Two);
        assert_eq!(status.message(), None);
    }
}
