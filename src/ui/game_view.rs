use crate::game::{winning_line, Board, GameEngine, GameOutcome, Player, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_height = u16::try_from(engine.board().height() + 4).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (status, color) = match engine.outcome() {
        GameOutcome::Ongoing => {
            let player = engine.current_player();
            (format!("Current Player: {player}"), player_color(player))
        }
        GameOutcome::Win(player) => (format!("Game Over  |  {player} won"), player_color(player)),
        GameOutcome::Tie => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let board = engine.board();
    let width = board.width();
    let highlight: Vec<Position> = match engine.outcome() {
        GameOutcome::Win(player) => winning_line(board, player)
            .map(|line| line.to_vec())
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        lines.push(board_row(board, row, &highlight));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column && !engine.is_terminal() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn board_row<'a>(board: &Board, row: usize, highlight: &[Position]) -> Line<'a> {
    let mut spans = vec![Span::raw("  ║")];
    for col in 0..board.width() {
        let span = match board.get(row, col).player() {
            None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            Some(player) => {
                let mut style = Style::default().fg(player_color(player));
                if highlight.contains(&Position::new(row, col)) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                Span::styled(" ● ", style)
            }
        };
        spans.push(span);
    }
    spans.push(Span::raw(" ║"));
    Line::from(spans)
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  R: New game  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_DIMENSION;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_shows_winner() {
        let mut engine = GameEngine::standard();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.request_drop(col, &mut ()).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| render(f, &engine, 0, Some("Player 1 won!")))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Game Over  |  Player 1 won"));
        assert!(text.contains("Player 1 won!"));
    }

    #[test]
    fn test_render_widest_board_labels_fit() {
        let engine = GameEngine::new(MAX_DIMENSION, MAX_DIMENSION).unwrap();
        let width = (MAX_DIMENSION * 3 + 6) as u16;
        let height = (MAX_DIMENSION + 14) as u16;
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render(f, &engine, MAX_DIMENSION - 1, None))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect();
        let labels = rows
            .iter()
            .find(|row| row.contains(" 1 ") && row.contains(" 2 "))
            .expect("column label row");
        // Two-digit labels stay three cells wide up to the last column
        let expected = format!("{} {}", MAX_DIMENSION - 1, MAX_DIMENSION);
        assert!(labels.trim_end().ends_with(&expected));
        let border = rows
            .iter()
            .find(|row| row.contains('╔'))
            .expect("top border row");
        assert_eq!(
            labels.trim_end().chars().count() + 3,
            border.trim_end().chars().count()
        );
    }
}
