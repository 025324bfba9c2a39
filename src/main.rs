use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::GameEvent;
use connect_four::logging;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the number of columns
    #[arg(long)]
    width: Option<usize>,

    /// Override the number of rows
    #[arg(long)]
    height: Option<usize>,

    /// Replay comma-separated columns without the TUI and print each event as JSON
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(width) = cli.width {
        config.board.width = width;
        config.ui.start_column = config.ui.start_column.min(width.saturating_sub(1));
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate().context("invalid configuration")?;

    match cli.moves {
        Some(moves) => {
            let _logger = logging::setup_stderr_logging(&config.logging)?;
            replay(&config, &moves)
        }
        None => {
            let _logger = logging::setup_file_logging(&config.logging)?;
            let app = App::new(config)?;
            run_tui(app).context("terminal UI failed")
        }
    }
}

fn replay(config: &AppConfig, moves: &[usize]) -> Result<()> {
    let mut engine = config.new_engine()?;
    let mut out = io::stdout().lock();

    for &column in moves {
        let mut events: Vec<GameEvent> = Vec::new();
        // Illegal moves are part of the event stream, not a failure
        let _ = engine.request_drop(column, &mut events);
        for event in events {
            writeln!(out, "{}", serde_json::to_string(&event)?)?;
        }
    }

    info!(
        "replayed {} requests, outcome {:?}\n{}",
        moves.len(),
        engine.outcome(),
        engine.board()
    );
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
