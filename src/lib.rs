//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal UI built on Ratatui.
//! The engine owns the board and turn tracker of one game session and reports
//! every transition synchronously to a [`game::GameObserver`].
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, drop resolution, win detection, engine
//! - [`ui`]: Terminal UI: the presentation collaborator
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: flexi_logger setup for the binaries
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
