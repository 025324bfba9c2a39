//! Terminal UI: the presentation collaborator that feeds column requests to
//! the engine and renders its notifications.

mod app;
mod game_view;

pub use app::{App, StatusLine};
