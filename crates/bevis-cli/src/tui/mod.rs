//! Terminal UI for bevis
//!
//! Owns the terminal lifecycle; app state, handlers and rendering live
//! in the submodules.

pub mod app;
pub mod handlers;
pub mod popups;
pub mod rendering;
pub mod themes;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub async fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Restore the terminal on every exit path, including panics
    let _restore = scopeguard::guard((), |_| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    });

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new();
    app.start_config_load();
    app.run(&mut terminal).await
}
