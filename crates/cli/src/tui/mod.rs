//! Interactive query mode.

mod app;
mod event;
mod ui;

use std::io;

use color_eyre::eyre::{eyre, Result};
use crossterm::{
    event::read,
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::prelude::*;
use taskgraph_core::index::TaskNode;

pub use app::Outcome;
use app::{App, Phase};
use event::map_event;

/// Run an interactive session over already-loaded nodes.
///
/// `seed` pre-fills the query buffer.
pub fn run(nodes: &[TaskNode], limit: usize, seed: String) -> Result<Outcome> {
    let app = App::new(nodes, limit, seed);

    let mut terminal = setup_terminal()?;

    // Run with cleanup on panic
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run_app(&mut terminal, app)
    }));

    // Always restore terminal
    restore_terminal(&mut terminal)?;

    match result {
        Ok(outcome) => outcome,
        Err(_) => Err(eyre!("Interactive session panicked")),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<'_>,
) -> Result<Outcome> {
    loop {
        match app.phase {
            Phase::Rendering => {
                terminal.draw(|frame| ui::draw(frame, &app))?;
                app.rendered();
            }
            Phase::AwaitingInput => {
                // Blocks until the terminal delivers an event
                if let Some(msg) = map_event(read()?) {
                    app.update(msg);
                }
            }
            Phase::Exiting(outcome) => return Ok(outcome),
        }
    }
}
