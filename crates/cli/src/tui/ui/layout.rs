//! Main layout and frame composition.

use ratatui::{prelude::*, widgets::Paragraph};

use super::{results, status};
use crate::tui::app::App;

const PROMPT: &str = "Query: ";

/// Draw the entire application UI.
pub fn draw(frame: &mut Frame, app: &App<'_>) {
    // Prompt, results, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(2)])
        .split(frame.area());

    draw_prompt(frame, chunks[0], app);
    results::draw(frame, chunks[1], app);
    status::draw(frame, chunks[2], app);
}

fn draw_prompt(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Color::Cyan).bold()),
        Span::raw(app.query.as_str()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    frame.set_cursor_position((cursor_column(area, &app.query), area.y));
}

/// Column just past the typed query, clamped to the prompt row.
fn cursor_column(area: Rect, query: &str) -> u16 {
    let typed = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(PROMPT.len() as u16).saturating_add(typed);
    x.min(area.right().saturating_sub(1))
}
