//! Status bar rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

const KEYS: &str = " [type] search  [Backspace] delete  [Enter] done  [Ctrl-C] abort";

pub fn draw(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let counts = format!("{} / {} nodes", app.hits.len(), app.total);

    // Calculate padding for right-alignment
    let padding =
        area.width.saturating_sub(KEYS.len() as u16 + counts.len() as u16 + 1) as usize;

    let line = Line::from(vec![
        Span::styled(KEYS, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding)),
        Span::styled(counts, Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
