//! Ranked result lines.

use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
};
use taskgraph_core::index::TaskState;

use crate::cmd::output::format_hit;
use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let items: Vec<ListItem> = app
        .hits
        .iter()
        .map(|hit| {
            let style = match hit.node.state {
                TaskState::Open => Style::default(),
                TaskState::Closed => Style::default().fg(Color::DarkGray),
                TaskState::Unknown => Style::default().fg(Color::Blue),
            };
            ListItem::new(Line::styled(format_hit(hit.node), style))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}
