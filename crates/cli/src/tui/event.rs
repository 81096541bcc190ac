//! Event handling: maps terminal events to application messages.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::Message;

/// Map a terminal event to an optional message.
pub fn map_event(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) => map_key_event(key),
        Event::Resize(..) => Some(Message::Redraw),
        _ => None,
    }
}

fn map_key_event(key: KeyEvent) -> Option<Message> {
    // Release and repeat events are reported on some platforms
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Interrupt),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Message::Append(c)),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Enter => Some(Message::Submit),
        _ => None,
    }
}
