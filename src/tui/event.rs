use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{App, Message};

/// Map key events to messages based on current app state
pub fn handle_key(key: KeyEvent, app: &App) -> Option<Message> {
    // Windows terminals report releases and repeats as separate events
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle help toggle globally
    if key.code == KeyCode::Char('?') {
        return Some(Message::ToggleHelp);
    }

    // If help is shown, any key closes it
    if app.show_help {
        return Some(Message::ToggleHelp);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
            Some(Message::Toggle)
        }
        _ => None,
    }
}
