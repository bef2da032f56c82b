//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action in a list prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Up,
    Down,
    Toggle,
    Confirm,
    Cancel,
}

/// Action in a text or yes/no prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Maps a key to a list action. `j`/`k`/`l` mirror down/up/toggle.
pub fn list_action(key: &KeyEvent) -> Option<ListAction> {
    if is_interrupt(key) {
        return Some(ListAction::Cancel);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ListAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(ListAction::Down),
        KeyCode::Char(' ') | KeyCode::Char('l') => Some(ListAction::Toggle),
        KeyCode::Enter => Some(ListAction::Confirm),
        KeyCode::Esc => Some(ListAction::Cancel),
        _ => None,
    }
}

pub fn text_action(key: &KeyEvent) -> Option<TextAction> {
    if is_interrupt(key) {
        return Some(TextAction::Cancel);
    }

    match key.code {
        KeyCode::Char(c) => Some(TextAction::Insert(c)),
        KeyCode::Backspace => Some(TextAction::Backspace),
        KeyCode::Enter => Some(TextAction::Submit),
        KeyCode::Esc => Some(TextAction::Cancel),
        _ => None,
    }
}
