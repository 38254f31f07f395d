use crate::config::DemoKind;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the app does with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Ignored (key release or repeat).
    None,
    Quit,
    SwitchDemo(DemoKind),
    FocusNext,
    FocusPrev,
    /// Handed to the focused element.
    Forward(KeyEvent),
}

pub fn classify_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::F(n) => match DemoKind::ALL.get(usize::from(n).wrapping_sub(1)) {
            Some(kind) => InputAction::SwitchDemo(*kind),
            None => InputAction::Forward(key),
        },
        KeyCode::Tab | KeyCode::Down => InputAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => InputAction::FocusPrev,
        _ => InputAction::Forward(key),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
