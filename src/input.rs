//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::models::Focus;

/// What a key press asks the form to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Insert(char),
    Backspace,
    ClearField,
    NextChoice,
    PrevChoice,
    FocusNext,
    FocusPrev,
    /// Enter: move on from a field, or press the focused button
    Activate,
    Submit,
    Download,
    Quit,
}

/// Map a key event to a form action for the given focus
///
/// Returns None for keys the form does not handle.
pub fn map_key(key_code: KeyCode, modifiers: KeyModifiers, focus: Focus) -> Option<FormAction> {
    let on_choice = focus.field().is_some_and(|f| f.is_choice());
    let on_text = focus.field().is_some_and(|f| !f.is_choice());

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key_code {
            KeyCode::Char('c') => Some(FormAction::Quit),
            KeyCode::Char('s') => Some(FormAction::Submit),
            KeyCode::Char('d') => Some(FormAction::Download),
            KeyCode::Char('u') if focus.field().is_some() => Some(FormAction::ClearField),
            _ => None,
        };
    }

    match key_code {
        KeyCode::Esc => Some(FormAction::Quit),
        KeyCode::Tab | KeyCode::Down => Some(FormAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(FormAction::FocusPrev),
        KeyCode::Enter => Some(FormAction::Activate),

        KeyCode::Right if on_choice => Some(FormAction::NextChoice),
        KeyCode::Left if on_choice => Some(FormAction::PrevChoice),
        KeyCode::Char(' ') if on_choice => Some(FormAction::NextChoice),

        KeyCode::Backspace if on_text => Some(FormAction::Backspace),
        // Alt+key is left to the terminal
        KeyCode::Char(c) if on_text && !modifiers.contains(KeyModifiers::ALT) => {
            Some(FormAction::Insert(c))
        }

        _ => None,
    }
}
