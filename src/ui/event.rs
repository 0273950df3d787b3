//! Translation of raw terminal events into selector events.
//!
//! Ctrl-C arrives as an ordinary key press in raw mode, so cancelling is
//! handled here like any other key rather than through a signal handler.

use crate::ui::schema::ActionBinding;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input understood by the selector state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    /// New terminal width in columns.
    Resize(usize),
    Char(char),
    Backspace,
    MoveUp,
    MoveDown,
    Commit,
    Action(&'static str),
    Cancel,
}

/// Map a terminal event to a selector event, or `None` if it means nothing
/// to the selector (mouse, focus, paste, key release, unbound keys).
pub fn translate(event: &Event, actions: &[ActionBinding]) -> Option<SelectorEvent> {
    match event {
        Event::Resize(width, _) => Some(SelectorEvent::Resize(usize::from(*width))),
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, actions),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, actions: &[ActionBinding]) -> Option<SelectorEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Schema bindings go first: Ctrl+S must not end up in the search box.
    if let Some(binding) = actions
        .iter()
        .find(|b| b.code == key.code && key.modifiers.contains(b.modifiers))
    {
        return Some(SelectorEvent::Action(binding.tag));
    }

    match key.code {
        KeyCode::Esc => Some(SelectorEvent::Cancel),
        KeyCode::Char('c') if ctrl => Some(SelectorEvent::Cancel),
        KeyCode::Enter => Some(SelectorEvent::Commit),
        KeyCode::Up => Some(SelectorEvent::MoveUp),
        KeyCode::Down => Some(SelectorEvent::MoveDown),
        KeyCode::Backspace => Some(SelectorEvent::Backspace),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(SelectorEvent::Char(c))
        }
        _ => None,
    }
}
