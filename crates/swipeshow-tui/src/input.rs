use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::Mode;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Reset,
    SwipeUp,
    SwipeDown,
    Next,
    Prev,
    OpenExternal,
    ToggleHelp,
    ExitMode,
    // Mouse gesture, carrying the terminal row
    DragStart(u16),
    Drag(u16),
    DragEnd(u16),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, mode: Mode, keymap: &Keymap) -> Action {
    if mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Symbols like '?' arrive with SHIFT on some terminals
    match key.code {
        KeyCode::Char(c) if key.modifiers == KeyModifiers::SHIFT && !c.is_ascii_alphabetic() => keymap
            .get(&KeyBinding::simple(key.code))
            .copied()
            .unwrap_or(Action::None),
        _ => Action::None,
    }
}

/// Map left-button mouse events to drag actions.
/// Help only blocks new drags; a release always ends the current one.
pub fn handle_mouse_event(mouse: MouseEvent, mode: Mode) -> Action {
    if mode == Mode::Help && !matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
        return Action::None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::DragStart(mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => Action::Drag(mouse.row),
        MouseEventKind::Up(MouseButton::Left) => Action::DragEnd(mouse.row),
        _ => Action::None,
    }
}
