use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::{App, Mode};
use crate::keymap::Keymap;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    CycleStatus,
    ToggleFullscreen,
    /// Hold the meeting list still until toggled again
    ToggleFocus,
    StepForward,
    StepBack,
    Help,
    ExitMode,
    None,
}

/// What the pointer did, in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Moved or dragged to a cell
    Hover(Position),
    /// Wheel or button press at a cell
    Interact(Position),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key exits help, quit still quits
        return match keymap.lookup(key.code, key.modifiers) {
            Some(Action::Quit) => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    keymap
        .lookup(key.code, key.modifiers)
        .cloned()
        .unwrap_or(Action::None)
}

/// Handle a mouse event
pub fn handle_mouse_event(mouse: MouseEvent) -> PointerAction {
    let at = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerAction::Hover(at),
        MouseEventKind::Down(_)
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => PointerAction::Interact(at),
        MouseEventKind::Up(_) => PointerAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_default_keys() {
        let app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), &app, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('s'), KeyModifiers::NONE), &app, &keymap),
            Action::CycleStatus
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Tab, KeyModifiers::NONE), &app, &keymap),
            Action::ToggleFocus
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('?'), KeyModifiers::SHIFT), &app, &keymap),
            Action::Help
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let mut app = test_app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('s'), KeyModifiers::NONE), &app, &keymap),
            Action::ExitMode
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), &app, &keymap),
            Action::Quit
        );
    }

    #[test]
    fn test_mouse_mapping() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Moved, 3, 4)),
            PointerAction::Hover(Position::new(3, 4))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 1, 2)),
            PointerAction::Interact(Position::new(1, 2))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)),
            PointerAction::Interact(Position::new(0, 0))
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)),
            PointerAction::None
        );
    }
}
