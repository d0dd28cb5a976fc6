//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only the key code and modifiers take part in the lookup; event kind
    /// and keyboard state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Reading
        keys.bind(KeyCode::Right, KeyModifiers::CONTROL, KeyAction::Next);
        keys.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::Next);
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::Next);
        keys.bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::Next);
        keys.bind(KeyCode::Left, KeyModifiers::CONTROL, KeyAction::Previous);
        keys.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::Previous);
        keys.bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::Previous);

        // Bar
        keys.bind(
            KeyCode::Char('h'),
            KeyModifiers::NONE,
            KeyAction::ToggleVisibility,
        );
        keys.bind(KeyCode::Up, KeyModifiers::CONTROL, KeyAction::MoveBarUp);
        keys.bind(KeyCode::Down, KeyModifiers::CONTROL, KeyAction::MoveBarDown);

        // Sources
        keys.bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::ToggleMenu);
        keys.bind(KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::AddSource);

        // Application controls
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
