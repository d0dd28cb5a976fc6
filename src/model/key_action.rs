//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
///
/// Keys typed while the sources menu or the add-file prompt is open are
/// handled by those overlays directly and never reach this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Reading
    /// Advance to the next non-blank entry, splitting the current one if it
    /// is too wide. Default: Ctrl+→/→/Space/n
    Next,
    /// Go back to the previous non-blank entry. Default: Ctrl+←/←/p
    Previous,

    // Bar
    /// Hide or show the reader bar. Default: h
    ToggleVisibility,
    /// Move the bar one row up. Default: Ctrl+↑
    MoveBarUp,
    /// Move the bar one row down. Default: Ctrl+↓
    MoveBarDown,

    // Sources
    /// Open or close the sources menu. Default: m
    ToggleMenu,
    /// Open the add-file prompt. Default: a
    AddSource,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
