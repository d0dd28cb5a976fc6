//! Layout dimension constants for TUI rendering.

/// Width of each navigation button in cells.
pub const BUTTON_WIDTH: u16 = 3;

/// Previous-entry button face.
pub const PREV_BUTTON: &str = " ◀ ";

/// Next-entry button face.
pub const NEXT_BUTTON: &str = " ▶ ";

/// Width of the sources menu popup in columns.
pub const MENU_WIDTH: u16 = 60;

/// Height of the add-file prompt (border + input line).
pub const PROMPT_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
