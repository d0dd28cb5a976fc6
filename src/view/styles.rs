//! Bar and overlay styling.

use ratatui::style::{Color, Modifier, Style};

/// Style for muted/secondary text (hints, timestamps).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Style for section headers in overlays.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for the marker next to the active source in the menu.
pub const CURRENT_MARKER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::ITALIC);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read `NO_COLOR` from the environment.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Force colors on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// ===== BarStyles =====

/// Styles for the reader bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyles {
    /// Text of a regular entry.
    pub text: Style,
    /// Placeholder text for a missing or unreadable source.
    pub placeholder: Style,
    /// The two navigation buttons.
    pub button: Style,
}

impl BarStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors only modifiers are used, so the buttons still stand out.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                text: Style::default().fg(Color::White).bg(Color::Black),
                placeholder: Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::Black)
                    .add_modifier(Modifier::ITALIC),
                button: Style::default()
                    .fg(Color::Cyan)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                text: Style::default(),
                placeholder: Style::default().add_modifier(Modifier::ITALIC),
                button: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for BarStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}
