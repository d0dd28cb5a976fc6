//! Bar placement and mouse hit-testing.
//!
//! The bar is one row spanning the terminal width: the previous button on the
//! left, the next button on the right and the entry text between them.

use super::bar::render_bar;
use super::constants::BUTTON_WIDTH;
use super::help::render_help_overlay;
use super::menu::render_source_menu;
use super::prompt::PathPrompt;
use super::styles::BarStyles;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

/// Which part of the bar a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHit {
    /// The previous-entry button.
    Previous,
    /// The next-entry button.
    Next,
    /// The text area between the buttons.
    Text,
    /// Not on the bar.
    Outside,
}

/// Screen areas of the bar for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// Whole bar row.
    pub bar: Rect,
    /// Previous-entry button.
    pub prev_button: Rect,
    /// Entry text.
    pub text: Rect,
    /// Next-entry button.
    pub next_button: Rect,
}

impl BarLayout {
    /// Place the bar `offset` rows above the bottom of `area`.
    ///
    /// An offset beyond the top row pins the bar to the top row.
    pub fn new(area: Rect, offset: u16) -> Self {
        let offset = offset.min(max_bar_offset(area.height));
        let y = area.bottom().saturating_sub(1 + offset);
        let bar = Rect::new(area.x, y, area.width, area.height.min(1));

        let button = BUTTON_WIDTH.min(bar.width / 2);
        let prev_button = Rect::new(bar.x, y, button, bar.height);
        let next_button = Rect::new(bar.right() - button, y, button, bar.height);
        let text = Rect::new(
            prev_button.right(),
            y,
            bar.width.saturating_sub(2 * button),
            bar.height,
        );

        Self {
            bar,
            prev_button,
            text,
            next_button,
        }
    }

    /// Classify a mouse position.
    pub fn hit(&self, column: u16, row: u16) -> BarHit {
        let inside = |r: Rect| {
            row >= r.y && row < r.bottom() && column >= r.x && column < r.right()
        };
        if inside(self.prev_button) {
            BarHit::Previous
        } else if inside(self.next_button) {
            BarHit::Next
        } else if inside(self.text) {
            BarHit::Text
        } else {
            BarHit::Outside
        }
    }
}

/// Highest bar offset that keeps it on a terminal `height` rows tall.
pub fn max_bar_offset(height: u16) -> u16 {
    height.saturating_sub(1)
}

/// Widest entry, in cells, the bar shows without splitting.
///
/// Bar width minus both buttons minus the configured margin.
pub fn max_text_width(bar_width: u16, text_margin: u16) -> usize {
    usize::from(bar_width.saturating_sub(2 * BUTTON_WIDTH).saturating_sub(text_margin))
}

/// Bar offset that puts the bar on `row` of a terminal `height` rows tall.
pub fn offset_for_row(row: u16, height: u16) -> u16 {
    max_bar_offset(height).saturating_sub(row)
}

/// Render one frame: the bar when visible, then any open overlays on top.
///
/// Overlays draw even while the bar is hidden so the menu can bring it back.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &BarStyles) {
    let area = frame.area();

    if state.visible {
        let layout = BarLayout::new(area, state.bar_offset);
        render_bar(frame, &layout, state.reader(), styles);
    }

    render_source_menu(frame, state);

    if state.prompt.is_open() {
        frame.render_widget(PathPrompt::new(&state.prompt), PathPrompt::area(area));
    }

    if state.help_visible {
        render_help_overlay(frame);
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
