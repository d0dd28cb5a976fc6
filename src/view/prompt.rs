//! Add-file prompt widget.

use super::constants::{MENU_WIDTH, PROMPT_HEIGHT};
use crate::state::PromptState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Single-line path input. Renders nothing while the prompt is closed.
pub struct PathPrompt<'a> {
    state: &'a PromptState,
}

impl<'a> PathPrompt<'a> {
    /// Create new PathPrompt widget.
    pub fn new(state: &'a PromptState) -> Self {
        Self { state }
    }

    /// Where the prompt goes within `area`: centered, one input row tall.
    pub fn area(area: Rect) -> Rect {
        let width = MENU_WIDTH.min(area.width);
        let height = PROMPT_HEIGHT.min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

impl Widget for PathPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let PromptState::Typing { input, cursor } = self.state else {
            return;
        };

        let before: String = input.chars().take(*cursor).collect();
        let mut after = input.chars().skip(*cursor);
        let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
        let rest: String = after.collect();

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char,
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(rest),
        ]);

        Clear.render(area, buf);
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Add file (Enter: open, Esc: cancel) ")
                    .style(Style::default().bg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}
