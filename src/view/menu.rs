//! Sources menu rendering.

use crate::state::{AppState, MenuItem};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph};

use super::constants::MENU_WIDTH;
use super::styles::CURRENT_MARKER;

/// Render the sources menu overlay.
///
/// Lists Show, Hide, every registered source (the active one marked), Add
/// file… and Exit, with the selected row highlighted. Only renders when
/// `state.menu.is_visible()`.
pub fn render_source_menu(frame: &mut Frame, state: &AppState) {
    if !state.menu.is_visible() {
        return;
    }

    let items = state.menu_items();
    let menu_area = centered_rect(MENU_WIDTH, items.len(), frame.area());
    frame.render_widget(Clear, menu_area);

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let prefix = if i == state.menu.selected_index() {
                "> "
            } else {
                "  "
            };
            let mut spans = vec![Span::raw(prefix), Span::raw(item.label())];
            if matches!(item, MenuItem::Source(path) if state.is_current_source(path)) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("[CURRENT]", CURRENT_MARKER));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .title(
                    Line::from(Span::styled(
                        " Sources ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .alignment(Alignment::Center),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::White))
                .style(Style::default().bg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(state.menu.selected_index()));
    frame.render_stateful_widget(list, menu_area, &mut list_state);

    let footer_area = Rect {
        x: menu_area.x + 1,
        y: menu_area.y + menu_area.height.saturating_sub(2),
        width: menu_area.width.saturating_sub(2),
        height: 1,
    };
    let footer = Paragraph::new("↑/↓: Navigate  Enter: Select  Esc: Close")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

/// Centered rect `width_cols` wide, tall enough for `row_count` rows plus
/// borders and footer.
fn centered_rect(width_cols: u16, row_count: usize, area: Rect) -> Rect {
    let popup_width = width_cols.min(area.width);
    let rows = u16::try_from(row_count).unwrap_or(u16::MAX);
    let popup_height = rows.saturating_add(4).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}
