//! The reader bar widget.

use super::constants::{NEXT_BUTTON, PREV_BUTTON};
use super::layout::BarLayout;
use super::styles::BarStyles;
use crate::pager::{Paginator, TextMeasure};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Draw the bar: buttons at both ends and the current entry between them.
///
/// Text wider than the text area is clipped on screen; splitting happens only
/// when the reader advances.
pub fn render_bar<M: TextMeasure>(
    frame: &mut Frame,
    layout: &BarLayout,
    reader: &Paginator<M>,
    styles: &BarStyles,
) {
    frame.render_widget(Block::default().style(styles.text), layout.bar);

    frame.render_widget(
        Paragraph::new(Span::styled(PREV_BUTTON, styles.button)),
        layout.prev_button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(NEXT_BUTTON, styles.button)),
        layout.next_button,
    );

    let style = if reader.is_placeholder() {
        styles.placeholder
    } else {
        styles.text
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(reader.display(), style))),
        layout.text,
    );
}
