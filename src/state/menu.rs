//! State for the sources menu.

use std::path::{Path, PathBuf};

/// One row of the sources menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// Make the bar visible.
    Show,
    /// Hide the bar.
    Hide,
    /// Switch to a registered source.
    Source(PathBuf),
    /// Open the add-file prompt.
    AddFile,
    /// Quit the reader.
    Exit,
}

impl MenuItem {
    /// Row text, without the current-source marker.
    pub fn label(&self) -> String {
        match self {
            MenuItem::Show => "Show".to_string(),
            MenuItem::Hide => "Hide".to_string(),
            MenuItem::Source(path) => path.display().to_string(),
            MenuItem::AddFile => "Add file…".to_string(),
            MenuItem::Exit => "Exit".to_string(),
        }
    }
}

/// Menu rows for the given registered sources, in display order.
pub fn menu_items<'a>(sources: impl IntoIterator<Item = &'a Path>) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Show, MenuItem::Hide];
    items.extend(sources.into_iter().map(|p| MenuItem::Source(p.to_path_buf())));
    items.push(MenuItem::AddFile);
    items.push(MenuItem::Exit);
    items
}

/// State for the sources menu popup.
///
/// # Cardinality
/// - When closed: 1 state (visible = false)
/// - When open: one state per row
#[derive(Debug, Clone, Default)]
pub struct SourceMenuState {
    visible: bool,
    selected_index: usize,
}

impl SourceMenuState {
    /// Create new menu state (closed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the menu is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open the menu with `selected` pre-selected.
    pub fn open(&mut self, selected: usize) {
        self.visible = true;
        self.selected_index = selected;
    }

    /// Close the menu.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Currently selected row.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Move selection up, clamping at 0.
    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down, clamping at the last row.
    pub fn select_next(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_index = (self.selected_index + 1).min(item_count - 1);
        }
    }

    /// The selected row, if the selection is within `items`.
    pub fn selected_item<'a>(&self, items: &'a [MenuItem]) -> Option<&'a MenuItem> {
        items.get(self.selected_index)
    }
}
