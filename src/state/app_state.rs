//! Application state and transitions.
//!
//! AppState is the root state type. It owns the reader and everything the bar
//! and its overlays need, and is only touched from the UI thread.

use crate::instance::UiRequest;
use crate::pager::Paginator;
use crate::state::menu::{menu_items, MenuItem, SourceMenuState};
use crate::state::path_prompt::{self, PromptState};
use crate::store::Positions;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Application state.
///
/// # State Machine
///
/// - **Visibility**: shown ⇄ hidden (via `h`, the menu, or a `ShowWindow`
///   request, which only ever shows)
/// - **Overlays**: at most one of help, sources menu, add-file prompt is
///   expected open at a time; the view routes keys to the topmost
#[derive(Debug)]
pub struct AppState {
    reader: Paginator,
    positions: Positions,

    /// Whether the bar is drawn.
    pub visible: bool,

    /// Rows between the bar and the bottom of the terminal.
    pub bar_offset: u16,

    /// Sources menu popup.
    pub menu: SourceMenuState,

    /// Add-file prompt.
    pub prompt: PromptState,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    text_margin: u16,
    max_text_width: usize,
    repaint_requested: bool,
}

impl AppState {
    /// Wrap an opened reader and its position store.
    pub fn new(reader: Paginator, positions: Positions, text_margin: u16) -> Self {
        Self {
            reader,
            positions,
            visible: true,
            bar_offset: 0,
            menu: SourceMenuState::new(),
            prompt: PromptState::Closed,
            help_visible: false,
            text_margin,
            max_text_width: 0,
            repaint_requested: false,
        }
    }

    /// Open `source`, restoring its position from `positions`.
    pub fn open(source: impl Into<PathBuf>, positions: Positions, text_margin: u16) -> Self {
        let reader = Paginator::open(source, &positions);
        Self::new(reader, positions, text_margin)
    }

    /// The active reader.
    pub fn reader(&self) -> &Paginator {
        &self.reader
    }

    /// The position stores.
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Cells kept free between text and buttons.
    pub fn text_margin(&self) -> u16 {
        self.text_margin
    }

    /// Width fitted entries are split to.
    pub fn max_text_width(&self) -> usize {
        self.max_text_width
    }

    /// Record the width measured by the last layout pass.
    ///
    /// Entries already split for a wider or narrower bar stay as they are.
    pub fn set_max_text_width(&mut self, width: usize) {
        self.max_text_width = width;
    }

    // ===== Reading =====

    /// Advance to the next entry and persist the new position.
    pub fn next_entry(&mut self) {
        if self.reader.advance(self.max_text_width) {
            self.reader.persist(&mut self.positions);
        }
    }

    /// Go back to the previous entry and persist the new position.
    pub fn prev_entry(&mut self) {
        if self.reader.retreat() {
            self.reader.persist(&mut self.positions);
        }
    }

    /// Switch the reader to `source`.
    pub fn switch_source(&mut self, source: impl Into<PathBuf>) {
        self.reader.switch_source(source, &mut self.positions);
    }

    /// Register `source` and switch to it.
    ///
    /// Relative paths are resolved against the working directory so one file
    /// has one registry key. A registry write failure is logged; the switch
    /// still happens.
    pub fn add_source(&mut self, source: impl Into<PathBuf>) {
        let source = source.into();
        let source = std::path::absolute(&source).unwrap_or(source);
        match self.positions.registry_mut().register(&source) {
            Ok(true) => info!(source = %source.display(), "Registered source"),
            Ok(false) => {}
            Err(err) => warn!(source = %source.display(), error = %err, "Failed to register source"),
        }
        self.switch_source(source);
    }

    /// Persist the current position.
    pub fn persist(&mut self) {
        self.reader.persist(&mut self.positions);
    }

    // ===== Bar =====

    /// Show or hide the bar.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Make the bar visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the bar.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Move the bar one row up, staying at most `max_offset` rows above the
    /// bottom.
    pub fn move_bar_up(&mut self, max_offset: u16) {
        self.bar_offset = (self.bar_offset + 1).min(max_offset);
    }

    /// Move the bar one row down, stopping at the bottom row.
    pub fn move_bar_down(&mut self) {
        self.bar_offset = self.bar_offset.saturating_sub(1);
    }

    /// Keep the bar on screen after the terminal shrank.
    pub fn clamp_bar_offset(&mut self, max_offset: u16) {
        self.bar_offset = self.bar_offset.min(max_offset);
    }

    // ===== Requests from other launches =====

    /// Apply a request forwarded by the instance listener.
    pub fn handle_ui_request(&mut self, request: UiRequest) {
        match request {
            UiRequest::ShowWindow => {
                info!("Another launch asked to show the bar");
                self.show();
                self.repaint_requested = true;
            }
        }
    }

    /// Whether a full repaint was requested since the last call.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    // ===== Sources menu =====

    /// Current menu rows.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        menu_items(self.positions.registry().paths())
    }

    /// Whether `path` is the active source.
    pub fn is_current_source(&self, path: &Path) -> bool {
        self.reader.source() == path
    }

    /// Open or close the sources menu. Opening selects the active source's
    /// row when it is registered.
    pub fn toggle_menu(&mut self) {
        if self.menu.is_visible() {
            self.menu.close();
            return;
        }
        let current = self
            .menu_items()
            .iter()
            .position(|item| matches!(item, MenuItem::Source(p) if self.is_current_source(p)))
            .unwrap_or(0);
        self.menu.open(current);
    }

    /// Move the menu selection down one row.
    pub fn menu_select_next(&mut self) {
        let count = self.menu_items().len();
        self.menu.select_next(count);
    }

    /// Activate the selected menu row and close the menu.
    ///
    /// Returns `true` when the row asks the application to exit.
    pub fn activate_menu_selection(&mut self) -> bool {
        let items = self.menu_items();
        let selected = self.menu.selected_item(&items).cloned();
        self.menu.close();

        match selected {
            Some(MenuItem::Show) => self.show(),
            Some(MenuItem::Hide) => self.hide(),
            Some(MenuItem::Source(path)) => {
                if !self.is_current_source(&path) {
                    self.switch_source(path);
                }
            }
            Some(MenuItem::AddFile) => self.open_prompt(),
            Some(MenuItem::Exit) => return true,
            None => {}
        }
        false
    }

    // ===== Add-file prompt =====

    /// Show the add-file prompt.
    pub fn open_prompt(&mut self) {
        self.prompt = path_prompt::open_prompt(std::mem::take(&mut self.prompt));
    }

    /// Close the prompt and add the entered path, if any.
    pub fn submit_prompt(&mut self) {
        let (prompt, path) = path_prompt::submit_prompt(std::mem::take(&mut self.prompt));
        self.prompt = prompt;
        if let Some(path) = path {
            self.add_source(path);
        }
    }

    /// Apply a pure prompt transition.
    pub fn update_prompt(&mut self, transition: impl FnOnce(PromptState) -> PromptState) {
        self.prompt = transition(std::mem::take(&mut self.prompt));
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
