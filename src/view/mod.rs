//! TUI rendering and terminal management (impure shell)

mod bar;
pub mod constants;
mod help;
pub mod layout;
mod menu;
mod prompt;
pub mod styles;

pub use help::render_help_overlay;
pub use layout::{BarHit, BarLayout};
pub use menu::render_source_menu;
pub use prompt::PathPrompt;
pub use styles::{BarStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::instance::UiRequest;
use crate::model::{AppError, KeyAction};
use crate::state::{path_prompt, AppState};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: BarStyles,
    /// Requests from later launches; `None` once the listener is gone or
    /// when running without one.
    requests: Option<Receiver<UiRequest>>,
    /// Whether a left-button drag on the text area is moving the bar.
    dragging: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(app_state: AppState, requests: Option<Receiver<UiRequest>>) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            requests,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Ctrl+C or the menu's Exit row). Input is
    /// polled with a short timeout; each timeout drains requests forwarded by
    /// the instance listener.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(100);

        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            self.app_state.persist();
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.drain_requests() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        requests: Option<Receiver<UiRequest>>,
    ) -> Self {
        let mut app = Self {
            terminal,
            app_state,
            key_bindings,
            styles: BarStyles::default(),
            requests,
            dragging: false,
        };
        let area = app.area();
        app.handle_resize(area.width, area.height);
        app
    }

    /// Current terminal area, falling back to 80x24 when the size is unknown.
    fn area(&self) -> Rect {
        match self.terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(_) => Rect::new(0, 0, 80, 24),
        }
    }

    /// Apply every request waiting on the channel.
    ///
    /// Returns true if any request was applied.
    fn drain_requests(&mut self) -> bool {
        let Some(requests) = &self.requests else {
            return false;
        };

        let mut pending = Vec::new();
        let disconnected = loop {
            match requests.try_recv() {
                Ok(request) => pending.push(request),
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => break true,
            }
        };

        if disconnected {
            warn!("Instance listener stopped; later launches can no longer reach this one");
            self.requests = None;
        }

        let applied = !pending.is_empty();
        for request in pending {
            self.app_state.handle_ui_request(request);
        }
        applied
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, whatever overlay is open
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.prompt.is_open() {
            self.handle_prompt_key(key);
            return false;
        }

        if self.app_state.menu.is_visible() {
            return self.handle_menu_key(key);
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        // Help popup blocks everything but closing it and quitting
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        // A hidden bar cannot be read, so it is not paged either
        if !self.app_state.visible && matches!(action, KeyAction::Next | KeyAction::Previous) {
            return false;
        }

        match action {
            KeyAction::Next => self.app_state.next_entry(),
            KeyAction::Previous => self.app_state.prev_entry(),
            KeyAction::ToggleVisibility => self.app_state.toggle_visibility(),
            KeyAction::MoveBarUp => {
                let max = layout::max_bar_offset(self.area().height);
                self.app_state.move_bar_up(max);
            }
            KeyAction::MoveBarDown => self.app_state.move_bar_down(),
            KeyAction::ToggleMenu => self.app_state.toggle_menu(),
            KeyAction::AddSource => self.app_state.open_prompt(),
            KeyAction::Help => self.app_state.help_visible = !self.app_state.help_visible,
            KeyAction::Quit => return true,
        }

        false
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => self
                .app_state
                .update_prompt(|p| path_prompt::handle_char_input(p, ch)),
            KeyCode::Backspace => self.app_state.update_prompt(path_prompt::handle_backspace),
            KeyCode::Left => self.app_state.update_prompt(path_prompt::handle_cursor_left),
            KeyCode::Right => self.app_state.update_prompt(path_prompt::handle_cursor_right),
            KeyCode::Enter => self.app_state.submit_prompt(),
            KeyCode::Esc => self.app_state.update_prompt(path_prompt::cancel_prompt),
            _ => {}
        }
    }

    /// Returns true if the activated row asks to quit.
    fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.app_state.menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.app_state.menu_select_next(),
            KeyCode::Enter => return self.app_state.activate_menu_selection(),
            KeyCode::Esc | KeyCode::Char('m') => self.app_state.menu.close(),
            _ => {}
        }
        false
    }

    /// Handle a single mouse event
    ///
    /// Left click on a button pages; left drag on the text moves the bar.
    /// Ignored while the bar is hidden or an overlay is open.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let overlay_open = self.app_state.menu.is_visible()
            || self.app_state.prompt.is_open()
            || self.app_state.help_visible;
        if !self.app_state.visible || overlay_open {
            self.dragging = false;
            return;
        }

        let area = self.area();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = BarLayout::new(area, self.app_state.bar_offset);
                match layout.hit(mouse.column, mouse.row) {
                    BarHit::Previous => self.app_state.prev_entry(),
                    BarHit::Next => self.app_state.next_entry(),
                    BarHit::Text => self.dragging = true,
                    BarHit::Outside => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                self.app_state.bar_offset = layout::offset_for_row(mouse.row, area.height);
            }
            MouseEventKind::Up(MouseButton::Left) => self.dragging = false,
            _ => {}
        }
    }

    /// Handle a terminal resize event
    ///
    /// Recomputes the split width and keeps the bar on screen. Entries
    /// already split stay split.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        let max_width = layout::max_text_width(width, self.app_state.text_margin());
        self.app_state.set_max_text_width(max_width);
        self.app_state
            .clamp_bar_offset(layout::max_bar_offset(height));
    }

    /// Render the current frame
    ///
    /// A pending repaint request clears the terminal first so the whole
    /// screen is redrawn.
    fn draw(&mut self) -> Result<(), TuiError> {
        if self.app_state.take_repaint_request() {
            self.terminal.clear()?;
        }

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        requests: Option<Receiver<UiRequest>>,
    ) -> Self {
        let mut app = Self::with_terminal(terminal, app_state, key_bindings, requests);
        app.styles = BarStyles::with_color_config(ColorConfig::new(false));
        app
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    pub(crate) fn drain_requests_test(&mut self) -> bool {
        self.drain_requests()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(
    app_state: AppState,
    requests: Option<Receiver<UiRequest>>,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, requests)?;

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests;
