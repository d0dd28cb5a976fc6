//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with convenient methods for simulating user
//! interactions. Each harness reads from a source file written into its own
//! scratch directory, with the registry document beside it.

use crate::config::keybindings::KeyBindings;
use crate::instance::UiRequest;
use crate::state::AppState;
use crate::store::{Positions, SourceRegistry};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Every buffer row between `|` delimiters, blank rows included.
///
/// Keeps leading and trailing spaces visible in inline snapshots.
pub fn buffer_to_framed_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            format!("|{row}|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fresh, empty directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("linebar_harness_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    dir: PathBuf,
    source: PathBuf,
    requests: Sender<UiRequest>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Open a source made of `lines` with an 80x24 terminal.
    pub fn from_lines(name: &str, lines: &[&str]) -> Self {
        Self::from_lines_with_size(name, lines, 80, 24)
    }

    /// Open a source made of `lines` with a custom terminal size.
    pub fn from_lines_with_size(name: &str, lines: &[&str], width: u16, height: u16) -> Self {
        let dir = scratch_dir(name);
        let source = dir.join("book.txt");
        std::fs::write(&source, lines.join("\n")).expect("write source");
        Self::open(dir, source, width, height)
    }

    /// Open `source` (which may not exist) inside the scratch `dir`.
    pub fn open(dir: PathBuf, source: PathBuf, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        let registry = SourceRegistry::load(dir.join("sources.json"));
        let app_state = AppState::open(&source, Positions::new(registry), 1);

        let (requests, receiver) = mpsc::channel();
        let app =
            TuiApp::new_for_test(terminal, app_state, KeyBindings::default(), Some(receiver));

        Self {
            app,
            dir,
            source,
            requests,
            running: true,
        }
    }

    /// Scratch directory holding the source and registry.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the source the harness opened.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Send a single key event. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C). Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        self.send_event(KeyEvent::new(key, mods))
    }

    /// Send a fully specified key event. Returns true if the app quit.
    pub fn send_event(&mut self, key: KeyEvent) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(key);
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Forward a request as the instance listener would, then let the event
    /// loop's timeout branch pick it up.
    pub fn deliver_request(&mut self, request: UiRequest) -> bool {
        self.requests.send(request).expect("receiver alive");
        self.app.drain_requests_test()
    }

    /// Sender feeding the app's request channel, for wiring a real listener.
    pub fn request_sender(&self) -> Sender<UiRequest> {
        self.requests.clone()
    }

    /// Run the event loop's timeout branch without sending anything.
    pub fn poll_requests(&mut self) -> bool {
        self.app.drain_requests_test()
    }

    /// Resize the terminal and notify the app.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.handle_resize_test(width, height);
    }

    /// Render the current frame with empty rows dropped.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Render the current frame with every row framed.
    pub fn render_framed(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_framed_string(self.app.terminal().backend().buffer())
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Left click at the given cell.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Press at `from`, drag to `to_row`, release.
    pub fn drag(&mut self, column: u16, from_row: u16, to_row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, from_row);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, to_row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, to_row);
    }
}
