//! Tests for TuiApp event handling and rendering.

use super::*;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyModifiers;

fn harness(name: &str, lines: &[&str]) -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_lines_with_size(&format!("view_{name}"), lines, 30, 3)
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn handle_key_q_returns_true() {
    let mut h = harness("q_quits", &["a"]);
    assert!(h.send_key(KeyCode::Char('q')), "'q' should trigger quit");
}

#[test]
fn handle_key_ctrl_c_returns_true_even_in_prompt() {
    let mut h = harness("ctrl_c_prompt", &["a"]);
    h.send_key(KeyCode::Char('a'));

    assert!(h.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[test]
fn handle_key_other_returns_false() {
    let mut h = harness("other_key", &["a"]);
    assert!(!h.send_key(KeyCode::Char('z')));
}

#[test]
fn release_events_are_ignored() {
    let mut h = harness("release", &["one", "two"]);
    let mut key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;

    assert!(!h.send_event(key));

    assert_eq!(h.state().reader().display(), "one");
}

#[test]
fn navigation_keys_page_through_entries() {
    let mut h = harness("nav_keys", &["one", "two", "three"]);

    h.send_key_with_mods(KeyCode::Right, KeyModifiers::CONTROL);
    assert_eq!(h.state().reader().display(), "two");

    h.send_key(KeyCode::Char(' '));
    assert_eq!(h.state().reader().display(), "three");

    h.send_key_with_mods(KeyCode::Left, KeyModifiers::CONTROL);
    assert_eq!(h.state().reader().display(), "two");

    h.send_key(KeyCode::Char('p'));
    assert_eq!(h.state().reader().display(), "one");
}

#[test]
fn hidden_bar_ignores_navigation() {
    let mut h = harness("hidden_nav", &["one", "two"]);

    h.send_key(KeyCode::Char('h'));
    h.send_key(KeyCode::Char('n'));

    assert!(!h.state().visible);
    assert_eq!(h.state().reader().display(), "one");
}

#[test]
fn help_blocks_navigation_until_closed() {
    let mut h = harness("help_blocks", &["one", "two"]);

    h.send_key(KeyCode::Char('?'));
    h.send_key(KeyCode::Char('n'));
    assert_eq!(h.state().reader().display(), "one");
    assert!(h.state().help_visible);

    h.send_key(KeyCode::Esc);
    assert!(!h.state().help_visible);
}

#[test]
fn ctrl_up_down_move_bar_within_terminal() {
    let mut h = harness("move_bar", &["a"]);

    for _ in 0..5 {
        h.send_key_with_mods(KeyCode::Up, KeyModifiers::CONTROL);
    }
    assert_eq!(h.state().bar_offset, 2, "Terminal is 3 rows tall");

    h.send_key_with_mods(KeyCode::Down, KeyModifiers::CONTROL);
    assert_eq!(h.state().bar_offset, 1);
}

#[test]
fn menu_captures_keys_while_open() {
    let mut h = harness("menu_captures", &["one", "two"]);

    h.send_key(KeyCode::Char('m'));
    assert!(h.state().menu.is_visible());

    h.send_key(KeyCode::Char('n'));
    assert_eq!(h.state().reader().display(), "one");

    h.send_key(KeyCode::Esc);
    assert!(!h.state().menu.is_visible());
}

#[test]
fn menu_exit_row_quits() {
    let mut h = harness("menu_exit", &["a"]);
    h.send_key(KeyCode::Char('m'));
    for _ in 0..10 {
        h.send_key(KeyCode::Char('j'));
    }

    assert!(h.send_key(KeyCode::Enter));
}

#[test]
fn prompt_typing_does_not_trigger_bindings() {
    let mut h = harness("prompt_typing", &["one", "two"]);

    h.send_key(KeyCode::Char('a'));
    h.type_text("qnhm");

    assert!(h.is_running());
    assert!(h.state().visible);
    assert!(!h.state().menu.is_visible());
    assert_eq!(
        h.state().prompt,
        crate::state::PromptState::Typing {
            input: "qnhm".to_string(),
            cursor: 4
        }
    );

    h.send_key(KeyCode::Esc);
    assert!(!h.state().prompt.is_open());
}

#[test]
fn clicking_buttons_navigates() {
    let mut h = harness("click_buttons", &["one", "two", "three"]);

    h.click_at(28, 2);
    assert_eq!(h.state().reader().display(), "two");

    h.click_at(1, 2);
    assert_eq!(h.state().reader().display(), "one");
}

#[test]
fn click_off_bar_does_nothing() {
    let mut h = harness("click_off_bar", &["one", "two"]);

    h.click_at(28, 0);

    assert_eq!(h.state().reader().display(), "one");
}

#[test]
fn dragging_text_moves_bar() {
    let mut h = harness("drag_bar", &["one"]);

    h.drag(10, 2, 0);

    assert_eq!(h.state().bar_offset, 2);
}

#[test]
fn dragging_from_button_does_not_move_bar() {
    let mut h = harness("drag_button", &["one", "two"]);

    h.drag(1, 2, 0);

    assert_eq!(h.state().bar_offset, 0);
}

#[test]
fn resize_recomputes_split_width() {
    let mut h = harness("resize", &["a"]);
    assert_eq!(h.state().max_text_width(), 23);

    h.resize(80, 24);

    assert_eq!(h.state().max_text_width(), 73);
}

#[test]
fn resize_keeps_bar_on_screen() {
    let mut h = AcceptanceTestHarness::from_lines_with_size("view_resize_bar", &["a"], 30, 10);
    for _ in 0..8 {
        h.send_key_with_mods(KeyCode::Up, KeyModifiers::CONTROL);
    }

    h.resize(30, 4);

    assert_eq!(h.state().bar_offset, 3);
}

#[test]
fn show_window_request_reveals_hidden_bar() {
    let mut h = harness("show_request", &["Hello world"]);
    h.send_key(KeyCode::Char('h'));
    assert_eq!(h.render_to_string(), "");

    assert!(h.deliver_request(UiRequest::ShowWindow));

    assert!(h.state().visible);
    assert!(h.render_to_string().contains("Hello world"));
}

#[test]
fn drain_without_requests_reports_nothing() {
    let mut h = harness("drain_empty", &["a"]);

    assert!(!h.poll_requests());
}

#[test]
fn renders_bar_on_last_row() {
    let mut h = harness("render_bar", &["Hello world", "", "Second line"]);

    insta::assert_snapshot!(h.render_framed(), @r"
    |                              |
    |                              |
    | ◀ Hello world              ▶ |
    ");
}

#[test]
fn renders_placeholder_for_missing_source() {
    let dir = crate::test_harness::scratch_dir("view_render_missing");
    let source = dir.join("x");
    let mut h = AcceptanceTestHarness::open(dir, source, 30, 3);

    let output = h.render_to_string();

    assert!(output.contains("Text file not found, ple"), "got: {output}");
}

#[test]
fn hidden_bar_renders_nothing() {
    let mut h = harness("render_hidden", &["Hello world"]);
    h.send_key(KeyCode::Char('h'));

    assert_eq!(h.render_to_string(), "");
}
