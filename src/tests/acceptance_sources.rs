//! Acceptance tests: the sources menu and the add-file prompt.

use crate::state::MenuItem;
use crate::store::{PositionStore, SourceRegistry};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;
use std::fs;
use std::path::Path;

fn add_via_prompt(harness: &mut AcceptanceTestHarness, path: &Path) {
    harness.send_key(KeyCode::Char('a'));
    harness.type_text(&path.display().to_string());
    harness.send_key(KeyCode::Enter);
}

#[test]
fn sources_scenario1_prompt_registers_and_switches() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_add", &["book line"]);
    let other = harness.dir().join("alpha.txt");
    fs::write(&other, "alpha one\nalpha two\n").unwrap();

    add_via_prompt(&mut harness, &other);

    assert!(!harness.state().prompt.is_open());
    assert_eq!(harness.state().reader().source(), other.as_path());
    assert_eq!(harness.state().reader().display(), "alpha one");
    assert!(harness.state().positions().registry().contains(&other));

    // The registry document was written immediately
    let reloaded = SourceRegistry::load(harness.dir().join("sources.json"));
    assert!(reloaded.contains(&other));
}

#[test]
fn sources_scenario2_menu_switch_restores_each_position() {
    let mut harness =
        AcceptanceTestHarness::from_lines("sources_switch", &["b0", "b1", "b2", "b3"]);
    let book = harness.source().to_path_buf();
    let alpha = harness.dir().join("alpha.txt");
    fs::write(&alpha, "a0\na1\na2\n").unwrap();

    // Register both, ending on the book
    add_via_prompt(&mut harness, &alpha);
    harness.send_key(KeyCode::Char('n'));
    add_via_prompt(&mut harness, &book);
    harness.send_key(KeyCode::Char('n'));
    harness.send_key(KeyCode::Char('n'));
    assert_eq!(harness.state().reader().display(), "b2");

    // Menu opens on the current source: Show, Hide, alpha, book, Add, Exit
    harness.send_key(KeyCode::Char('m'));
    assert!(harness.state().menu.is_visible());
    assert_eq!(harness.state().menu.selected_index(), 3);

    harness.send_key(KeyCode::Char('k'));
    harness.send_key(KeyCode::Enter);
    assert!(!harness.state().menu.is_visible());
    assert_eq!(harness.state().reader().display(), "a1");

    harness.send_key(KeyCode::Char('m'));
    assert_eq!(harness.state().menu.selected_index(), 2);
    harness.send_key(KeyCode::Down);
    harness.send_key(KeyCode::Enter);
    assert_eq!(harness.state().reader().display(), "b2");

    let reloaded = SourceRegistry::load(harness.dir().join("sources.json"));
    assert_eq!(reloaded.get(&alpha), Some(1));
    assert_eq!(reloaded.get(&book), Some(2));
}

#[test]
fn sources_scenario3_menu_hide_and_show_rows() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_hide_show", &["line"]);

    // Unregistered source: menu opens on the first row
    harness.send_key(KeyCode::Char('m'));
    assert_eq!(harness.state().menu.selected_index(), 0);
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    assert!(!harness.state().visible);

    harness.send_key(KeyCode::Char('m'));
    harness.send_key(KeyCode::Enter);
    assert!(harness.state().visible);
}

#[test]
fn sources_scenario4_menu_lists_registered_paths() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_rows", &["line"]);
    let book = harness.source().to_path_buf();
    add_via_prompt(&mut harness, &book);

    assert_eq!(
        harness.state().menu_items(),
        vec![
            MenuItem::Show,
            MenuItem::Hide,
            MenuItem::Source(book.clone()),
            MenuItem::AddFile,
            MenuItem::Exit,
        ]
    );

    harness.send_key(KeyCode::Char('m'));
    let screen = harness.render_to_string();
    assert!(screen.contains("Add file…"));
    assert!(screen.contains("[CURRENT]"));
}

#[test]
fn sources_scenario5_menu_add_file_row_opens_prompt() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_add_row", &["line"]);

    harness.send_key(KeyCode::Char('m'));
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);

    assert!(!harness.state().menu.is_visible());
    assert!(harness.state().prompt.is_open());
}

#[test]
fn sources_scenario6_blank_submission_changes_nothing() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_blank", &["line"]);
    let book = harness.source().to_path_buf();

    harness.send_key(KeyCode::Char('a'));
    harness.type_text("   ");
    harness.send_key(KeyCode::Enter);

    assert!(!harness.state().prompt.is_open());
    assert!(harness.state().positions().registry().is_empty());
    assert_eq!(harness.state().reader().source(), book.as_path());
}

#[test]
fn sources_scenario7_escape_cancels_prompt() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_cancel", &["line"]);

    harness.send_key(KeyCode::Char('a'));
    harness.type_text("/tmp/nope.txt");
    harness.send_key(KeyCode::Esc);

    assert!(!harness.state().prompt.is_open());
    assert!(harness.state().positions().registry().is_empty());
    assert!(harness.is_running());
}

#[test]
fn sources_scenario8_missing_file_shows_placeholder() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_missing", &["line"]);
    let missing = harness.dir().join("later.txt");

    add_via_prompt(&mut harness, &missing);

    assert!(harness.state().reader().is_placeholder());
    assert!(harness
        .state()
        .reader()
        .display()
        .starts_with("Text file not found"));
    assert!(harness.state().positions().registry().contains(&missing));
}

#[test]
fn sources_scenario9_keys_typed_into_prompt_are_not_commands() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_prompt_keys", &["one", "two"]);

    harness.send_key(KeyCode::Char('a'));
    assert!(!harness.send_key(KeyCode::Char('q')));
    harness.send_key(KeyCode::Char('n'));

    assert!(harness.is_running());
    assert_eq!(harness.state().reader().display(), "one");
}

#[test]
fn sources_scenario10_relative_path_resolves_to_one_absolute_key() {
    let mut harness = AcceptanceTestHarness::from_lines("sources_relative", &["line"]);
    let name = "linebar_relative_source_check.txt";
    let absolute = std::env::current_dir().unwrap().join(name);

    // Same file added once by absolute path and once relative to the cwd
    add_via_prompt(&mut harness, &absolute);
    add_via_prompt(&mut harness, Path::new(name));

    let keys: Vec<_> = harness.state().positions().registry().paths().collect();
    assert_eq!(keys, vec![absolute.as_path()]);
    assert_eq!(harness.state().reader().source(), absolute.as_path());
    assert!(harness.state().is_current_source(&absolute));
}
