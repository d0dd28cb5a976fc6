//! Property-based tests for fitting and pagination invariants.
//!
//! Tests validate:
//! 1. fit_prefix is boundary-exact for the cell-width measure
//! 2. Splitting never loses or reorders text
//! 3. Advancing then retreating returns to the same entry
//! 4. Navigation over blank-only sources changes nothing

use linebar::pager::{fit_prefix, split_to_fit, CellWidth, MessageSet, Paginator, TextMeasure};
use proptest::prelude::*;

/// Mix of ASCII, wide CJK and combining marks.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('a'),
            Just(' '),
            Just('z'),
            Just('漢'),
            Just('テ'),
            Just('\u{301}'),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn prefix(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

// ===== Property 1: Boundary exactness =====

proptest! {
    #[test]
    fn fit_prefix_is_boundary_exact(text in text_strategy(), max_width in 0usize..30) {
        let fitted = fit_prefix(&text, max_width, &CellWidth);
        let total = text.chars().count();

        prop_assert!(fitted <= total);
        prop_assert!(CellWidth.width(&prefix(&text, fitted)) <= max_width);
        if fitted < total {
            prop_assert!(CellWidth.width(&prefix(&text, fitted + 1)) > max_width);
        }
    }
}

// ===== Property 2: Splitting preserves text =====

proptest! {
    #[test]
    fn split_head_and_tail_concatenate_to_input(
        text in text_strategy(),
        max_width in 1usize..30,
    ) {
        match split_to_fit(&text, max_width, &CellWidth) {
            None => prop_assert!(
                CellWidth.width(&text) <= max_width || text.chars().count() <= 1
            ),
            Some((head, tail)) => {
                prop_assert!(!head.is_empty());
                prop_assert!(!tail.is_empty());
                prop_assert_eq!(format!("{head}{tail}"), text);
            }
        }
    }

    #[test]
    fn advancing_keeps_full_text_of_every_entry(
        lines in prop::collection::vec(text_strategy(), 1..8),
        max_width in 1usize..20,
        steps in 0usize..20,
    ) {
        let original: String = lines.concat();
        let mut pager = Paginator::from_messages(
            "prop.txt",
            MessageSet::new(lines),
            0,
            CellWidth,
        );

        for _ in 0..steps {
            pager.advance(max_width);
        }

        prop_assert_eq!(pager.messages().entries().concat(), original);
    }
}

// ===== Property 3: Advance / retreat round trip =====

proptest! {
    #[test]
    fn retreat_undoes_advance_when_nothing_splits(
        lines in prop::collection::vec("[a-z]{1,10}", 2..10),
        start in 0usize..10,
    ) {
        let len = lines.len();
        let mut pager = Paginator::from_messages(
            "prop.txt",
            MessageSet::new(lines),
            start % len,
            CellWidth,
        );
        let before = pager.position();

        prop_assert!(pager.advance(80));
        prop_assert!(pager.retreat());

        prop_assert_eq!(pager.position(), before);
    }
}

// ===== Property 4: Blank-only sources =====

proptest! {
    #[test]
    fn blank_only_sources_never_move(
        lines in prop::collection::vec("[ \t]{0,4}", 0..6),
        max_width in 0usize..10,
    ) {
        let count = lines.len();
        let mut pager = Paginator::from_messages(
            "prop.txt",
            MessageSet::new(lines),
            0,
            CellWidth,
        );

        prop_assert!(!pager.advance(max_width));
        prop_assert!(!pager.retreat());
        prop_assert_eq!(pager.position(), 0);
        prop_assert_eq!(pager.messages().len(), count);
    }
}
