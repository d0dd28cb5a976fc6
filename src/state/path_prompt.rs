//! Add-file prompt input handling (pure state transitions).
//!
//! The cursor counts characters, not bytes, so multibyte paths edit cleanly.

use std::path::PathBuf;

/// Add-file prompt state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PromptState {
    /// Prompt not shown.
    #[default]
    Closed,
    /// User is typing a path.
    Typing {
        /// Text typed so far.
        input: String,
        /// Cursor position in characters.
        cursor: usize,
    },
}

impl PromptState {
    /// Whether the prompt is shown.
    pub fn is_open(&self) -> bool {
        matches!(self, PromptState::Typing { .. })
    }
}

fn byte_index(input: &str, cursor: usize) -> usize {
    input
        .char_indices()
        .nth(cursor)
        .map_or(input.len(), |(offset, _)| offset)
}

/// Show an empty prompt. No-op if already open.
pub fn open_prompt(state: PromptState) -> PromptState {
    match state {
        PromptState::Closed => PromptState::Typing {
            input: String::new(),
            cursor: 0,
        },
        open => open,
    }
}

/// Insert `ch` at the cursor and advance the cursor.
pub fn handle_char_input(state: PromptState, ch: char) -> PromptState {
    match state {
        PromptState::Typing { mut input, cursor } => {
            input.insert(byte_index(&input, cursor), ch);
            PromptState::Typing {
                input,
                cursor: cursor + 1,
            }
        }
        closed => closed,
    }
}

/// Delete the character before the cursor.
pub fn handle_backspace(state: PromptState) -> PromptState {
    match state {
        PromptState::Typing { mut input, cursor } if cursor > 0 => {
            input.remove(byte_index(&input, cursor - 1));
            PromptState::Typing {
                input,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor one character left, saturating at 0.
pub fn handle_cursor_left(state: PromptState) -> PromptState {
    match state {
        PromptState::Typing { input, cursor } => PromptState::Typing {
            input,
            cursor: cursor.saturating_sub(1),
        },
        closed => closed,
    }
}

/// Move the cursor one character right, saturating at the end.
pub fn handle_cursor_right(state: PromptState) -> PromptState {
    match state {
        PromptState::Typing { input, cursor } => {
            let max_cursor = input.chars().count();
            PromptState::Typing {
                input,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        closed => closed,
    }
}

/// Close the prompt, discarding input.
pub fn cancel_prompt(_state: PromptState) -> PromptState {
    PromptState::Closed
}

/// Close the prompt and return the entered path.
///
/// Surrounding whitespace is trimmed and a leading `~/` expands to the home
/// directory. Blank input yields no path.
pub fn submit_prompt(state: PromptState) -> (PromptState, Option<PathBuf>) {
    let PromptState::Typing { input, .. } = state else {
        return (PromptState::Closed, None);
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return (PromptState::Closed, None);
    }

    (PromptState::Closed, Some(expand_home(trimmed)))
}

fn expand_home(input: &str) -> PathBuf {
    match (input.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}
