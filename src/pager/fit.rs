//! Width-fitted splitting of display entries.
//!
//! An entry wider than the bar is cut at a character boundary into the
//! longest prefix that still fits and a remainder that is shown next.

use unicode_width::UnicodeWidthChar;

/// Measures the rendered width of text.
///
/// Implementations must be monotonically non-decreasing in the number of
/// leading characters measured: appending a character never makes the text
/// narrower. [`fit_prefix`] binary-searches on that property.
pub trait TextMeasure {
    /// Rendered width of `text`.
    fn width(&self, text: &str) -> usize;
}

/// Terminal display-cell width.
///
/// Sums per-character column widths, so wide CJK glyphs count as two cells
/// and zero-width marks as none. Summing per character keeps the measure
/// monotonic, which whole-string measurement of emoji sequences would not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellWidth;

impl TextMeasure for CellWidth {
    fn width(&self, text: &str) -> usize {
        text.chars().map(|c| c.width().unwrap_or(0)).sum()
    }
}

/// Byte offset of the `chars`-th character boundary in `text`.
///
/// Saturates at `text.len()` when `chars` exceeds the character count.
pub fn char_boundary(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Longest prefix of `text`, in characters, whose width fits in `max_width`.
///
/// Binary search over `[0, chars]`. The result `p` is boundary-exact: the
/// first `p` characters fit, and if `p` is shorter than the text the first
/// `p + 1` characters do not.
pub fn fit_prefix<M>(text: &str, max_width: usize, measure: &M) -> usize
where
    M: TextMeasure + ?Sized,
{
    let mut low = 0;
    let mut high = text.chars().count();

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if measure.width(&text[..char_boundary(text, mid)]) <= max_width {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    low
}

/// Cut `text` so its head fits in `max_width`.
///
/// Returns `None` when the whole text already fits. Otherwise returns
/// `(head, tail)` with `head + tail == text`. When not even one character fits
/// the head takes exactly one character, so repeated splitting always makes
/// progress; a single over-wide character is left unsplit.
pub fn split_to_fit<M>(text: &str, max_width: usize, measure: &M) -> Option<(String, String)>
where
    M: TextMeasure + ?Sized,
{
    if measure.width(text) <= max_width {
        return None;
    }

    let fitted = fit_prefix(text, max_width, measure).max(1);
    let at = char_boundary(text, fitted);
    if at >= text.len() {
        return None;
    }

    let (head, tail) = text.split_at(at);
    Some((head.to_string(), tail.to_string()))
}
