//! Label text transforms.
//!
//! Content extracted from the base layer is turned into node labels by a
//! single pure transform, [`format_label`]: double quotes become single
//! quotes (double quotes delimit DOT strings) and the text is word-wrapped
//! to a fixed column width.

use std::mem;

/// Column width used for wrapping unit text.
pub const DEFAULT_WRAP_WIDTH: usize = 35;

/// Replace every double quote with a single quote.
pub fn substitute_quotes(text: &str) -> String {
    text.replace('"', "'")
}

/// Quote-substitute `text` and word-wrap it to `width` columns.
///
/// Lines are joined with `'\n'`. Runs of whitespace collapse into a single
/// space, and leading or trailing whitespace is dropped.
///
/// # Examples
///
/// ```
/// use rstviz_core::text::format_label;
///
/// let label = format_label("The \"quick\" brown fox", 12);
/// assert_eq!(label, "The 'quick'\nbrown fox");
/// ```
pub fn format_label(text: &str, width: usize) -> String {
    wrap(&substitute_quotes(text), width).join("\n")
}

/// Greedy word wrap measured in characters.
///
/// Words longer than `width` are split, starting in whatever room is left on
/// the current line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let gap = usize::from(line_len > 0);

        if line_len + gap + word_len <= width {
            if gap == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_len += gap + word_len;
            continue;
        }

        if word_len <= width {
            lines.push(mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
            continue;
        }

        if line_len + gap < width {
            if gap == 1 {
                line.push(' ');
                line_len += 1;
            }
        } else {
            lines.push(mem::take(&mut line));
            line_len = 0;
        }

        let mut chars = word.chars();
        let mut remaining = word_len;
        loop {
            let room = width - line_len;
            if remaining <= room {
                line.extend(chars.by_ref());
                line_len += remaining;
                break;
            }
            line.extend(chars.by_ref().take(room));
            remaining -= room;
            lines.push(mem::take(&mut line));
            line_len = 0;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
