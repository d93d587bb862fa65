//! Width- and line-bounded text wrapping.

use crate::error::{Error, Result};

/// Appended to the last line when a line cap cuts the output short.
pub const TRUNCATION_MARKER: &str = " [...]";

/// Wrap `text` into lines of at most `width` columns.
///
/// The first line is prefixed with `initial_indent` spaces and every
/// following line with `continuation_indent` spaces; indentation counts
/// toward the width. Words are split on whitespace only, never at
/// hyphens. A word longer than a whole line is force-broken so that no
/// line ever exceeds `width`. With `max_lines`, output is cut to exactly
/// that many lines and the final line ends with [`TRUNCATION_MARKER`].
///
/// Widths are counted in chars, so non-ASCII values wrap correctly.
pub fn wrap(
    text: &str,
    width: usize,
    initial_indent: usize,
    continuation_indent: usize,
    max_lines: Option<usize>,
) -> Result<String> {
    if width == 0 {
        return Err(Error::InvalidArgument("width must be at least 1".into()));
    }
    if max_lines == Some(0) {
        return Err(Error::InvalidArgument("max_lines must be at least 1".into()));
    }

    // An indent as wide as the line would leave no room for content.
    let first_indent = initial_indent.min(width - 1);
    let next_indent = continuation_indent.min(width - 1);

    let mut lines: Vec<String> = Vec::new();
    let mut line = " ".repeat(first_indent);
    let mut cols = first_indent;
    let mut has_word = false;

    for word in text.split_whitespace() {
        let mut rest = word;
        while !rest.is_empty() {
            let sep = usize::from(has_word);
            let avail = width.saturating_sub(cols + sep);
            let len = rest.chars().count();

            if len <= avail {
                if has_word {
                    line.push(' ');
                }
                line.push_str(rest);
                cols += sep + len;
                has_word = true;
                break;
            }

            if has_word {
                // Word does not fit; retry on a fresh line.
                lines.push(std::mem::take(&mut line));
                line = " ".repeat(next_indent);
                cols = next_indent;
                has_word = false;
                continue;
            }

            // A word longer than a whole line gets force-broken.
            let take = avail.max(1);
            let split = rest.char_indices().nth(take).map_or(rest.len(), |(i, _)| i);
            line.push_str(&rest[..split]);
            lines.push(std::mem::take(&mut line));
            line = " ".repeat(next_indent);
            cols = next_indent;
            rest = &rest[split..];
        }
    }
    if has_word {
        lines.push(line);
    }

    if let Some(cap) = max_lines
        && lines.len() > cap
    {
        lines.truncate(cap);
        if let Some(cut) = lines.pop() {
            lines.push(truncate_with_marker(&cut, width));
        }
    }

    Ok(lines.join("\n"))
}

/// Shorten `line` so that the truncation marker fits within `width`.
fn truncate_with_marker(line: &str, width: usize) -> String {
    let marker_len = TRUNCATION_MARKER.chars().count();
    let budget = width.saturating_sub(marker_len);
    let end = line.char_indices().nth(budget).map_or(line.len(), |(i, _)| i);
    let mut kept = line[..end].trim_end().to_string();

    if end < line.len()
        && let Some(pos) = kept.rfind(' ')
        && !kept[..pos].trim().is_empty()
    {
        // The cut landed mid-word; back up to the last word boundary.
        kept.truncate(pos);
        kept.truncate(kept.trim_end().len());
    }

    kept.push_str(TRUNCATION_MARKER);
    kept.chars().take(width).collect()
}
