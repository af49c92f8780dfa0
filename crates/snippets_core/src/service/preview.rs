//! Single-line previews of snippet values for result subtitles.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|[\r\n]").expect("valid line break regex"));

/// Marker appended when a preview was cut short.
pub const ELLIPSIS: &str = "...";

/// Flattens `value` onto one line and caps it at `max_chars` characters.
///
/// Leading/trailing whitespace is trimmed first. Each line break (`\r\n`,
/// `\n` or `\r`) becomes one space. [`ELLIPSIS`] is appended only when
/// characters were dropped.
pub fn summarize(value: &str, max_chars: usize) -> String {
    let flattened = LINE_BREAK_RE.replace_all(value.trim(), " ");
    if flattened.chars().count() <= max_chars {
        return flattened.into_owned();
    }

    let mut truncated = flattened.chars().take(max_chars).collect::<String>();
    truncated.push_str(ELLIPSIS);
    truncated
}
