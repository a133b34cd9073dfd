//! Formatting utilities used by listings.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

fn ansi_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap())
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ansi_regex().replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad to `width` visible columns (escape sequences do not count).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Wrap plain text to `width` columns; always yields at least one line.
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    let lines: Vec<String> = textwrap::wrap(s, width.max(1))
        .into_iter()
        .map(|c| c.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Join field names the way form messages read: `A`, `A and B`, `A, B, and C`.
pub fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escape_codes_and_counts_wide_chars() {
        assert_eq!(visible_width(&bold("abc")), 3);
        assert_eq!(visible_width("±10%"), 4);
        assert_eq!(pad_right(&italic("x"), 3).len(), italic("x").len() + 2);
    }

    #[test]
    fn wrap_never_returns_nothing() {
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
    }

    #[test]
    fn names_are_joined_like_a_sentence() {
        assert_eq!(join_names(&["Sprint"]), "Sprint");
        assert_eq!(join_names(&["Project", "Goal"]), "Project and Goal");
        assert_eq!(join_names(&["Sprint", "Project", "Goal"]), "Sprint, Project, and Goal");
    }
}
