//! Text helpers for cutting recognised spans out of user input.
//!
//! Every range handled here comes from a regex match, so it always lies on
//! UTF-8 character boundaries.

use std::ops::Range;

/// Separators that substring removal tends to leave dangling at either end.
const RESIDUAL_SEPARATORS: &[char] = &[',', '，', '、', ';', '；', ':', '：'];

/// Remove `range` from `text`.
///
/// A single space is put in its place when the removal would otherwise glue
/// two words of a space-delimited script together.
#[must_use]
pub fn remove_span(text: &str, range: Range<usize>) -> String {
    let (before, after) = (&text[..range.start], &text[range.end..]);

    let needs_space = match (before.chars().next_back(), after.chars().next()) {
        (Some(left), Some(right)) => {
            !left.is_whitespace() && !right.is_whitespace() && (left.is_ascii() || right.is_ascii())
        },
        _ => false,
    };

    if needs_space {
        format!("{before} {after}")
    } else {
        format!("{before}{after}")
    }
}

/// Check that the digits in `range` are not glued to other digits or to any
/// of the `extra` characters on either side.
#[must_use]
pub fn is_isolated(text: &str, range: &Range<usize>, extra: &[char]) -> bool {
    let blocked = |c: char| c.is_ascii_digit() || extra.contains(&c);

    let left_ok = text[..range.start].chars().next_back().map_or(true, |c| !blocked(c));
    let right_ok = text[range.end..].chars().next().map_or(true, |c| !blocked(c));

    left_ok && right_ok
}

/// Collapse whitespace runs into single spaces and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim whitespace and residual separators from both ends.
#[must_use]
pub fn trim_residue(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || RESIDUAL_SEPARATORS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_span_keeps_words_apart() {
        assert_eq!(remove_span("buy milk tomorrow please", 9..17), "buy milk  please");
        assert_eq!(remove_span("call@3pm", 4..8), "call");
        assert_eq!(remove_span("a,b", 1..2), "a b");
    }

    #[test]
    fn test_remove_span_multibyte() {
        let text = "明天去图书馆";
        let start = text.find("明天").unwrap();
        assert_eq!(remove_span(text, start..start + "明天".len()), "去图书馆");

        let text = "我明天去";
        let start = text.find("明天").unwrap();
        assert_eq!(remove_span(text, start..start + "明天".len()), "我去");
    }

    #[test]
    fn test_is_isolated() {
        let text = "room 2024 at 3/4";
        assert!(is_isolated(text, &(5..9), &[]));
        assert!(!is_isolated(text, &(5..7), &[]));
        assert!(is_isolated(text, &(13..16), &['/', '-']));
        assert!(!is_isolated("1/3/4", &(2..5), &['/', '-']));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  go   to\tthe library "), "go to the library");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_trim_residue() {
        assert_eq!(trim_residue(" meeting, "), "meeting");
        assert_eq!(trim_residue("，开会；"), "开会");
        assert_eq!(trim_residue("a, b"), "a, b");
        assert_eq!(trim_residue(" , "), "");
    }
}
