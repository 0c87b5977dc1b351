//! Compiled keyword sets.
//!
//! Keyword lists from a [`KeywordTable`](super::KeywordTable) are compiled
//! into one case-insensitive alternation each. Alternatives are ordered
//! longest first, so scanning text yields leftmost-longest, non-overlapping
//! hits: "not urgent" is one hit, not a "not" followed by an "urgent".

use std::ops::Range;

use regex::Regex;

use crate::error::IntentError;

/// Which sides of a keyword get a word boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    /// No boundaries (CJK tables, or `word_boundaries: false`).
    None,
    /// Boundary after the keyword only, for suffixes like "pm" in "3pm".
    Trailing,
    /// Boundaries on both sides.
    Both,
}

impl Boundary {
    /// Pick the boundary for a table, using `wanted` when the table asks for
    /// word boundaries at all.
    pub(crate) const fn for_table(word_boundaries: bool, wanted: Self) -> Self {
        if word_boundaries {
            wanted
        } else {
            Self::None
        }
    }
}

/// Build a non-capturing alternation for `keywords`, longest first.
///
/// Returns `None` for an empty list so callers can skip the pattern.
pub(crate) fn alternation<'a>(
    keywords: impl IntoIterator<Item = &'a str>,
    boundary: Boundary,
) -> Option<String> {
    let mut keywords: Vec<&str> = keywords.into_iter().map(str::trim).collect();
    keywords.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    keywords.dedup();

    if keywords.is_empty() {
        return None;
    }

    let branches: Vec<String> = keywords
        .iter()
        .map(|keyword| {
            let escaped = regex::escape(keyword);
            let starts_word = keyword.chars().next().is_some_and(char::is_alphanumeric);
            let ends_word = keyword.chars().next_back().is_some_and(char::is_alphanumeric);

            let lead = if boundary == Boundary::Both && starts_word { r"\b" } else { "" };
            let trail = if boundary != Boundary::None && ends_word { r"\b" } else { "" };

            format!("{lead}{escaped}{trail}")
        })
        .collect();

    Some(format!("(?:{})", branches.join("|")))
}

/// A keyword recognised in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeywordHit<T> {
    pub value: T,
    pub range: Range<usize>,
}

/// A compiled set of keywords, each mapped to a value.
#[derive(Debug, Clone)]
pub(crate) struct KeywordMatcher<T> {
    regex: Regex,
    entries: Vec<(String, T)>,
}

impl<T: Copy> KeywordMatcher<T> {
    /// Compile `entries` into a matcher.
    ///
    /// Returns `Ok(None)` when there are no keywords at all.
    ///
    /// # Errors
    ///
    /// Returns `IntentError::Pattern` if the alternation does not compile.
    pub(crate) fn new<'a>(
        entries: impl IntoIterator<Item = (&'a str, T)>,
        boundary: Boundary,
    ) -> Result<Option<Self>, IntentError> {
        let entries: Vec<(String, T)> = entries
            .into_iter()
            .map(|(keyword, value)| (keyword.trim().to_lowercase(), value))
            .collect();

        let Some(pattern) = alternation(entries.iter().map(|(k, _)| k.as_str()), boundary) else {
            return Ok(None);
        };

        let regex = Regex::new(&format!("(?i){pattern}"))?;
        Ok(Some(Self { regex, entries }))
    }

    /// Value of the keyword spelled `word`, ignoring case.
    pub(crate) fn lookup(&self, word: &str) -> Option<T> {
        let word = word.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| *keyword == word)
            .map(|(_, value)| *value)
    }

    /// All hits in `text`, left to right.
    pub(crate) fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = KeywordHit<T>> + 'a {
        self.regex.find_iter(text).filter_map(move |m| {
            self.lookup(m.as_str()).map(|value| KeywordHit {
                value,
                range: m.range(),
            })
        })
    }

    /// First hit in `text`.
    pub(crate) fn first(&self, text: &str) -> Option<KeywordHit<T>> {
        self.find_iter(text).next()
    }

    /// Whether any keyword occurs in `text`.
    pub(crate) fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_orders_longest_first() {
        let pattern = alternation(["!", "!!!", "!!"], Boundary::None).unwrap();
        assert_eq!(pattern, "(?:!!!|!!|!)");
    }

    #[test]
    fn test_alternation_boundaries() {
        let pattern = alternation(["pm"], Boundary::Trailing).unwrap();
        assert_eq!(pattern, r"(?:pm\b)");

        let pattern = alternation(["mon", "@"], Boundary::Both).unwrap();
        assert_eq!(pattern, r"(?:\bmon\b|@)");

        assert!(alternation(Vec::<&str>::new(), Boundary::Both).is_none());
    }

    #[test]
    fn test_longest_keyword_shadows_nested_one() {
        let matcher = KeywordMatcher::new([("urgent", 1), ("not urgent", 2)], Boundary::Both)
            .unwrap()
            .unwrap();
        let hits: Vec<_> = matcher.find_iter("this is not urgent").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, 2);
        assert_eq!(hits[0].range, 8..18);
    }

    #[test]
    fn test_case_insensitive_and_lookup() {
        let matcher = KeywordMatcher::new([("Monday", 1)], Boundary::Both)
            .unwrap()
            .unwrap();
        assert_eq!(matcher.first("see you MONDAY").map(|h| h.value), Some(1));
        assert_eq!(matcher.lookup("monday"), Some(1));
        assert!(!matcher.is_match("mondays"));
    }

    #[test]
    fn test_word_boundaries_off_matches_substrings() {
        let matcher = KeywordMatcher::new([("图书馆", 3)], Boundary::None)
            .unwrap()
            .unwrap();
        let hit = matcher.first("去图书馆看书").unwrap();
        assert_eq!(&"去图书馆看书"[hit.range], "图书馆");
    }

    #[test]
    fn test_empty_matcher_is_none() {
        let matcher = KeywordMatcher::<u8>::new(Vec::new(), Boundary::Both).unwrap();
        assert!(matcher.is_none());
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let matcher = KeywordMatcher::new([("a.m.", 'a')], Boundary::Trailing)
            .unwrap()
            .unwrap();
        assert!(matcher.is_match("9 a.m."));
        assert!(!matcher.is_match("9 axmx"));
    }
}
