//! Priority extraction.

use crate::core::text::remove_span;
use crate::error::IntentError;

use super::keywords::{KeywordTable, Priority};
use super::matcher::{Boundary, KeywordMatcher};

/// Groups are tried in this order; the first group with a hit wins.
///
/// High goes first so that an explicit urgent marker is never outranked by a
/// weaker marker elsewhere in the same sentence.
const GROUP_ORDER: [Priority; 3] = [Priority::High, Priority::Low, Priority::Medium];

/// Finds and strips one priority keyword.
#[derive(Debug, Clone)]
pub struct PriorityExtractor {
    matcher: Option<KeywordMatcher<Priority>>,
}

impl PriorityExtractor {
    /// Compile the priority keywords of `table`.
    ///
    /// # Errors
    ///
    /// Returns `IntentError::Pattern` if the keywords cannot be compiled.
    pub fn new(table: &KeywordTable) -> Result<Self, IntentError> {
        let keywords = &table.priority;
        let entries = keywords
            .high
            .iter()
            .map(|k| (k.as_str(), Priority::High))
            .chain(keywords.low.iter().map(|k| (k.as_str(), Priority::Low)))
            .chain(keywords.medium.iter().map(|k| (k.as_str(), Priority::Medium)));

        let matcher = KeywordMatcher::new(
            entries,
            Boundary::for_table(table.word_boundaries, Boundary::Both),
        )?;

        Ok(Self { matcher })
    }

    /// Return `text` without the winning keyword, and the priority it named.
    ///
    /// Only the first occurrence from the winning group is removed; text is
    /// returned unchanged when nothing matches.
    #[must_use]
    pub fn extract(&self, text: &str) -> (String, Option<Priority>) {
        let Some(matcher) = &self.matcher else {
            return (text.to_string(), None);
        };

        let hits: Vec<_> = matcher.find_iter(text).collect();

        let winner = GROUP_ORDER
            .iter()
            .find_map(|level| hits.iter().find(|hit| hit.value == *level));

        match winner {
            Some(hit) => {
                log::debug!(
                    "priority {} from '{}'",
                    hit.value,
                    &text[hit.range.clone()]
                );
                (remove_span(text, hit.range.clone()), Some(hit.value))
            },
            None => (text.to_string(), None),
        }
    }
}
