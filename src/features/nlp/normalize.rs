//! Title clean-up after extraction.

use crate::core::text::{collapse_whitespace, trim_residue};

/// Produces the final title from what the extractors left behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentNormalizer;

impl ContentNormalizer {
    /// Collapse whitespace and strip separators left dangling at either end.
    #[must_use]
    pub fn normalize(self, text: &str) -> String {
        let collapsed = collapse_whitespace(text);
        trim_residue(&collapsed).to_string()
    }

    /// Build the title for `input` from the `remaining` text.
    ///
    /// Input that no stage cut anything from is only trimmed. When the cuts
    /// consumed every word the normalized input is kept instead, so a title
    /// is empty only for blank input.
    #[must_use]
    pub fn title(self, input: &str, remaining: &str) -> String {
        if remaining == input {
            return input.trim().to_string();
        }

        let title = self.normalize(remaining);
        if title.is_empty() {
            self.normalize(input)
        } else {
            title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_and_trims() {
        assert_eq!(ContentNormalizer.normalize("  go   to the\tlibrary  "), "go to the library");
    }

    #[test]
    fn test_strips_residual_separators() {
        assert_eq!(ContentNormalizer.normalize("meeting, "), "meeting");
        assert_eq!(ContentNormalizer.normalize(": file taxes"), "file taxes");
        assert_eq!(ContentNormalizer.normalize("，交报告、"), "交报告");
    }

    #[test]
    fn test_inner_separators_survive() {
        assert_eq!(ContentNormalizer.normalize("eggs, milk"), "eggs, milk");
    }

    #[test]
    fn test_title_untouched_input_is_only_trimmed() {
        let normalizer = ContentNormalizer;
        assert_eq!(normalizer.title("  tidy   bookshelf ", "  tidy   bookshelf "), "tidy   bookshelf");
        assert_eq!(normalizer.title("Remember:", "Remember:"), "Remember:");
    }

    #[test]
    fn test_title_cleans_after_a_cut() {
        assert_eq!(ContentNormalizer.title("meeting, tomorrow", "meeting, "), "meeting");
    }

    #[test]
    fn test_title_falls_back_when_everything_was_cut() {
        assert_eq!(ContentNormalizer.title(" tomorrow ", "  "), "tomorrow");
        assert_eq!(ContentNormalizer.title("urgent!", "!"), "urgent!");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(ContentNormalizer.normalize(" \n\t "), "");
    }
}
