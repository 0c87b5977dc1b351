//! Category detection. Matched words stay in the text.

use crate::error::IntentError;

use super::keywords::{Category, KeywordTable};
use super::matcher::{Boundary, KeywordMatcher};

/// Detects the first category, in table order, with a keyword in the text.
#[derive(Debug, Clone)]
pub struct CategoryExtractor {
    categories: Vec<(Category, KeywordMatcher<Category>)>,
}

impl CategoryExtractor {
    /// Compile one matcher per category, preserving declaration order.
    ///
    /// # Errors
    ///
    /// Returns `IntentError::Pattern` if the keywords cannot be compiled.
    pub fn new(table: &KeywordTable) -> Result<Self, IntentError> {
        let boundary = Boundary::for_table(table.word_boundaries, Boundary::Both);
        let mut categories = Vec::with_capacity(table.categories.len());

        for definition in &table.categories {
            let entries = definition
                .keywords
                .iter()
                .map(|k| (k.as_str(), definition.label));
            if let Some(matcher) = KeywordMatcher::new(entries, boundary)? {
                categories.push((definition.label, matcher));
            }
        }

        Ok(Self { categories })
    }

    /// Return `text` untouched together with the detected category.
    #[must_use]
    pub fn extract(&self, text: &str) -> (String, Option<Category>) {
        let category = self
            .categories
            .iter()
            .find(|(_, matcher)| matcher.is_match(text))
            .map(|(label, _)| *label);

        if let Some(label) = category {
            log::debug!("category {label}");
        }

        (text.to_string(), category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::keywords::Locale;

    fn english() -> CategoryExtractor {
        CategoryExtractor::new(KeywordTable::builtin(Locale::En)).unwrap()
    }

    #[test]
    fn test_text_is_never_modified() {
        let (text, category) = english().extract("buy groceries");
        assert_eq!(text, "buy groceries");
        assert_eq!(category, Some(Category::Life));
    }

    #[test]
    fn test_no_category() {
        assert_eq!(english().extract("tidy bookshelf").1, None);
    }

    #[test]
    fn test_declaration_order_wins() {
        // "meeting" is a work keyword, "library" a study keyword.
        assert_eq!(
            english().extract("library meeting").1,
            Some(Category::Work)
        );
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(english().extract("workout").1, Some(Category::Health));
        assert_eq!(english().extract("get ready").1, None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(english().extract("Go to the LIBRARY").1, Some(Category::Study));
    }

    #[test]
    fn test_chinese_substrings() {
        let extractor = CategoryExtractor::new(KeywordTable::builtin(Locale::Zh)).unwrap();
        assert_eq!(extractor.extract("去图书馆还书").1, Some(Category::Study));
        assert_eq!(extractor.extract("下午开会").1, Some(Category::Work));
        assert_eq!(extractor.extract("整理书架").1, None);
    }
}
