//! Keyword tables.
//!
//! A [`KeywordTable`] is the only locale-specific input of the extractor.
//! Tables are plain data: two are embedded in the binary (`locales/*.yaml`)
//! and any other can be loaded from a YAML file at runtime.

use std::path::Path;

use clap::ValueEnum;
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::IntentError;

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority (`!`, "not urgent")
    Low,
    /// Medium priority (`!!`, "medium priority")
    Medium,
    /// High priority (`!!!`, "urgent", "important")
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Task grouping inferred from content keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Life,
    Study,
    Health,
    Goals,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Work => "work",
            Self::Life => "life",
            Self::Study => "study",
            Self::Health => "health",
            Self::Goals => "goals",
        })
    }
}

/// Part of the day named by a modifier word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Noon,
    Afternoon,
    Evening,
    /// Meridiem marker; only meaningful right after an hour.
    Am,
    /// Meridiem marker; only meaningful right after an hour.
    Pm,
}

impl DayPeriod {
    /// Time substituted when the period word is the only time expression.
    ///
    /// Meridiem markers have no default: "am" on its own is not a time.
    #[must_use]
    pub fn default_time(self) -> Option<NaiveTime> {
        match self {
            Self::Morning => NaiveTime::from_hms_opt(9, 0, 0),
            Self::Noon => NaiveTime::from_hms_opt(12, 0, 0),
            Self::Afternoon => NaiveTime::from_hms_opt(14, 0, 0),
            Self::Evening => NaiveTime::from_hms_opt(19, 0, 0),
            Self::Am | Self::Pm => None,
        }
    }

    /// Whether this is an am/pm marker rather than a period of the day.
    #[must_use]
    pub const fn is_meridiem(self) -> bool {
        matches!(self, Self::Am | Self::Pm)
    }
}

/// Built-in locales.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Zh => "zh",
        })
    }
}

/// Priority keywords, checked High, then Low, then Medium.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityKeywords {
    pub high: Vec<String>,
    pub low: Vec<String>,
    pub medium: Vec<String>,
}

/// Keywords for one category label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub label: Category,
    pub keywords: Vec<String>,
}

/// Words for today, tomorrow and the day after.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelativeDayKeywords {
    pub today: Vec<String>,
    pub tomorrow: Vec<String>,
    pub day_after_tomorrow: Vec<String>,
}

/// A weekday name with its ISO number (Monday = 1 ... Sunday = 7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayKeyword {
    pub keyword: String,
    pub weekday: u8,
}

/// A month name with its number (1 ... 12).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthKeyword {
    pub keyword: String,
    pub month: u32,
    /// Only a month when the day carries a day marker ("may 2nd").
    #[serde(default)]
    pub needs_day_marker: bool,
}

/// Markers following the numeric parts of a date ("3月5日", "march 5th").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateMarkers {
    pub year: Vec<String>,
    pub month: Vec<String>,
    pub day: Vec<String>,
}

/// Markers following the numeric parts of a time ("9点30分", "3 o'clock").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeMarkers {
    pub hour: Vec<String>,
    pub minute: Vec<String>,
    pub half: Vec<String>,
}

/// A modifier word naming a part of the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodKeyword {
    pub keyword: String,
    pub period: DayPeriod,
}

/// A spelled-out number ("nine", "九").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumeralKeyword {
    pub word: String,
    pub value: u32,
}

/// Locale-specific data driving every extraction stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTable {
    /// Locale identifier, informational only.
    pub locale: String,
    /// Restrict keywords to whole-word matches (space-delimited scripts).
    #[serde(default)]
    pub word_boundaries: bool,
    #[serde(default)]
    pub priority: PriorityKeywords,
    /// Evaluated in declaration order.
    #[serde(default)]
    pub categories: Vec<CategoryKeywords>,
    #[serde(default)]
    pub relative_days: RelativeDayKeywords,
    /// Standalone qualifiers such as "next week".
    #[serde(default)]
    pub next_week: Vec<String>,
    /// Qualifiers that only count directly before a weekday ("next").
    #[serde(default)]
    pub next_prefix: Vec<String>,
    #[serde(default)]
    pub weekdays: Vec<WeekdayKeyword>,
    /// Short weekday forms recognised only after a next-week qualifier.
    #[serde(default)]
    pub weekday_suffixes: Vec<WeekdayKeyword>,
    #[serde(default)]
    pub months: Vec<MonthKeyword>,
    #[serde(default)]
    pub date_markers: DateMarkers,
    #[serde(default)]
    pub time_markers: TimeMarkers,
    #[serde(default)]
    pub periods: Vec<PeriodKeyword>,
    /// Words stripped along with a directly following date or time ("at").
    #[serde(default)]
    pub connectors: Vec<String>,
    /// Connectors that also make a directly following bare number an hour
    /// ("at 5"). Usually a subset of `connectors`.
    #[serde(default)]
    pub time_connectors: Vec<String>,
    #[serde(default)]
    pub numerals: Vec<NumeralKeyword>,
}

static ENGLISH: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::from_yaml_str(include_str!("locales/en.yaml"))
        .unwrap_or_else(|e| panic!("Invalid built-in English keyword table: {e}"))
});

static CHINESE: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::from_yaml_str(include_str!("locales/zh.yaml"))
        .unwrap_or_else(|e| panic!("Invalid built-in Chinese keyword table: {e}"))
});

impl KeywordTable {
    /// The embedded table for a built-in locale.
    #[must_use]
    pub fn builtin(locale: Locale) -> &'static Self {
        match locale {
            Locale::En => &ENGLISH,
            Locale::Zh => &CHINESE,
        }
    }

    /// Parse and validate a table from YAML.
    ///
    /// # Errors
    ///
    /// Returns `IntentError::Yaml` if the document is malformed and
    /// `IntentError::InvalidKeywords` if it fails validation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, IntentError> {
        let table: Self = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the table is invalid.
    pub fn from_path(path: &Path) -> Result<Self, IntentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            IntentError::Config(format!(
                "Failed to read keyword table {}: {e}",
                path.display()
            ))
        })?;
        log::debug!("Loading keyword table from {}", path.display());
        Self::from_yaml_str(&contents)
    }

    /// Serialize the table back to YAML.
    ///
    /// # Errors
    ///
    /// Returns `IntentError::Yaml` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, IntentError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the table for values the extractor cannot use.
    ///
    /// # Errors
    ///
    /// Returns `IntentError::InvalidKeywords` naming the first offending entry.
    pub fn validate(&self) -> Result<(), IntentError> {
        let lists: [(&str, &[String]); 14] = [
            ("priority.high", &self.priority.high),
            ("priority.low", &self.priority.low),
            ("priority.medium", &self.priority.medium),
            ("relative_days.today", &self.relative_days.today),
            ("relative_days.tomorrow", &self.relative_days.tomorrow),
            ("relative_days.day_after_tomorrow", &self.relative_days.day_after_tomorrow),
            ("next_week", &self.next_week),
            ("next_prefix", &self.next_prefix),
            ("date_markers.year", &self.date_markers.year),
            ("date_markers.month", &self.date_markers.month),
            ("date_markers.day", &self.date_markers.day),
            ("time_markers.hour", &self.time_markers.hour),
            ("time_markers.minute", &self.time_markers.minute),
            ("time_markers.half", &self.time_markers.half),
        ];
        for (name, list) in lists {
            check_non_empty(name, list.iter().map(String::as_str))?;
        }
        check_non_empty("connectors", self.connectors.iter().map(String::as_str))?;
        check_non_empty("time_connectors", self.time_connectors.iter().map(String::as_str))?;

        if self.categories.is_empty() {
            return Err(IntentError::InvalidKeywords(
                "at least one category is required".to_string(),
            ));
        }
        for category in &self.categories {
            let name = format!("categories.{}", category.label);
            check_non_empty(&name, category.keywords.iter().map(String::as_str))?;
        }

        for weekday in self.weekdays.iter().chain(&self.weekday_suffixes) {
            if !(1..=7).contains(&weekday.weekday) {
                return Err(IntentError::InvalidKeywords(format!(
                    "weekday '{}' has number {} (expected 1-7)",
                    weekday.keyword, weekday.weekday
                )));
            }
        }
        check_non_empty(
            "weekdays",
            self.weekdays
                .iter()
                .chain(&self.weekday_suffixes)
                .map(|w| w.keyword.as_str()),
        )?;

        for month in &self.months {
            if !(1..=12).contains(&month.month) {
                return Err(IntentError::InvalidKeywords(format!(
                    "month '{}' has number {} (expected 1-12)",
                    month.keyword, month.month
                )));
            }
        }
        check_non_empty("months", self.months.iter().map(|m| m.keyword.as_str()))?;

        check_non_empty("periods", self.periods.iter().map(|p| p.keyword.as_str()))?;

        for numeral in &self.numerals {
            if numeral.value > 59 {
                return Err(IntentError::InvalidKeywords(format!(
                    "numeral '{}' has value {} (expected 0-59)",
                    numeral.word, numeral.value
                )));
            }
        }
        check_non_empty("numerals", self.numerals.iter().map(|n| n.word.as_str()))?;

        Ok(())
    }
}

fn check_non_empty<'a>(
    name: &str,
    mut keywords: impl Iterator<Item = &'a str>,
) -> Result<(), IntentError> {
    if keywords.any(|k| k.trim().is_empty()) {
        return Err(IntentError::InvalidKeywords(format!(
            "empty keyword in {name}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_load() {
        let en = KeywordTable::builtin(Locale::En);
        assert_eq!(en.locale, "en");
        assert!(en.word_boundaries);
        assert!(en.priority.high.contains(&"urgent".to_string()));
        assert_eq!(en.categories[0].label, Category::Work);

        let zh = KeywordTable::builtin(Locale::Zh);
        assert_eq!(zh.locale, "zh");
        assert!(!zh.word_boundaries);
        assert!(!zh.weekday_suffixes.is_empty());
    }

    #[test]
    fn test_category_declaration_order() {
        let labels: Vec<Category> = KeywordTable::builtin(Locale::En)
            .categories
            .iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                Category::Work,
                Category::Life,
                Category::Study,
                Category::Health,
                Category::Goals
            ]
        );
    }

    #[test]
    fn test_minimal_table_from_yaml() {
        let yaml = r#"
locale: test
categories:
  - label: health
    keywords: ["swim"]
"#;
        let table = KeywordTable::from_yaml_str(yaml).unwrap();
        assert_eq!(table.locale, "test");
        assert!(!table.word_boundaries);
        assert!(table.priority.high.is_empty());
        assert!(table.weekdays.is_empty());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let empty_keyword = r#"
locale: test
priority:
  high: [""]
categories:
  - { label: work, keywords: ["job"] }
"#;
        let err = KeywordTable::from_yaml_str(empty_keyword).unwrap_err();
        assert!(err.to_string().contains("priority.high"));

        let bad_weekday = r#"
locale: test
categories:
  - { label: work, keywords: ["job"] }
weekdays:
  - { keyword: "someday", weekday: 8 }
"#;
        let err = KeywordTable::from_yaml_str(bad_weekday).unwrap_err();
        assert!(matches!(err, IntentError::InvalidKeywords(_)));

        let no_categories = "locale: test\n";
        assert!(KeywordTable::from_yaml_str(no_categories).is_err());
    }

    #[test]
    fn test_unknown_category_label_is_rejected() {
        let yaml = r#"
locale: test
categories:
  - { label: hobbies, keywords: ["paint"] }
"#;
        assert!(matches!(
            KeywordTable::from_yaml_str(yaml),
            Err(IntentError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_roundtrip_preserves_table() {
        let en = KeywordTable::builtin(Locale::En);
        let yaml = en.to_yaml().unwrap();
        let back = KeywordTable::from_yaml_str(&yaml).unwrap();
        assert_eq!(back.weekdays.len(), en.weekdays.len());
        assert_eq!(back.numerals.len(), en.numerals.len());
    }

    #[test]
    fn test_day_period_defaults() {
        assert_eq!(DayPeriod::Morning.default_time(), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(DayPeriod::Noon.default_time(), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(DayPeriod::Afternoon.default_time(), NaiveTime::from_hms_opt(14, 0, 0));
        assert_eq!(DayPeriod::Evening.default_time(), NaiveTime::from_hms_opt(19, 0, 0));
        assert_eq!(DayPeriod::Pm.default_time(), None);
        assert!(DayPeriod::Am.is_meridiem());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = KeywordTable::from_path(Path::new("/nonexistent/keywords.yaml")).unwrap_err();
        assert!(matches!(err, IntentError::Config(_)));
    }
}
