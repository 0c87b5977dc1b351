//! JSON output formatting for task-intent.

use serde_json::{json, Value};

use crate::error::IntentError;
use crate::features::nlp::ParsedIntent;

/// Build the JSON object for one parse result.
fn intent_value(input: &str, intent: &ParsedIntent) -> Value {
    json!({
        "input": input,
        "content": intent.content,
        "due_at": intent.due_at,
        "due_date": intent.due_date_iso(),
        "due_time": intent.due_time_hm(),
        "due_weekday": intent.due_weekday(),
        "priority": intent.priority,
        "category_hint": intent.category_hint,
        "matched_time_text": intent.matched_time_text,
        "has_schedule": intent.has_schedule(),
    })
}

/// Format one parse result as pretty-printed JSON
///
/// # Errors
///
/// Returns `IntentError::Json` if JSON serialization fails.
pub fn format_intent_json(input: &str, intent: &ParsedIntent) -> Result<String, IntentError> {
    Ok(serde_json::to_string_pretty(&intent_value(input, intent))?)
}

/// Format parse results as JSON lines, one compact object per input
///
/// # Errors
///
/// Returns `IntentError::Json` if JSON serialization fails.
pub fn format_intents_json(results: &[(String, ParsedIntent)]) -> Result<String, IntentError> {
    let lines = results
        .iter()
        .map(|(input, intent)| serde_json::to_string(&intent_value(input, intent)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::{Category, Priority};
    use chrono::NaiveDate;

    fn sample() -> ParsedIntent {
        ParsedIntent {
            content: "meeting".to_string(),
            due_at: NaiveDate::from_ymd_opt(2026, 10, 26)
                .unwrap()
                .and_hms_opt(15, 0, 0),
            priority: Some(Priority::High),
            category_hint: Some(Category::Work),
            matched_time_text: Some("next Monday 3pm".to_string()),
        }
    }

    #[test]
    fn test_format_intent_json() {
        let output = format_intent_json("next Monday 3pm meeting, high priority", &sample()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["content"], "meeting");
        assert_eq!(value["due_at"], "2026-10-26T15:00:00");
        assert_eq!(value["due_date"], "2026-10-26");
        assert_eq!(value["due_time"], "15:00");
        assert_eq!(value["due_weekday"], 2);
        assert_eq!(value["priority"], "high");
        assert_eq!(value["category_hint"], "work");
        assert_eq!(value["has_schedule"], true);
    }

    #[test]
    fn test_format_empty_intent_json() {
        let output = format_intent_json("", &ParsedIntent::default()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["content"], "");
        assert!(value["due_at"].is_null());
        assert!(value["priority"].is_null());
        assert_eq!(value["has_schedule"], false);
    }

    #[test]
    fn test_format_intents_json_lines() {
        let results = vec![
            ("a".to_string(), ParsedIntent::default()),
            ("b".to_string(), sample()),
        ];
        let output = format_intents_json(&results).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["input"], "b");
    }
}
