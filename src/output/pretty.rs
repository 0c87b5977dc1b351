use std::fmt::Write;

use colored::Colorize;

use crate::features::nlp::{ParsedIntent, Priority};

/// Format one parse result as labelled lines
pub fn format_intent_pretty(input: &str, intent: &ParsedIntent) -> String {
    let mut output = format!("{} {}\n", "Input:".dimmed(), input);

    let content = if intent.content.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        intent.content.bold().to_string()
    };
    writeln!(output, "  {} {content}", "Content:".cyan().bold()).ok();

    if let Some(due) = intent.due_at {
        writeln!(
            output,
            "  {} {}",
            "Due:".cyan(),
            due.format("%Y-%m-%d %H:%M").to_string().yellow()
        )
        .ok();
    }
    if let Some(matched) = &intent.matched_time_text {
        writeln!(output, "  {} {matched}", "Matched:".dimmed()).ok();
    }
    if let Some(priority) = intent.priority {
        let label = match priority {
            Priority::High => priority.to_string().red().bold(),
            Priority::Medium => priority.to_string().yellow(),
            Priority::Low => priority.to_string().green(),
        };
        writeln!(output, "  {} {label}", "Priority:".red().bold()).ok();
    }
    if let Some(category) = intent.category_hint {
        writeln!(output, "  {} {category}", "Category:".magenta()).ok();
    }

    output
}

/// Format a batch of parse results, separated by blank lines
pub fn format_intents_pretty(results: &[(String, ParsedIntent)]) -> String {
    if results.is_empty() {
        return "No input".dimmed().to_string();
    }

    results
        .iter()
        .map(|(input, intent)| format_intent_pretty(input, intent))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::Category;

    #[test]
    fn test_format_intent_pretty() {
        colored::control::set_override(false);
        let intent = ParsedIntent {
            content: "go to the library".to_string(),
            due_at: chrono::NaiveDate::from_ymd_opt(2026, 10, 17)
                .unwrap()
                .and_hms_opt(9, 0, 0),
            priority: None,
            category_hint: Some(Category::Study),
            matched_time_text: Some("tomorrow morning 9".to_string()),
        };

        let output = format_intent_pretty("tomorrow morning 9 go to the library", &intent);

        assert!(output.contains("Content: go to the library"));
        assert!(output.contains("Due: 2026-10-17 09:00"));
        assert!(output.contains("Matched: tomorrow morning 9"));
        assert!(output.contains("Category: study"));
        assert!(!output.contains("Priority:"));
    }

    #[test]
    fn test_format_empty_content() {
        colored::control::set_override(false);
        let output = format_intent_pretty("  ", &ParsedIntent::default());
        assert!(output.contains("(empty)"));
        assert!(!output.contains("Due:"));
    }

    #[test]
    fn test_format_intents_pretty_empty() {
        colored::control::set_override(false);
        assert_eq!(format_intents_pretty(&[]), "No input");
    }
}
