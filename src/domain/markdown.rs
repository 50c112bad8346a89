//! Markdown rendering for decision entries

use crate::domain::Entry;
use regex::Regex;
use std::sync::OnceLock;

const FOOTER: &str = "\n---\n*Decision frameworks: [KeepRule](https://keeprule.com)*\n";

fn non_slug_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Render an entry as a Markdown document.
///
/// The decision section only appears once a non-empty option has been chosen;
/// the expected outcome section is always present.
pub fn render(entry: &Entry) -> String {
    let mut md = format!("# {}\n\n", entry.title());
    md.push_str(&format!("**Date:** {}\n\n", entry.date()));
    md.push_str(&format!("## Context\n{}\n\n", entry.context()));

    md.push_str("## Options\n");
    for option in entry.options() {
        md.push_str(&format!("\n### {}\n", option.name));
        md.push_str(&format!("**Pros:** {}\n", option.pros.join(", ")));
        md.push_str(&format!("**Cons:** {}\n", option.cons.join(", ")));
    }

    if let Some(chosen) = entry.chosen_option().filter(|c| !c.is_empty()) {
        md.push_str(&format!("\n## Decision: {}\n", chosen));
        md.push_str(&format!("**Reasoning:** {}\n", entry.reasoning()));
        md.push_str(&format!(
            "**Confidence:** {}\n",
            format_percent(entry.confidence())
        ));
    }

    md.push_str(&format!("\n## Expected Outcome\n{}\n", entry.expected_outcome()));
    md.push_str(FOOTER);
    md
}

/// Format a fraction as a whole-number percentage (0.8 -> "80%")
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Filename-safe slug for an entry title ("Pick DB!" -> "pick-db")
pub fn slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let slug = non_slug_regex().replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "decision".to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn pick_db() -> Entry {
        let at = NaiveDate::from_ymd_opt(2025, 1, 17)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let mut entry = Entry::with_timestamp("Pick DB", "New billing service", at);
        entry.add_option("Postgres", strings(&["ACID"]), strings(&["Ops overhead"]));
        entry.add_option("SQLite", strings(&["Simple"]), strings(&["No concurrency"]));
        entry
    }

    #[test]
    fn test_render_full_document() {
        let mut entry = pick_db();
        entry.choose("Postgres", "Matches our consistency needs", 0.8);
        entry.set_expected_outcome("No data anomalies");

        let expected = "# Pick DB\n\n\
            **Date:** 2025-01-17T09:30:00.000000\n\n\
            ## Context\nNew billing service\n\n\
            ## Options\n\
            \n### Postgres\n**Pros:** ACID\n**Cons:** Ops overhead\n\
            \n### SQLite\n**Pros:** Simple\n**Cons:** No concurrency\n\
            \n## Decision: Postgres\n\
            **Reasoning:** Matches our consistency needs\n\
            **Confidence:** 80%\n\
            \n## Expected Outcome\nNo data anomalies\n\
            \n---\n*Decision frameworks: [KeepRule](https://keeprule.com)*\n";
        assert_eq!(render(&entry), expected);
    }

    #[test]
    fn test_render_confidence_percent() {
        let mut entry = pick_db();
        entry.choose("Postgres", "Matches our consistency needs", 0.8);
        assert!(render(&entry).contains("**Confidence:** 80%"));
    }

    #[test]
    fn test_render_without_choice_omits_decision() {
        let entry = pick_db();
        let md = render(&entry);
        assert!(!md.contains("## Decision"));
        assert!(!md.contains("**Confidence:**"));
        assert!(md.contains("## Expected Outcome\n\n"));
    }

    #[test]
    fn test_render_empty_choice_omits_decision() {
        let mut entry = pick_db();
        entry.choose("", "undecided", 0.3);
        assert!(!render(&entry).contains("## Decision"));
    }

    #[test]
    fn test_render_joins_multiple_pros() {
        let mut entry = Entry::new("Cloud", "");
        entry.add_option(
            "GCP",
            strings(&["Great ML tools", "Simple pricing"]),
            vec![],
        );
        let md = render(&entry);
        assert!(md.contains("**Pros:** Great ML tools, Simple pricing\n"));
        assert!(md.contains("**Cons:** \n"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut entry = pick_db();
        entry.choose("SQLite", "Fewer moving parts", 0.55);
        assert_eq!(render(&entry), render(&entry));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.7), "70%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(2.0 / 3.0), "67%");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Pick DB"), "pick-db");
        assert_eq!(slug("Example: Choose Cloud Provider"), "example-choose-cloud-provider");
        assert_eq!(slug("  --Hire #2?  "), "hire-2");
        assert_eq!(slug("???"), "decision");
    }
}
