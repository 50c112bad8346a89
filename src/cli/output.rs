//! Output formatting utilities

use crate::domain::markdown::format_percent;
use crate::domain::Entry;

/// Short date part of a stored timestamp
fn short_date(entry: &Entry) -> &str {
    let date = entry.date();
    date.get(..10).unwrap_or(date)
}

fn format_line(number: usize, entry: &Entry) -> String {
    let chosen = entry
        .chosen_option()
        .map(|c| format!(" -> {}", c))
        .unwrap_or_default();
    let marker = if entry.is_reviewed() { " [reviewed]" } else { "" };
    format!(
        "{:>3}  {}  {}{}{}\n",
        number,
        short_date(entry),
        entry.title(),
        chosen,
        marker
    )
}

/// Format every decision with its number
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No decisions recorded".to_string();
    }

    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format_line(i + 1, entry));
    }
    output
}

/// Format decisions awaiting review
pub fn format_pending(pending: &[(usize, &Entry)], days: i64) -> String {
    if pending.is_empty() {
        return format!("No decisions older than {} days awaiting review", days);
    }

    let mut output = String::new();
    for (number, entry) in pending {
        output.push_str(&format_line(*number, entry));
    }
    output
}

/// Format the calibration score
pub fn format_score(score: Option<f64>, reviewed: usize) -> String {
    match score {
        Some(score) => format!(
            "Calibration: {} good across {} reviewed decision{}",
            format_percent(score),
            reviewed,
            if reviewed == 1 { "" } else { "s" }
        ),
        None => "No reviewed decisions".to_string(),
    }
}
