#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn decisions_cmd() -> Command {
    let mut cmd = Command::cargo_bin("decisions").unwrap();
    cmd.env_remove("DECISIONS_FILE");
    cmd.env_remove("DECISIONS_REVIEW_DAYS");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A journal record as an earlier tool would have written it
pub fn record(title: &str, date: &str, quality: Option<&str>) -> String {
    let review = match quality {
        Some(q) => format!(
            r#"{{"date": "{}", "outcome": "done", "quality": "{}", "lessons": ""}}"#,
            date, q
        ),
        None => "null".to_string(),
    };
    format!(
        r#"{{"title": "{}", "date": "{}", "context": "", "options": [], "chosen_option": null,
            "reasoning": "", "confidence": 0.5, "expected_outcome": "", "emotional_state": "",
            "review": {}}}"#,
        title, date, review
    )
}

pub fn write_journal(dir: &Path, records: &[String]) {
    std::fs::write(
        dir.join("decisions.json"),
        format!("[{}]", records.join(",")),
    )
    .unwrap();
}
