//! Sample decision used by the `demo` command

use crate::domain::Entry;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A filled-in example decision
pub fn sample_entry() -> Entry {
    let mut entry = Entry::new("Example: Choose Cloud Provider", "");
    entry.set_context("Need to select cloud infrastructure for new project");
    entry.add_option(
        "AWS",
        strings(&["Market leader", "Most services"]),
        strings(&["Complex pricing"]),
    );
    entry.add_option(
        "GCP",
        strings(&["Great ML tools", "Simple pricing"]),
        strings(&["Smaller ecosystem"]),
    );
    entry.choose("AWS", "Broader service catalog matches our needs", 0.7);
    entry.set_expected_outcome("Reliable infrastructure with room to grow");
    entry
}
