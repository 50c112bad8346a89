//! Export decisions use case

use crate::domain::{markdown, Entry, Journal};
use crate::error::Result;
use crate::infrastructure::store;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Service for rendering decisions as Markdown or JSON
pub struct ExportService {
    journal: Journal,
}

impl ExportService {
    pub fn new(journal: Journal) -> Self {
        ExportService { journal }
    }

    /// Markdown for one decision
    pub fn markdown(&self, number: usize) -> Result<String> {
        Ok(markdown::render(self.journal.entry(number)?))
    }

    /// Markdown for every decision, separated by a blank line
    pub fn markdown_all(&self) -> String {
        self.journal
            .entries()
            .iter()
            .map(markdown::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The journal as the JSON array written by `save`
    pub fn json(&self) -> Result<String> {
        store::to_json(self.journal.entries())
    }

    /// Write one `NNN-slug.md` file per decision into `dir`
    pub fn write_markdown_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.journal.len());
        for (i, entry) in self.journal.entries().iter().enumerate() {
            let path = dir.join(file_name(i + 1, entry));
            fs::write(&path, markdown::render(entry))?;
            debug!(path = %path.display(), "exported decision");
            written.push(path);
        }
        Ok(written)
    }
}

fn file_name(number: usize, entry: &Entry) -> String {
    format!("{:03}-{}.md", number, markdown::slug(entry.title()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecisionError;
    use tempfile::TempDir;

    fn journal() -> Journal {
        let mut journal = Journal::new("unused.json");
        let mut db = Entry::new("Pick DB", "");
        db.choose("Postgres", "Consistency", 0.8);
        journal.add_entry(db);
        journal.add_entry(Entry::new("Hire Alex?", ""));
        journal
    }

    #[test]
    fn test_markdown_single() {
        let service = ExportService::new(journal());
        let md = service.markdown(1).unwrap();
        assert!(md.starts_with("# Pick DB\n"));
        assert!(md.contains("**Confidence:** 80%"));
        assert!(matches!(service.markdown(3), Err(DecisionError::EntryNotFound(3))));
    }

    #[test]
    fn test_markdown_all_keeps_order() {
        let service = ExportService::new(journal());
        let md = service.markdown_all();
        let db = md.find("# Pick DB").unwrap();
        let hire = md.find("# Hire Alex?").unwrap();
        assert!(db < hire);
    }

    #[test]
    fn test_markdown_all_empty() {
        let service = ExportService::new(Journal::new("unused.json"));
        assert_eq!(service.markdown_all(), "");
    }

    #[test]
    fn test_json_matches_store_format() {
        let journal = journal();
        let expected = store::to_json(journal.entries()).unwrap();
        let service = ExportService::new(journal);
        assert_eq!(service.json().unwrap(), expected);
        assert!(expected.starts_with("[\n  {\n    \"title\": \"Pick DB\""));
    }

    #[test]
    fn test_write_markdown_dir() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("export");
        let service = ExportService::new(journal());

        let written = service.write_markdown_dir(&out).unwrap();
        assert_eq!(
            written,
            vec![out.join("001-pick-db.md"), out.join("002-hire-alex.md")]
        );
        let content = fs::read_to_string(&written[1]).unwrap();
        assert!(content.starts_with("# Hire Alex?\n"));
    }
}
