use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{Query, SearchIndex};
use std::path::Path;

/// Run one query against a summary artifact on disk.
pub fn run(summary_path: &Path, term: &str) -> Result<CmdResult> {
    let index = SearchIndex::load(summary_path)?;
    let query = Query::from_term(term);
    let matches = index.search(&query)?;

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matching notes."));
    }
    Ok(result.with_records(matches.into_iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteRecord;
    use crate::summary;

    fn write_summary(dir: &Path) -> std::path::PathBuf {
        let path = dir.join(summary::SUMMARY_FILENAME);
        let records = vec![
            NoteRecord::new("a.html", "Shopping List", vec!["home".to_string()], "milk eggs"),
            NoteRecord::new(
                "b.html",
                "Trip Plan",
                vec!["travel".to_string()],
                "flights hotels",
            ),
        ];
        summary::write(&path, &records).unwrap();
        path
    }

    #[test]
    fn finds_records_by_tag() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path());

        let result = run(&path, "travel").unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].title, "Trip Plan");
    }

    #[test]
    fn wildcard_lists_everything_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path());

        let result = run(&path, "*").unwrap();
        let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Shopping List", "Trip Plan"]);
    }

    #[test]
    fn no_match_reports_a_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path());

        let result = run(&path, "xyz").unwrap();
        assert!(result.records.is_empty());
        assert!(result.messages.iter().any(|m| m.content.contains("No matching")));
    }

    #[test]
    fn missing_summary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("absent.json"), "x").is_err());
    }
}
