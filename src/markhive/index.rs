//! The in-memory search index.
//!
//! An ordered, immutable sequence of [`NoteRecord`]s built once per run from
//! the summary artifact. Matching is pure substring containment, OR-ed across
//! title, tags, and content — no stemming, no tokenization, no relevance
//! scoring. Results always preserve index order.
//!
//! Matching is case-insensitive. The original behavior this replaces was
//! case-sensitive by accident rather than by design; folding case is the
//! deliberate usability deviation.

use crate::error::{MarkhiveError, Result};
use crate::model::NoteRecord;
use std::path::Path;

/// The sentinel query value meaning "match every record".
pub const WILDCARD: &str = "*";

/// A parsed search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Match every record.
    All,
    /// Literal substring match against title, tags, and content.
    Term(String),
}

impl Query {
    /// Parse a raw query as received on the wire.
    ///
    /// Non-UTF-8 input is rejected with [`MarkhiveError::InvalidQuery`]. The
    /// empty string normalizes to the wildcard; whitespace-only input stays a
    /// literal term.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let term = std::str::from_utf8(raw).map_err(|_| MarkhiveError::InvalidQuery)?;
        Ok(Self::from_term(term))
    }

    /// Build a query from a string already known to be valid.
    pub fn from_term(term: &str) -> Self {
        if term.is_empty() || term == WILDCARD {
            Query::All
        } else {
            Query::Term(term.to_string())
        }
    }
}

/// Ordered, immutable note-record sequence with substring search.
///
/// An index starts out unbuilt ([`SearchIndex::empty`]) and becomes ready
/// once constructed from records or loaded from a summary artifact. Searching
/// an unbuilt index yields [`MarkhiveError::NotReady`] so callers can tell
/// "no data loaded" apart from "no matches" — a built index over zero records
/// is ready and simply returns no results.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    records: Option<Vec<NoteRecord>>,
}

impl SearchIndex {
    /// An index that has not been built. Every search returns `NotReady`.
    pub fn empty() -> Self {
        Self { records: None }
    }

    /// Build an index over a record sequence. Record order is preserved in
    /// all search results.
    pub fn build(records: Vec<NoteRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    /// Build an index from a summary artifact on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::build(crate::summary::read(path)?))
    }

    pub fn is_ready(&self) -> bool {
        self.records.is_some()
    }

    /// Number of indexed records; zero when unbuilt.
    pub fn len(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run a query against the index.
    ///
    /// Returns the matching records in index order. A pure read: no side
    /// effects, no result cap, identical output for identical input.
    pub fn search(&self, query: &Query) -> Result<Vec<&NoteRecord>> {
        let records = self.records.as_ref().ok_or(MarkhiveError::NotReady)?;
        match query {
            Query::All => Ok(records.iter().collect()),
            Query::Term(term) => {
                let needle = term.to_lowercase();
                Ok(records
                    .iter()
                    .filter(|record| record_matches(record, &needle))
                    .collect())
            }
        }
    }
}

/// True when `needle` (already lowercased) occurs in the title, any single
/// tag, or the content.
fn record_matches(record: &NoteRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
        || record.content.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<NoteRecord> {
        vec![
            NoteRecord::new(
                "a.html",
                "Shopping List",
                vec!["home".to_string()],
                "milk eggs",
            ),
            NoteRecord::new(
                "b.html",
                "Trip Plan",
                vec!["travel".to_string()],
                "flights hotels",
            ),
        ]
    }

    fn files(results: &[&NoteRecord]) -> Vec<String> {
        results.iter().map(|r| r.file.clone()).collect()
    }

    #[test]
    fn tag_match_returns_only_that_record() {
        let index = SearchIndex::build(sample_records());
        let results = index.search(&Query::from_term("travel")).unwrap();
        assert_eq!(files(&results), vec!["b.html"]);
    }

    #[test]
    fn wildcard_returns_all_in_order() {
        let index = SearchIndex::build(sample_records());
        let results = index.search(&Query::from_term("*")).unwrap();
        assert_eq!(files(&results), vec!["a.html", "b.html"]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let index = SearchIndex::build(sample_records());
        let results = index.search(&Query::from_term("xyz")).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn title_and_content_fields_both_match() {
        let index = SearchIndex::build(sample_records());
        let by_title = index.search(&Query::from_term("Shopping")).unwrap();
        assert_eq!(files(&by_title), vec!["a.html"]);
        let by_content = index.search(&Query::from_term("flights")).unwrap();
        assert_eq!(files(&by_content), vec!["b.html"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let index = SearchIndex::build(sample_records());
        let results = index.search(&Query::from_term("TRIP")).unwrap();
        assert_eq!(files(&results), vec!["b.html"]);
    }

    #[test]
    fn record_without_tags_still_matches_via_content() {
        let records = vec![NoteRecord::new("c.html", "Untitled", vec![], "needle here")];
        let index = SearchIndex::build(records);
        let results = index.search(&Query::from_term("needle")).unwrap();
        assert_eq!(files(&results), vec!["c.html"]);
    }

    #[test]
    fn empty_string_normalizes_to_wildcard() {
        assert_eq!(Query::from_term(""), Query::All);
        let index = SearchIndex::build(sample_records());
        let results = index.search(&Query::parse(b"").unwrap()).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn whitespace_query_is_literal_not_wildcard() {
        assert_eq!(Query::from_term(" "), Query::Term(" ".to_string()));
        let index = SearchIndex::build(sample_records());
        // "Shopping List" and "Trip Plan" both contain a space in the title.
        let results = index.search(&Query::from_term(" ")).unwrap();
        assert_eq!(results.len(), 2);

        let records = vec![NoteRecord::new("d.html", "one-word", vec![], "nospace")];
        let index = SearchIndex::build(records);
        assert!(index.search(&Query::from_term(" ")).unwrap().is_empty());
    }

    #[test]
    fn wildcard_on_empty_index_returns_empty() {
        let index = SearchIndex::build(Vec::new());
        assert!(index.search(&Query::All).unwrap().is_empty());
        assert!(index.search(&Query::from_term("anything")).unwrap().is_empty());
    }

    #[test]
    fn unbuilt_index_is_not_ready() {
        let index = SearchIndex::empty();
        assert!(!index.is_ready());
        let err = index.search(&Query::All).unwrap_err();
        assert!(matches!(err, MarkhiveError::NotReady));
    }

    #[test]
    fn invalid_utf8_query_is_rejected() {
        let err = Query::parse(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, MarkhiveError::InvalidQuery));
    }

    #[test]
    fn search_is_idempotent() {
        let index = SearchIndex::build(sample_records());
        let query = Query::from_term("o");
        let first = files(&index.search(&query).unwrap());
        let second = files(&index.search(&query).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_matches_across_fields_appear_once() {
        // "home" appears in both a tag and nowhere else; a term hitting
        // several fields of one record must not duplicate that record.
        let records = vec![NoteRecord::new(
            "e.html",
            "home office",
            vec!["home".to_string()],
            "working from home",
        )];
        let index = SearchIndex::build(records);
        let results = index.search(&Query::from_term("home")).unwrap();
        assert_eq!(results.len(), 1);
    }
}
