//! YAML front-matter extraction.
//!
//! A note file is split on `---` delimiters. With no delimiter the whole
//! file is the body; with a single delimiter the text after it is the body;
//! with two or more the first delimited segment is YAML metadata and the rest
//! is the body. The search index never sees the delimiters or the YAML.

use crate::error::{MarkhiveError, Result};

const DELIMITER: &str = "---";

/// Metadata recognized from the front-matter block. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub tags: Vec<String>,
}

/// The outcome of splitting a note file into metadata and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNote {
    /// Raw YAML text between the first pair of delimiters, if present.
    pub metadata: Option<String>,
    /// Markdown body with the front-matter block removed.
    pub body: String,
}

/// Split a note source into a front-matter block and a markdown body.
pub fn split(source: &str) -> SplitNote {
    let segments: Vec<&str> = source.split(DELIMITER).collect();
    match segments.len() {
        1 => SplitNote {
            metadata: None,
            body: segments[0].to_string(),
        },
        2 => SplitNote {
            metadata: None,
            body: segments[1].to_string(),
        },
        _ => SplitNote {
            metadata: Some(segments[1].to_string()),
            body: segments[2..].join(DELIMITER),
        },
    }
}

/// Parse a front-matter YAML block.
///
/// A `title` that is not a string, or `tags` that is not a sequence, falls
/// back to the defaults rather than failing the note. Malformed YAML is an
/// error; the builder reports it per-note and moves on.
pub fn parse(yaml: &str) -> Result<FrontMatter> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| MarkhiveError::FrontMatter(e.to_string()))?;

    let mut front_matter = FrontMatter::default();

    if let Some(title) = value.get("title").and_then(|v| v.as_str()) {
        front_matter.title = Some(title.to_string());
    }
    if let Some(tags) = value.get("tags").and_then(|v| v.as_sequence()) {
        front_matter.tags = tags
            .iter()
            .filter_map(|tag| tag.as_str().map(str::to_string))
            .collect();
    }

    Ok(front_matter)
}
