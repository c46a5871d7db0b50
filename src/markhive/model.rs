use serde::{Deserialize, Serialize};

/// The indexed representation of one markdown note.
///
/// This is exactly the shape stored in the summary artifact:
/// `{file, title, tags, content}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Filename of the rendered HTML output (`<stem>.html`), unique within a
    /// build. Clients use this as the key to request the rendered document.
    pub file: String,
    /// Display title. Falls back to the source filename stem when the front
    /// matter does not supply one.
    pub title: String,
    /// Front-matter tags, order preserved, duplicates permitted, may be empty.
    pub tags: Vec<String>,
    /// Plain-text body with markdown syntax and front-matter delimiters
    /// stripped.
    pub content: String,
}

impl NoteRecord {
    pub fn new(
        file: impl Into<String>,
        title: impl Into<String>,
        tags: Vec<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            title: title.into(),
            tags,
            content: content.into(),
        }
    }
}
