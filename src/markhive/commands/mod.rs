use crate::model::NoteRecord;
use std::path::PathBuf;

pub mod build;
pub mod export;
pub mod search;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, rendered by the binary.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records produced (build) or matched (search), in index order.
    pub records: Vec<NoteRecord>,
    /// Files the command wrote.
    pub written_files: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<NoteRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_written_files(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_files = paths;
        self
    }
}
