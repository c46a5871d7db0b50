use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkhiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Front matter error: {0}")]
    FrontMatter(String),

    /// The query could not be interpreted as a string.
    #[error("Invalid query: not valid UTF-8")]
    InvalidQuery,

    /// The search index has not been built yet. Distinct from a built index
    /// with zero records or zero matches.
    #[error("Search index is not ready")]
    NotReady,

    #[error("Build error: {0}")]
    Build(String),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, MarkhiveError>;
