use thiserror::Error;
use tracing::warn;

/// Errors raised at the boundary of the graph engine.
///
/// The engine itself is total over validated input: a branch whose fork point
/// cannot be found is not an error, it is simply left unconnected.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Duplicate commit sha: {sha}")]
    DuplicateSha { sha: String },

    #[error("Commit at position {index} has an empty sha")]
    EmptySha { index: usize },

    #[error("Invalid date for commit {sha}: '{value}' - {reason}")]
    InvalidDate {
        sha: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {setting} - {reason}")]
    Configuration { setting: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GraphError {
    pub fn duplicate_sha(sha: impl Into<String>) -> Self {
        let sha = sha.into();
        warn!("Duplicate commit sha in input: {}", sha);
        GraphError::DuplicateSha { sha }
    }

    pub fn invalid_date(
        sha: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let sha = sha.into();
        let value = value.into();
        let reason = reason.into();
        warn!("Unparsable date '{}' on commit {}: {}", value, sha, reason);
        GraphError::InvalidDate { sha, value, reason }
    }

    pub fn configuration(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        let setting = setting.into();
        let reason = reason.into();
        warn!("Invalid configuration '{}': {}", setting, reason);
        GraphError::Configuration { setting, reason }
    }

    /// Whether the caller can fix the problem by correcting its input.
    pub fn is_input_error(&self) -> bool {
        match self {
            GraphError::DuplicateSha { .. } => true,
            GraphError::EmptySha { .. } => true,
            GraphError::InvalidDate { .. } => true,
            GraphError::Configuration { .. } => true,
            GraphError::Io(_) => false,
            GraphError::Serialization(_) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
