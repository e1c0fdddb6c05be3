use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Branch bucket used for commits that declare no branch at all.
pub const UNKNOWN_BRANCH: &str = "unknown";

/// A commit as supplied by the fetch layer. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    #[serde(default)]
    pub parents: Vec<String>,
    /// Branch affiliations; the first entry is the primary branch.
    #[serde(default)]
    pub branch: Vec<String>,
    pub author: CommitAuthor,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Wire form of a commit, with the date still a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommitRecord {
    pub sha: String,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub branch: Vec<String>,
    pub author: CommitAuthor,
    pub date: String,
    #[serde(default)]
    pub message: String,
}

impl CommitRecord {
    /// The branch used for column and color assignment.
    pub fn primary_branch(&self) -> &str {
        self.branch
            .first()
            .map(|b| b.as_str())
            .unwrap_or(UNKNOWN_BRANCH)
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn short_sha(&self) -> &str {
        let end = self
            .sha
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.sha.len());
        &self.sha[..end]
    }
}

impl CommitAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url: None,
        }
    }
}

/// Parse a commit timestamp. RFC 3339 is preferred; a bare
/// `YYYY-MM-DDTHH:MM:SS` is read as UTC.
pub fn parse_commit_date(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(date) => Ok(date.with_timezone(&Utc)),
        Err(rfc_err) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_err),
    }
}

impl TryFrom<RawCommitRecord> for CommitRecord {
    type Error = GraphError;

    fn try_from(raw: RawCommitRecord) -> Result<Self, Self::Error> {
        let date = parse_commit_date(&raw.date)
            .map_err(|e| GraphError::invalid_date(&raw.sha, &raw.date, e.to_string()))?;

        Ok(CommitRecord {
            sha: raw.sha,
            parents: raw.parents,
            branch: raw.branch,
            author: raw.author,
            date,
            message: raw.message,
        })
    }
}
