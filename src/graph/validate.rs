use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::models::CommitRecord;

/// Boundary check run before building a graph.
///
/// Shas must be non-empty and unique. Dates are already typed, so an
/// unparsable timestamp is rejected earlier when converting a
/// [`RawCommitRecord`](crate::models::RawCommitRecord).
pub fn validate_commits(commits: &[CommitRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(commits.len());

    for (index, commit) in commits.iter().enumerate() {
        if commit.sha.trim().is_empty() {
            return Err(GraphError::EmptySha { index });
        }
        if !seen.insert(commit.sha.as_str()) {
            return Err(GraphError::duplicate_sha(&commit.sha));
        }
    }

    Ok(())
}
