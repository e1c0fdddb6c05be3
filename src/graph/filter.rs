use serde::{Deserialize, Serialize};

use crate::models::CommitRecord;

/// Optional substring filters applied before layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitFilter {
    /// Matched against any of the commit's branches
    pub branch: Option<String>,
    /// Matched against author name or email
    pub author: Option<String>,
}

impl CommitFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        active(&self.branch).is_none() && active(&self.author).is_none()
    }

    /// Check if a commit passes both filters
    pub fn matches(&self, commit: &CommitRecord) -> bool {
        if let Some(branch_filter) = active(&self.branch) {
            if !commit
                .branch
                .iter()
                .any(|branch| text_matches(branch, branch_filter))
            {
                return false;
            }
        }

        if let Some(author_filter) = active(&self.author) {
            if !text_matches(&commit.author.name, author_filter)
                && !text_matches(&commit.author.email, author_filter)
            {
                return false;
            }
        }

        true
    }

    /// Filter and sort newest first. The input slice is left untouched.
    pub fn apply<'a>(&self, commits: &'a [CommitRecord]) -> Vec<&'a CommitRecord> {
        let mut visible: Vec<&CommitRecord> =
            commits.iter().filter(|c| self.matches(c)).collect();
        sort_newest_first(&mut visible);
        visible
    }
}

/// Stable sort by date descending; equal dates keep input order.
pub fn sort_newest_first(commits: &mut [&CommitRecord]) {
    commits.sort_by(|a, b| b.date.cmp(&a.date));
}

fn active(filter: &Option<String>) -> Option<&str> {
    filter
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
}

fn text_matches(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.to_lowercase())
}
