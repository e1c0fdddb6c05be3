//! Synthesized parent links for commits whose real history is cut off.
//!
//! Two passes run over the branch groups:
//!
//! 1. Inside a branch, a commit with no visible parent is linked to the next
//!    older commit on the same branch.
//! 2. The oldest visible commit of a branch, if still unlinked, is linked to
//!    its fork point: the nearest preceding commit on the branch it was
//!    conventionally created from (see [`BranchType::source_branch`]).
//!
//! Every link points to a commit that is strictly older in the chronological
//! order `(date, row)`, so the links can never form a cycle.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

use crate::graph::branch::{source_alias, BranchType};
use crate::graph::filter::sort_newest_first;
use crate::models::CommitRecord;

/// Commit sha to synthesized parent sha.
pub type VirtualParents<'a> = BTreeMap<&'a str, &'a str>;

/// Row index of every visible commit, keyed by sha.
pub type CommitIndex<'a> = HashMap<&'a str, usize>;

/// Commits grouped by every branch they belong to, newest first.
#[derive(Debug, Default)]
pub struct BranchGroups<'a> {
    groups: Vec<(&'a str, Vec<&'a CommitRecord>)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> BranchGroups<'a> {
    /// Groups follow the first-seen order of their branch name.
    pub fn from_sorted(sorted: &[&'a CommitRecord]) -> Self {
        let mut groups = BranchGroups::default();

        for &commit in sorted {
            for branch in &commit.branch {
                let slot = match groups.index.get(branch.as_str()) {
                    Some(&slot) => slot,
                    None => {
                        groups.groups.push((branch.as_str(), Vec::new()));
                        groups.index.insert(branch.as_str(), groups.groups.len() - 1);
                        groups.groups.len() - 1
                    }
                };

                let members = &mut groups.groups[slot].1;
                // A branch listed twice on one commit must not link it to itself
                if members.last().map(|c| c.sha == commit.sha) != Some(true) {
                    members.push(commit);
                }
            }
        }

        for (_, members) in &mut groups.groups {
            sort_newest_first(members);
        }

        groups
    }

    pub fn get(&self, branch: &str) -> &[&'a CommitRecord] {
        self.index
            .get(branch)
            .map(|&slot| self.groups[slot].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a CommitRecord])> + '_ {
        self.groups
            .iter()
            .map(|(name, members)| (*name, members.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Whether any real parent of `commit` is visible.
pub fn has_visible_parent(commit: &CommitRecord, index: &CommitIndex<'_>) -> bool {
    commit
        .parents
        .iter()
        .any(|parent| index.contains_key(parent.as_str()))
}

/// `candidate` is strictly older than `commit`: an earlier date, or the same
/// date and a later row.
fn precedes(candidate: &CommitRecord, commit: &CommitRecord, index: &CommitIndex<'_>) -> bool {
    match candidate.date.cmp(&commit.date) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => {
            match (index.get(candidate.sha.as_str()), index.get(commit.sha.as_str())) {
                (Some(candidate_row), Some(commit_row)) => candidate_row > commit_row,
                _ => false,
            }
        }
    }
}

/// Commits of the branch `branch_name` is forked from, honouring the
/// `main`/`master` and `develop`/`development` aliases.
fn source_commits<'g, 'a>(
    groups: &'g BranchGroups<'a>,
    branch_name: &str,
) -> Option<&'g [&'a CommitRecord]> {
    let source = BranchType::classify(branch_name).source_branch()?;
    let commits = groups.get(source);
    if !commits.is_empty() {
        return Some(commits);
    }
    let alias = source_alias(source)?;
    let commits = groups.get(alias);
    (!commits.is_empty()).then_some(commits)
}

/// Nearest commit in `source` that precedes `commit`.
pub fn find_fork_point<'a>(
    source: &[&'a CommitRecord],
    commit: &CommitRecord,
    index: &CommitIndex<'_>,
) -> Option<&'a CommitRecord> {
    source
        .iter()
        .copied()
        .find(|candidate| precedes(candidate, commit, index))
}

/// Build the virtual parent map for a filtered, newest-first sequence.
///
/// `index` is the visible commit lookup; parents outside it do not count.
pub fn resolve_virtual_parents<'a>(
    sorted: &[&'a CommitRecord],
    index: &CommitIndex<'a>,
) -> VirtualParents<'a> {
    let groups = BranchGroups::from_sorted(sorted);
    let mut virtual_parents = VirtualParents::new();

    // Same-branch links
    for (branch, members) in groups.iter() {
        for pair in members.windows(2) {
            let (newer, older) = (pair[0], pair[1]);
            if has_visible_parent(newer, index) || virtual_parents.contains_key(newer.sha.as_str()) {
                continue;
            }
            if precedes(older, newer, index) {
                trace!("{}: linking {} -> {}", branch, newer.short_sha(), older.short_sha());
                virtual_parents.insert(newer.sha.as_str(), older.sha.as_str());
            }
        }
    }

    // Fork points
    for (branch, members) in groups.iter() {
        let Some(&oldest) = members.last() else {
            continue;
        };
        if BranchType::classify(branch).source_branch().is_none() {
            continue;
        }
        if has_visible_parent(oldest, index) || virtual_parents.contains_key(oldest.sha.as_str()) {
            continue;
        }

        let fork_point = source_commits(&groups, branch)
            .and_then(|source| find_fork_point(source, oldest, index))
            .filter(|fork| index.contains_key(fork.sha.as_str()));

        match fork_point {
            Some(fork) => {
                trace!("{}: fork point {} -> {}", branch, oldest.short_sha(), fork.short_sha());
                virtual_parents.insert(oldest.sha.as_str(), fork.sha.as_str());
            }
            None => trace!("{}: no fork point for {}", branch, oldest.short_sha()),
        }
    }

    debug!(
        "Resolved {} virtual parents across {} branches",
        virtual_parents.len(),
        groups.len()
    );

    virtual_parents
}
