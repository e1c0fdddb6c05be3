use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use tracing::debug;

use crate::error::Result;
use crate::graph::layout::GraphBuilder;
use crate::models::{CommitRecord, GraphSnapshot};
use crate::state::config::GraphConfig;

/// Remembers recently built graphs so unchanged inputs skip the rebuild.
#[derive(Debug)]
pub struct LayoutCache {
    entries: VecDeque<(u64, GraphSnapshot)>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the snapshot for these inputs, building it on a miss.
    pub fn get_or_build(
        &mut self,
        builder: &GraphBuilder,
        commits: &[CommitRecord],
    ) -> Result<&GraphSnapshot> {
        let key = fingerprint(builder, commits);

        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.hits += 1;
            debug!("Layout cache hit for {:x}", key);
            return Ok(&self.entries[pos].1);
        }

        self.misses += 1;
        let snapshot = builder.build(commits)?.snapshot();

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((key, snapshot));
        debug!("Layout cache miss for {:x}, {} entries", key, self.entries.len());

        Ok(&self.entries[self.entries.len() - 1].1)
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.cache_capacity)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}

/// Hash of every input the graph depends on.
pub fn fingerprint(builder: &GraphBuilder, commits: &[CommitRecord]) -> u64 {
    let mut hasher = DefaultHasher::new();

    commits.len().hash(&mut hasher);
    for commit in commits {
        commit.sha.hash(&mut hasher);
        commit.parents.hash(&mut hasher);
        commit.branch.hash(&mut hasher);
        commit.author.name.hash(&mut hasher);
        commit.author.email.hash(&mut hasher);
        commit.date.hash(&mut hasher);
    }

    builder.commit_filter().hash(&mut hasher);
    builder.color_mode().hash(&mut hasher);

    let layout = builder.layout_settings();
    for value in [
        layout.column_width,
        layout.column_offset,
        layout.row_height,
        layout.row_offset,
    ] {
        value.to_bits().hash(&mut hasher);
    }

    hasher.finish()
}
