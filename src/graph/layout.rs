use std::collections::HashMap;
use tracing::debug;

use crate::error::Result;
use crate::graph::branch::BranchType;
use crate::graph::color::{branch_color, ColorMode};
use crate::graph::columns::ColumnMap;
use crate::graph::filter::CommitFilter;
use crate::graph::validate::validate_commits;
use crate::graph::virtual_parents::{has_visible_parent, resolve_virtual_parents, CommitIndex, VirtualParents};
use crate::models::{BranchMeta, CommitRecord, GraphEdge, GraphNode, GraphSnapshot, NodeSnapshot};
use crate::state::config::{GraphConfig, LayoutSettings};

/// A drawable commit graph. Nodes borrow the commits they were built from.
#[derive(Debug, Clone)]
pub struct CommitGraph<'a> {
    /// Visible commits, newest first
    pub nodes: Vec<GraphNode<'a>>,
    pub edges: Vec<GraphEdge>,
    /// Legend entries ordered by priority then name
    pub branches: Vec<BranchMeta>,
    pub virtual_parents: VirtualParents<'a>,
    pub columns: ColumnMap<'a>,
    index: CommitIndex<'a>,
}

impl<'a> CommitGraph<'a> {
    pub fn node(&self, sha: &str) -> Option<&GraphNode<'a>> {
        self.index.get(sha).map(|&row| &self.nodes[row])
    }

    pub fn contains(&self, sha: &str) -> bool {
        self.index.contains_key(sha)
    }

    pub fn commit_index(&self) -> &CommitIndex<'a> {
        &self.index
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parents to draw for `commit`: the visible real parents, or failing
    /// that its virtual parent.
    pub fn rendered_parents<'c>(&'c self, commit: &'c CommitRecord) -> Vec<&'c str> {
        select_parents(commit, &self.index, &self.virtual_parents)
    }

    /// Commits with neither a visible real parent nor a virtual one.
    pub fn roots(&self) -> impl Iterator<Item = &GraphNode<'a>> + '_ {
        self.nodes
            .iter()
            .filter(|node| self.rendered_parents(node.commit).is_empty())
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.iter().map(NodeSnapshot::from).collect(),
            edges: self.edges.clone(),
            branches: self.branches.clone(),
            virtual_parents: self
                .virtual_parents
                .iter()
                .map(|(child, parent)| (child.to_string(), parent.to_string()))
                .collect(),
        }
    }
}

fn select_parents<'c>(
    commit: &'c CommitRecord,
    index: &CommitIndex<'_>,
    virtual_parents: &VirtualParents<'c>,
) -> Vec<&'c str> {
    if has_visible_parent(commit, index) {
        return commit
            .parents
            .iter()
            .map(|p| p.as_str())
            .filter(|p| index.contains_key(p))
            .collect();
    }

    virtual_parents
        .get(commit.sha.as_str())
        .copied()
        .into_iter()
        .collect()
}

/// Builds [`CommitGraph`]s from commit lists.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    layout: LayoutSettings,
    mode: ColorMode,
    filter: CommitFilter,
}

impl GraphBuilder {
    pub fn new(layout: LayoutSettings) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self {
            layout: config.layout.clone(),
            mode: config.theme.into(),
            filter: config.default_filter.clone(),
        }
    }

    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn filter(mut self, filter: CommitFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn layout_settings(&self) -> &LayoutSettings {
        &self.layout
    }

    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub fn commit_filter(&self) -> &CommitFilter {
        &self.filter
    }

    /// Validate, filter, sort and lay out `commits`.
    pub fn build<'a>(&self, commits: &'a [CommitRecord]) -> Result<CommitGraph<'a>> {
        self.layout.validate()?;
        validate_commits(commits)?;

        let sorted = self.filter.apply(commits);
        let columns = ColumnMap::assign(&sorted);

        // One color per branch, shared by its nodes and its legend entry
        let colors: HashMap<&str, &'static str> = columns
            .iter()
            .map(|(name, _)| (name, branch_color(name, self.mode)))
            .collect();

        let index: CommitIndex<'a> = sorted
            .iter()
            .enumerate()
            .map(|(row, commit)| (commit.sha.as_str(), row))
            .collect();

        let nodes: Vec<GraphNode<'a>> = sorted
            .iter()
            .enumerate()
            .map(|(row, &commit)| {
                let branch = commit.primary_branch();
                let column = columns.column_of(branch).unwrap_or(0);
                GraphNode {
                    commit,
                    x: column as f32 * self.layout.column_width + self.layout.column_offset,
                    y: row as f32 * self.layout.row_height + self.layout.row_offset,
                    row,
                    column,
                    color: colors.get(branch).copied().unwrap_or_else(|| branch_color(branch, self.mode)),
                }
            })
            .collect();

        let virtual_parents = resolve_virtual_parents(&sorted, &index);

        let edges: Vec<GraphEdge> = nodes
            .iter()
            .flat_map(|node| {
                let commit = node.commit;
                let is_virtual = !has_visible_parent(commit, &index);
                select_parents(commit, &index, &virtual_parents)
                    .into_iter()
                    .map(move |parent| GraphEdge {
                        source_sha: commit.sha.clone(),
                        target_sha: parent.to_string(),
                        is_merge: commit.is_merge(),
                        is_virtual,
                    })
            })
            .collect();

        let mut branches: Vec<BranchMeta> = columns
            .iter()
            .map(|(name, column)| {
                let branch_type = BranchType::classify(name);
                BranchMeta {
                    name: name.to_string(),
                    column,
                    branch_type,
                    color: colors.get(name).copied().unwrap_or_default().to_string(),
                    priority: branch_type.priority(),
                }
            })
            .collect();
        branches.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));

        debug!(
            "Built commit graph: {} of {} commits visible, {} edges ({} virtual), {} branches",
            nodes.len(),
            commits.len(),
            edges.len(),
            virtual_parents.len(),
            branches.len()
        );

        Ok(CommitGraph {
            nodes,
            edges,
            branches,
            virtual_parents,
            columns,
            index,
        })
    }
}

/// Build a graph with default spacing.
pub fn build_graph<'a>(
    commits: &'a [CommitRecord],
    filter: &CommitFilter,
    dark_mode: bool,
) -> Result<CommitGraph<'a>> {
    GraphBuilder::default()
        .filter(filter.clone())
        .mode(ColorMode::from(dark_mode))
        .build(commits)
}
