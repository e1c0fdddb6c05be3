use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::branch::BranchType;
use crate::models::CommitRecord;

/// Position and color of one visible commit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode<'a> {
    pub commit: &'a CommitRecord,
    pub x: f32,
    pub y: f32,
    /// Index in the filtered, date-descending sequence
    pub row: usize,
    /// Column of the commit's primary branch
    pub column: usize,
    pub color: &'static str,
}

/// Parent connection to draw, from a commit (`source_sha`) to one of its
/// parents (`target_sha`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source_sha: String,
    pub target_sha: String,
    /// Rendering hint taken from the commit's own parent list.
    pub is_merge: bool,
    /// Synthesized link rather than a real parent.
    pub is_virtual: bool,
}

/// Legend entry for one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchMeta {
    pub name: String,
    pub column: usize,
    #[serde(rename = "type")]
    pub branch_type: BranchType,
    pub color: String,
    pub priority: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub sha: String,
    pub x: f32,
    pub y: f32,
    pub row: usize,
    pub column: usize,
    pub color: String,
}

/// Owned copy of a built graph, detached from the input commits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<GraphEdge>,
    pub branches: Vec<BranchMeta>,
    pub virtual_parents: BTreeMap<String, String>,
}

impl<'a> From<&GraphNode<'a>> for NodeSnapshot {
    fn from(node: &GraphNode<'a>) -> Self {
        NodeSnapshot {
            sha: node.commit.sha.clone(),
            x: node.x,
            y: node.y,
            row: node.row,
            column: node.column,
            color: node.color.to_string(),
        }
    }
}

impl GraphSnapshot {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, sha: &str) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|n| n.sha == sha)
    }
}
