//! # commit-graph
//!
//! Turns a flat, possibly incomplete list of commit records into a drawable
//! commit graph: one node per commit with column/row coordinates, a
//! deterministic branch color, and an edge list that includes synthesized
//! ("virtual") parent links wherever real parent information is missing from
//! the visible commit set.
//!
//! ## Architecture
//!
//! The library is organized into several main modules:
//! - [`models`] - Commit records and graph output types
//! - [`graph`] - Branch classification, coloring, filtering, column assignment,
//!   virtual parent resolution and graph assembly
//! - [`state`] - Configuration and layout caching
//! - [`error`] - Error types for the input boundary
//!
//! ## Pipeline
//!
//! 1. **Filter & sort**: optional branch/author substring filters, newest first
//! 2. **Columns**: one column per primary branch, in first-seen order
//! 3. **Virtual parents**: same-branch links and fork points on the source branch
//! 4. **Assembly**: nodes, edges and the branch legend
//!
//! The whole pipeline is a pure function of its inputs and is rebuilt from
//! scratch whenever they change.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use commit_graph::graph::{build_graph, CommitFilter};
//! use commit_graph::models::{CommitAuthor, CommitRecord};
//!
//! # fn main() -> anyhow::Result<()> {
//! let commits = vec![
//!     CommitRecord {
//!         sha: "b2".into(),
//!         parents: vec!["a1".into()],
//!         branch: vec!["main".into()],
//!         author: CommitAuthor::new("Ada", "ada@example.com"),
//!         date: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
//!         message: "Second".into(),
//!     },
//!     CommitRecord {
//!         sha: "a1".into(),
//!         parents: vec![],
//!         branch: vec!["main".into()],
//!         author: CommitAuthor::new("Ada", "ada@example.com"),
//!         date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!         message: "First".into(),
//!     },
//! ];
//!
//! let graph = build_graph(&commits, &CommitFilter::default(), false)?;
//! assert_eq!(graph.nodes.len(), 2);
//! assert_eq!(graph.edges.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod models;
pub mod state;

pub use error::{GraphError, Result};
pub use graph::{build_graph, CommitGraph, GraphBuilder};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
