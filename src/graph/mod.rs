pub mod branch;
pub mod color;
pub mod columns;
pub mod filter;
pub mod layout;
pub mod validate;
pub mod virtual_parents;

pub use branch::{BranchStyle, BranchType, ColorRole};
pub use color::{branch_color, ColorMode};
pub use columns::ColumnMap;
pub use filter::CommitFilter;
pub use layout::{build_graph, CommitGraph, GraphBuilder};
pub use validate::validate_commits;
pub use virtual_parents::{resolve_virtual_parents, BranchGroups, CommitIndex, VirtualParents};
