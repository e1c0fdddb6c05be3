pub mod commit;
pub mod graph;

pub use commit::*;
pub use graph::*;
