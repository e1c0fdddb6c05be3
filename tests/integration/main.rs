//! Integration tests for commit-graph
//!
//! Exercises the full pipeline through the public API: the reference
//! scenarios, property tests over generated histories, and the CLI.

mod cli;

use chrono::{DateTime, TimeZone, Utc};
use commit_graph::models::{CommitAuthor, CommitRecord};

/// Test utilities for integration tests
pub mod test_utils {
    use super::*;

    pub fn at_minute(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap() + chrono::Duration::minutes(minute as i64)
    }

    /// Create a commit record on the given branches
    pub fn commit(sha: &str, branches: &[&str], parents: &[&str], minute: u32) -> CommitRecord {
        CommitRecord {
            sha: sha.to_string(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            branch: branches.iter().map(|b| b.to_string()).collect(),
            author: CommitAuthor::new("Test User", "test@example.com"),
            date: at_minute(minute),
            message: format!("Commit {sha}"),
        }
    }
}

/// Reference scenarios
#[cfg(test)]
mod scenario_tests {
    use super::test_utils::*;
    use commit_graph::graph::{branch_color, build_graph, BranchType, ColorMode, CommitFilter};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_linear_main_chain() -> anyhow::Result<()> {
        let commits = vec![
            commit("C3", &["main"], &["C2"], 3),
            commit("C2", &["main"], &["C1"], 2),
            commit("C1", &["main"], &[], 1),
        ];
        let graph = build_graph(&commits, &CommitFilter::default(), false)?;

        assert_eq!(graph.nodes.len(), 3);
        assert!(graph.nodes.iter().all(|n| n.column == 0));
        assert_eq!(graph.edges.len(), 2);
        assert!(graph.edges.iter().all(|e| !e.is_virtual && !e.is_merge));
        assert!(graph.virtual_parents.is_empty());
        Ok(())
    }

    #[test]
    fn test_feature_has_no_fallback_to_main() -> anyhow::Result<()> {
        let commits = vec![
            commit("F2", &["feature/x"], &["lost-1"], 30),
            commit("F1", &["feature/x"], &["lost-0"], 20),
            commit("M1", &["main"], &[], 10),
        ];
        let graph = build_graph(&commits, &CommitFilter::default(), false)?;

        assert_eq!(graph.virtual_parents.get("F2"), Some(&"F1"));
        assert_eq!(graph.virtual_parents.get("F1"), None);
        let roots: Vec<&str> = graph.roots().map(|n| n.commit.sha.as_str()).collect();
        assert_eq!(roots, vec!["F1", "M1"]);
        Ok(())
    }

    #[test]
    fn test_hotfix_forks_from_main() -> anyhow::Result<()> {
        let commits = vec![
            commit("H1", &["hotfix/login"], &["gone"], 25),
            commit("M3", &["main"], &["M2"], 30),
            commit("M2", &["main"], &["M1"], 20),
            commit("M1", &["main"], &[], 10),
        ];
        let graph = build_graph(&commits, &CommitFilter::default(), false)?;

        assert_eq!(graph.virtual_parents.get("H1"), Some(&"M2"));
        let edge = graph.edges.iter().find(|e| e.source_sha == "H1").unwrap();
        assert_eq!(edge.target_sha, "M2");
        assert!(edge.is_virtual);
        Ok(())
    }

    #[test]
    fn test_release_branch_classification() {
        let branch_type = BranchType::classify("Release/2.0");
        assert_eq!(branch_type, BranchType::Release);
        assert_eq!(branch_type.priority(), 2);
        assert_eq!(branch_type.source_branch(), Some("develop"));
    }

    #[test]
    fn test_case_asymmetry_between_type_and_color() {
        assert_eq!(BranchType::classify("foo"), BranchType::Other);
        assert_eq!(BranchType::classify("Foo"), BranchType::Other);
        assert_ne!(branch_color("foo", ColorMode::Light), branch_color("Foo", ColorMode::Light));
        assert_eq!(branch_color("main", ColorMode::Dark), branch_color("MAIN", ColorMode::Dark));
    }

    #[test]
    fn test_filter_change_reflows_layout() -> anyhow::Result<()> {
        let commits = vec![
            commit("F1", &["feature/x"], &["D1"], 30),
            commit("D1", &["develop"], &["M1"], 20),
            commit("M1", &["main"], &[], 10),
        ];

        let all = build_graph(&commits, &CommitFilter::default(), false)?;
        assert_eq!(all.node("M1").map(|n| (n.row, n.column)), Some((2, 2)));

        let only_main = build_graph(&commits, &CommitFilter::new().with_branch("main"), false)?;
        assert_eq!(only_main.node("M1").map(|n| (n.row, n.column)), Some((0, 0)));
        Ok(())
    }
}
