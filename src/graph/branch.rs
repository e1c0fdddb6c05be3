use serde::{Deserialize, Serialize};

/// Classification of branch names following a trunk + develop convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchType {
    Main,
    Develop,
    Feature,
    Hotfix,
    Bugfix,
    Release,
    Other,
}

/// Which color source a branch type draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// Fixed trunk color
    Trunk,
    /// Fixed integration-branch color
    Integration,
    /// Hash-selected palette slot
    Palette,
}

/// Per-type presentation data shared by the engine and the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchStyle {
    pub color_role: ColorRole,
    pub priority: u8,
    /// Relative stroke weight for lines on this branch
    pub display_weight: f32,
}

impl BranchType {
    /// Classify a branch by name. Case-insensitive, first match wins.
    pub fn classify(branch_name: &str) -> BranchType {
        let name_lower = branch_name.to_lowercase();

        if name_lower == "main" || name_lower == "master" {
            return BranchType::Main;
        }

        if name_lower == "develop" || name_lower == "development" {
            return BranchType::Develop;
        }

        if name_lower.starts_with("feature/") || name_lower.starts_with("feat/") {
            return BranchType::Feature;
        }

        if name_lower.starts_with("hotfix/") {
            return BranchType::Hotfix;
        }

        if name_lower.starts_with("bugfix/") || name_lower.starts_with("fix/") {
            return BranchType::Bugfix;
        }

        if name_lower.starts_with("release/") {
            return BranchType::Release;
        }

        BranchType::Other
    }

    /// Conventional branch this type is forked from. `None` for the trunk.
    pub fn source_branch(self) -> Option<&'static str> {
        match self {
            BranchType::Main => None,
            BranchType::Develop => Some("main"),
            BranchType::Feature | BranchType::Bugfix | BranchType::Release => Some("develop"),
            BranchType::Hotfix => Some("main"),
            BranchType::Other => Some("main"),
        }
    }

    /// Display rank; lower sorts first in the legend.
    pub fn priority(self) -> u8 {
        self.style().priority
    }

    pub fn style(self) -> BranchStyle {
        let (color_role, priority, display_weight) = match self {
            BranchType::Main => (ColorRole::Trunk, 0, 3.0),
            BranchType::Develop => (ColorRole::Integration, 1, 2.5),
            BranchType::Release => (ColorRole::Palette, 2, 2.0),
            BranchType::Hotfix => (ColorRole::Palette, 3, 2.0),
            BranchType::Bugfix => (ColorRole::Palette, 4, 1.5),
            BranchType::Feature => (ColorRole::Palette, 5, 1.5),
            BranchType::Other => (ColorRole::Palette, 6, 1.5),
        };

        BranchStyle {
            color_role,
            priority,
            display_weight,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BranchType::Main => "main",
            BranchType::Develop => "develop",
            BranchType::Feature => "feature",
            BranchType::Hotfix => "hotfix",
            BranchType::Bugfix => "bugfix",
            BranchType::Release => "release",
            BranchType::Other => "other",
        }
    }
}

impl std::fmt::Display for BranchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alternate name tried when a source branch group is empty.
///
/// Only consulted by the fork-point search.
pub fn source_alias(source: &str) -> Option<&'static str> {
    match source {
        "main" => Some("master"),
        "develop" => Some("development"),
        _ => None,
    }
}
