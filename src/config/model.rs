//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Configuration for `git-feat` and `git-pr`.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote that is fetched from and pushed to (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch that feature branches start from and pull requests target
    /// (default: "master").
    #[serde(default = "default_trunk_branch")]
    pub trunk_branch: String,

    /// Branches `git-pr` refuses to publish from (default: master, main).
    #[serde(default = "default_protected_branches")]
    pub protected_branches: Vec<String>,

    /// Open the pull request in a browser (`gh pr view --web`) instead of
    /// printing it in the terminal.
    #[serde(default = "default_true")]
    pub open_in_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            trunk_branch: default_trunk_branch(),
            protected_branches: default_protected_branches(),
            open_in_browser: default_true(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_trunk_branch() -> String {
    "master".to_string()
}

fn default_protected_branches() -> Vec<String> {
    vec!["master".to_string(), "main".to_string()]
}

fn default_true() -> bool {
    true
}
