//! Config loading, discovery, validation, and utility operations.

use super::model::Config;
use crate::error::{GitshipError, Result};
use crate::exec::ProcessEnv;
use crate::git::upstream_ref;
use std::path::Path;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GITSHIP_CONFIG";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".gitship.yaml";

impl Config {
    /// Find and load the configuration for a run.
    ///
    /// Lookup order:
    /// 1. The file named by `GITSHIP_CONFIG` in `env` (must exist)
    /// 2. `.gitship.yaml` in `cwd`, if present
    /// 3. Built-in defaults
    pub fn discover<P: AsRef<Path>>(env: &ProcessEnv, cwd: P) -> Result<Self> {
        if let Some(explicit) = env.get(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            debug!(path = explicit, "loading config from {}", CONFIG_ENV_VAR);
            return Self::load(explicit);
        }

        let local = cwd.as_ref().join(CONFIG_FILE_NAME);
        if local.is_file() {
            debug!(path = %local.display(), "loading config");
            return Self::load(&local);
        }

        Ok(Self::default())
    }

    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GitshipError::Config)` - Unreadable file, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GitshipError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GitshipError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `remote` and `trunk_branch` must be non-empty and contain no whitespace
    /// - `protected_branches` entries must be non-empty
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [("remote", &self.remote), ("trunk_branch", &self.trunk_branch)] {
            if value.trim().is_empty() {
                return Err(GitshipError::Config(format!("{} must not be empty", key)));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(GitshipError::Config(format!(
                    "{} must not contain whitespace (found '{}')",
                    key, value
                )));
            }
        }

        if self.protected_branches.iter().any(|b| b.trim().is_empty()) {
            return Err(GitshipError::Config(
                "protected_branches entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The remote-tracking ref of the trunk branch, e.g. `origin/master`.
    pub fn upstream(&self) -> String {
        upstream_ref(&self.remote, &self.trunk_branch)
    }

    /// Whether publishing from `branch` is refused.
    pub fn is_protected(&self, branch: &str) -> bool {
        self.protected_branches.iter().any(|b| b == branch)
    }
}
