//! Commit history queries.

use super::Git;
use crate::error::{GitshipError, Result};

/// Parse the output of `git rev-list --count`.
pub fn parse_ahead_count(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| GitshipError::ParseError(raw.to_string()))
}

impl Git<'_> {
    /// Number of commits reachable from `HEAD` but not from `base_ref`.
    pub fn ahead_count(&self, base_ref: &str) -> Result<u64> {
        let output = self.run(&["rev-list", "--count", &format!("{}..HEAD", base_ref)])?;
        parse_ahead_count(&output.stdout)
    }

    /// Subject line of the most recent commit.
    pub fn head_commit_subject(&self) -> Result<String> {
        let output = self.run(&["log", "-1", "--pretty=%s"])?;
        Ok(output.stdout)
    }
}
