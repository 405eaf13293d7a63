//! Remote operations: fetching the upstream branch and pushing.

use super::Git;
use crate::error::{GitshipError, Result};

/// The remote-tracking ref for `branch` on `remote` (e.g. `origin/master`).
pub fn upstream_ref(remote: &str, branch: &str) -> String {
    format!("{}/{}", remote, branch)
}

impl Git<'_> {
    /// Fetch `branch` from `remote` and check that its tracking ref resolves.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The tracking ref, ready to use as a start point or range base
    /// * `Err(GitshipError::CommandFailed)` - The fetch itself failed
    /// * `Err(GitshipError::UpstreamNotFound)` - The ref does not resolve after fetching
    pub fn ensure_upstream_branch(&self, remote: &str, branch: &str) -> Result<String> {
        self.run(&["fetch", remote, branch])?;

        let remote_ref = upstream_ref(remote, branch);
        let verify = self.run_allow_failure(&["rev-parse", "--verify", &remote_ref])?;
        if !verify.success() {
            return Err(GitshipError::UpstreamNotFound(remote_ref));
        }

        Ok(remote_ref)
    }

    /// Push the checked-out branch to `remote` and set it as the upstream.
    pub fn push_with_upstream(&self, remote: &str) -> Result<()> {
        self.run(&["push", "-u", remote, "HEAD"])?;
        Ok(())
    }
}
