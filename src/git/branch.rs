//! Branch operations (current branch, existence, create, switch, delete).

use super::Git;
use crate::error::Result;

impl Git<'_> {
    /// Name of the checked-out branch (`HEAD` when detached).
    pub fn current_branch(&self) -> Result<String> {
        let output = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.stdout)
    }

    /// Check if a branch exists locally.
    ///
    /// A non-zero exit from `git rev-parse --verify` means "does not exist";
    /// only a failure to start git at all is returned as an error.
    pub fn local_branch_exists(&self, branch: &str) -> Result<bool> {
        let output = self.run_allow_failure(&[
            "rev-parse",
            "--verify",
            "--quiet",
            &format!("refs/heads/{}", branch),
        ])?;
        Ok(output.success())
    }

    /// Create `branch` at `start_point` and switch to it.
    pub fn create_branch_from(&self, branch: &str, start_point: &str) -> Result<()> {
        self.run(&["checkout", "-b", branch, start_point])?;
        Ok(())
    }

    /// Point `branch` at `start_point`, creating or resetting it, and switch to it.
    ///
    /// Works on the checked-out branch, which `git branch -D` refuses to delete.
    pub fn reset_branch_to(&self, branch: &str, start_point: &str) -> Result<()> {
        self.run(&["checkout", "-B", branch, start_point])?;
        Ok(())
    }

    /// Switch to an existing branch.
    pub fn switch_branch(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch])?;
        Ok(())
    }

    /// Delete a local branch even if it is not merged (`git branch -D`).
    pub fn delete_branch_force(&self, branch: &str) -> Result<()> {
        self.run(&["branch", "-D", branch])?;
        Ok(())
    }
}
