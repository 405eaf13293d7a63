//! Working tree operations (status, stage, commit, stash, discard).

use super::Git;
use crate::error::Result;

impl Git<'_> {
    /// Check whether the working tree has any changes, untracked files included.
    ///
    /// Uses `git status --porcelain`; any output means dirty.
    pub fn is_worktree_dirty(&self) -> Result<bool> {
        let output = self.run(&["status", "--porcelain"])?;
        Ok(!output.is_empty())
    }

    /// Stage every change, including deletions and untracked files.
    pub fn stage_all(&self) -> Result<()> {
        self.run(&["add", "-A"])?;
        Ok(())
    }

    /// Commit the staged changes with `message`.
    pub fn commit_all(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    /// Shelve all changes, untracked files included, under `message`.
    pub fn stash_push(&self, message: &str) -> Result<()> {
        self.run(&["stash", "push", "-u", "-m", message])?;
        Ok(())
    }

    /// Reapply and drop the most recent stash entry.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The stash applied cleanly and was dropped
    /// * `Ok(false)` - `git stash pop` failed (usually a conflict); the entry
    ///   stays in the stash list for the user to resolve
    pub fn stash_pop(&self) -> Result<bool> {
        let output = self.run_allow_failure(&["stash", "pop"])?;
        Ok(output.success())
    }

    /// Discard all changes to tracked files.
    pub fn reset_hard(&self) -> Result<()> {
        self.run(&["reset", "--hard"])?;
        Ok(())
    }

    /// Remove untracked files and directories.
    pub fn clean_untracked(&self) -> Result<()> {
        self.run(&["clean", "-fd"])?;
        Ok(())
    }
}
