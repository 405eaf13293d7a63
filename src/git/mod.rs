//! Repository operations for gitship.
//!
//! Each operation is a single git invocation through a [`CommandRunner`]
//! followed by an interpretation of its output. Operations are grouped by
//! concern:
//!
//! - `worktree`: dirty check, staging, committing, stashing, discarding
//! - `branch`: current branch, existence, create/switch/delete
//! - `remote`: fetching and verifying the upstream branch, pushing
//! - `history`: ahead count and head commit subject

mod branch;
mod history;
mod remote;
mod worktree;

pub use history::parse_ahead_count;
pub use remote::upstream_ref;

use crate::error::{GitshipError, Result};
use crate::exec::{CommandOutput, CommandRunner, RunOptions};
use std::path::{Path, PathBuf};

/// Handle for running git commands against one working directory.
#[derive(Clone, Copy)]
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
    cwd: Option<&'a Path>,
}

impl<'a> Git<'a> {
    /// Run git in the caller's working directory.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner, cwd: None }
    }

    /// Run git in `cwd`.
    pub fn in_dir(runner: &'a dyn CommandRunner, cwd: &'a Path) -> Self {
        Self {
            runner,
            cwd: Some(cwd),
        }
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            cwd: self.cwd.map(PathBuf::from),
            allow_failure: false,
        }
    }

    /// Run a git command; a non-zero exit is an error.
    pub(crate) fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        self.runner.run("git", args, &self.options())
    }

    /// Run a git command and hand back the output whatever the exit code.
    pub(crate) fn run_allow_failure(&self, args: &[&str]) -> Result<CommandOutput> {
        self.runner
            .run("git", args, &self.options().allow_failure())
    }

    /// Verify that the working directory is inside a git work tree.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - `git rev-parse --is-inside-work-tree` printed `true`
    /// * `Err(GitshipError::NotARepository)` - Any other exit code or output
    pub fn verify_repository(&self) -> Result<()> {
        let output = self.run_allow_failure(&["rev-parse", "--is-inside-work-tree"])?;
        if output.success() && output.stdout == "true" {
            Ok(())
        } else {
            Err(GitshipError::NotARepository)
        }
    }
}
