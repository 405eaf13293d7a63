//! Pull request operations through the GitHub CLI (`gh`).
//!
//! `gh pr create` fails when the branch already has an open pull request.
//! That failure is benign for publishing, so it is recognised by
//! [`is_already_exists`] and reported as [`PullRequestOutcome::AlreadyExists`].

use crate::error::{GitshipError, Result};
use crate::exec::{CommandOutput, CommandRunner, RunOptions};
use std::path::{Path, PathBuf};

/// Phrases gh prints (in any case) when a pull request for the head branch
/// is already open. Matched against lowercased stdout + stderr.
pub const ALREADY_EXISTS_PHRASES: &[&str] = &[
    "already exists",
    "existing pull request",
    "a pull request already exists",
];

/// Best-effort check whether gh output says a pull request is already open.
///
/// The output is lowercased before matching, so callers can pass raw text.
pub fn is_already_exists(output: &str) -> bool {
    let normalized = output.to_lowercase();
    ALREADY_EXISTS_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
}

/// What happened when a pull request was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestOutcome {
    /// A new pull request was opened.
    Created,
    /// The branch already had an open pull request; nothing was changed.
    AlreadyExists,
}

/// Handle for running gh commands against one working directory.
#[derive(Clone, Copy)]
pub struct GitHub<'a> {
    runner: &'a dyn CommandRunner,
    cwd: Option<&'a Path>,
}

impl<'a> GitHub<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner, cwd: None }
    }

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

    /// Open a pull request from the current branch into `base` with an empty body.
    ///
    /// # Returns
    ///
    /// * `Ok(PullRequestOutcome::Created)` - gh exited 0
    /// * `Ok(PullRequestOutcome::AlreadyExists)` - gh failed because one is already open
    /// * `Err(GitshipError::CommandFailed)` - Any other gh failure
    pub fn create_pull_request(&self, title: &str, base: &str) -> Result<PullRequestOutcome> {
        let output = self.runner.run(
            "gh",
            &["pr", "create", "--title", title, "--body", "", "--base", base],
            &self.options().allow_failure(),
        )?;

        if output.success() {
            return Ok(PullRequestOutcome::Created);
        }
        if is_already_exists(&output.combined()) {
            return Ok(PullRequestOutcome::AlreadyExists);
        }

        Err(GitshipError::CommandFailed {
            label: "gh pr create".to_string(),
            code: output.exit_code,
            message: output.failure_message().to_string(),
        })
    }

    /// Show the current branch's pull request, in the browser when `web` is set.
    pub fn view_pull_request(&self, web: bool) -> Result<CommandOutput> {
        let args: &[&str] = if web {
            &["pr", "view", "--web"]
        } else {
            &["pr", "view"]
        };
        self.runner.run("gh", args, &self.options())
    }
}
