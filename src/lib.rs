//! gitship: feature-branch and pull-request shortcuts over git and gh.
//!
//! Two binaries share this library:
//!
//! - `git-feat [BRANCH]` creates a feature branch from the upstream trunk
//!   branch, dealing with uncommitted changes first.
//! - `git-pr` commits, pushes, and opens a pull request for the current branch.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod exit_codes;
pub mod git;
pub mod hosting;
pub mod logging;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_support;

use error::Result;
use std::process::ExitCode;

/// Turn a command result into the process exit status, printing any error
/// as `error: <message>` on stderr.
pub fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
