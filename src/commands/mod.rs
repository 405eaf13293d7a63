//! Command implementations for gitship.
//!
//! Each binary builds a [`Session`] from the real process environment and
//! hands it to its flow. Flows only touch the outside world through the
//! session's runner and prompter, so tests drive them with scripted ones.

pub mod feat;
pub mod pr;

use crate::config::Config;
use crate::error::{GitshipError, Result};
use crate::exec::{CommandRunner, ProcessEnv, ProcessRunner};
use crate::git::Git;
use crate::hosting::GitHub;
use crate::prompt::{Prompter, TerminalPrompter};
use std::path::Path;

/// Everything a flow needs to talk to git, gh, and the user.
pub struct Session<'a> {
    pub runner: &'a dyn CommandRunner,
    pub prompter: &'a dyn Prompter,
    pub config: &'a Config,
    /// Working directory for git/gh; the process's own when `None`.
    pub cwd: Option<&'a Path>,
}

impl<'a> Session<'a> {
    pub fn git(&self) -> Git<'a> {
        match self.cwd {
            Some(cwd) => Git::in_dir(self.runner, cwd),
            None => Git::new(self.runner),
        }
    }

    pub fn github(&self) -> GitHub<'a> {
        match self.cwd {
            Some(cwd) => GitHub::in_dir(self.runner, cwd),
            None => GitHub::new(self.runner),
        }
    }
}

/// Run `git-feat` against the real terminal and processes.
pub fn cmd_feat(env: ProcessEnv, branch: Option<String>) -> Result<()> {
    with_session(env, |session| {
        let outcome = feat::create_feature_branch(session, branch)?;
        feat::print_outcome(&outcome);
        Ok(())
    })
}

/// Run `git-pr` against the real terminal and processes.
pub fn cmd_pr(env: ProcessEnv) -> Result<()> {
    with_session(env, |session| {
        let outcome = pr::publish_branch(session)?;
        pr::print_outcome(&outcome);
        Ok(())
    })
}

fn with_session<T>(env: ProcessEnv, flow: impl FnOnce(&Session<'_>) -> Result<T>) -> Result<T> {
    let cwd = std::env::current_dir().map_err(|e| {
        GitshipError::InvalidInput(format!("failed to get current working directory: {}", e))
    })?;
    let config = Config::discover(&env, &cwd)?;
    let runner = ProcessRunner::new(env);
    let prompter = TerminalPrompter::new();

    let session = Session {
        runner: &runner,
        prompter: &prompter,
        config: &config,
        cwd: None,
    };
    flow(&session)
}
