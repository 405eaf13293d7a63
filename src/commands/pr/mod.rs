//! Implementation of the `git-pr` command.
//!
//! Publishes the current branch as a pull request:
//!
//! 1. Verify we are inside a git work tree
//! 2. Refuse to run on a protected trunk branch
//! 3. Commit any uncommitted changes (message prompted)
//! 4. Push the branch with upstream tracking
//! 5. Fetch the upstream trunk branch and count commits ahead of it
//! 6. Resolve a title: the commit subject for a single commit, else prompted
//! 7. Create the pull request, treating "already exists" as success
//! 8. Open the pull request


use super::Session;
use crate::error::{GitshipError, Result};
use crate::git::Git;
use crate::hosting::PullRequestOutcome;
use crate::prompt::required_text;
use tracing::info;

/// Result of a successful `git-pr` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub branch: String,
    /// Branch the pull request targets.
    pub base: String,
    pub title: String,
    /// Commits ahead of the upstream trunk at publish time.
    pub ahead: u64,
    /// Whether uncommitted changes were committed first.
    pub committed: bool,
    pub pull_request: PullRequestOutcome,
    /// What `gh pr view` printed when not opening a browser.
    pub view_output: Option<String>,
}

/// Run the publish flow.
pub fn publish_branch(session: &Session<'_>) -> Result<PublishOutcome> {
    let config = session.config;
    let git = session.git();
    git.verify_repository()?;

    let branch = git.current_branch()?;
    if config.is_protected(&branch) {
        return Err(GitshipError::ProtectedBranch(branch));
    }

    let committed = if git.is_worktree_dirty()? {
        git.stage_all()?;
        let message = required_text(session.prompter, "Commit message:", "Commit message")?;
        git.commit_all(&message)?;
        true
    } else {
        false
    };

    git.push_with_upstream(&config.remote)?;
    let upstream = git.ensure_upstream_branch(&config.remote, &config.trunk_branch)?;

    let ahead = git.ahead_count(&upstream)?;
    if ahead == 0 {
        return Err(GitshipError::NothingToPublish { branch, upstream });
    }

    let title = resolve_title(session, &git, ahead)?;

    let github = session.github();
    let pull_request = github.create_pull_request(&title, &config.trunk_branch)?;
    match pull_request {
        PullRequestOutcome::Created => info!(branch = %branch, title = %title, "pull request created"),
        PullRequestOutcome::AlreadyExists => eprintln!(
            "A pull request for {} already exists; opening it instead.",
            branch
        ),
    }

    let view = github.view_pull_request(config.open_in_browser)?;
    let view_output = (!config.open_in_browser).then_some(view.stdout);

    Ok(PublishOutcome {
        branch,
        base: config.trunk_branch.clone(),
        title,
        ahead,
        committed,
        pull_request,
        view_output,
    })
}

/// A single commit names the pull request; otherwise the user does.
fn resolve_title(session: &Session<'_>, git: &Git<'_>, ahead: u64) -> Result<String> {
    if ahead == 1 {
        let subject = git.head_commit_subject()?;
        if !subject.trim().is_empty() {
            return Ok(subject.trim().to_string());
        }
    }
    required_text(session.prompter, "Pull request title:", "Pull request title")
}

/// Print the summary for a finished run.
pub fn print_outcome(outcome: &PublishOutcome) {
    if let Some(view) = &outcome.view_output {
        println!("{}", view);
        println!();
    }
    match outcome.pull_request {
        PullRequestOutcome::Created => println!(
            "Opened pull request \"{}\" ({} -> {}, {} commit{}).",
            outcome.title,
            outcome.branch,
            outcome.base,
            outcome.ahead,
            if outcome.ahead == 1 { "" } else { "s" }
        ),
        PullRequestOutcome::AlreadyExists => println!(
            "Pushed {}; its pull request into {} is already open.",
            outcome.branch, outcome.base
        ),
    }
}
