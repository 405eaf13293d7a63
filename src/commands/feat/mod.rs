//! Implementation of the `git-feat` command.
//!
//! Creates a feature branch from the upstream trunk branch:
//!
//! 1. Resolve the branch name (argument or prompt) and validate it
//! 2. Verify we are inside a git work tree
//! 3. If the worktree is dirty, let the user stash, commit, carry, or drop the changes
//! 4. Fetch the upstream trunk branch and verify it resolves
//! 5. Create the branch, or reuse/recreate it if it already exists
//! 6. Reapply carried changes on the new branch
//!
//! Nothing is rolled back on failure. A stash pushed before a later error
//! stays in `git stash list`.

mod branch_name;

pub use branch_name::validate_branch_name;

use super::Session;
use crate::error::{GitshipError, Result};
use crate::git::Git;
use crate::prompt::required_text;
use chrono::Local;
use tracing::info;

/// What to do with uncommitted changes before switching branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyAction {
    /// Stash the changes and leave them in the stash.
    Stash,
    /// Commit the changes to the branch that is currently checked out.
    CommitToCurrent,
    /// Stash the changes and reapply them on the new branch.
    MoveToFeature,
    /// Discard tracked changes and untracked files.
    Drop,
}

impl DirtyAction {
    /// Choices in the order they are offered.
    pub const ALL: [DirtyAction; 4] = [
        DirtyAction::Stash,
        DirtyAction::CommitToCurrent,
        DirtyAction::MoveToFeature,
        DirtyAction::Drop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DirtyAction::Stash => "stash (keep changes in stash)",
            DirtyAction::CommitToCurrent => "commit to current branch",
            DirtyAction::MoveToFeature => "move changes to feature branch",
            DirtyAction::Drop => "drop changes",
        }
    }
}

/// What to do when the requested branch already exists locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchAction {
    /// Switch to the existing branch as it is.
    ReuseExisting,
    /// Throw the existing branch away and start it again from upstream.
    Recreate,
}

impl BranchAction {
    /// Choices in the order they are offered.
    pub const ALL: [BranchAction; 2] = [BranchAction::ReuseExisting, BranchAction::Recreate];

    pub fn label(self) -> &'static str {
        match self {
            BranchAction::ReuseExisting => "switch to the existing branch",
            BranchAction::Recreate => "delete it and recreate from upstream",
        }
    }
}

/// How the target branch ended up checked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchResolution {
    Created,
    Reused,
    Recreated,
}

/// Result of a successful `git-feat` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatOutcome {
    pub branch: String,
    /// Remote-tracking ref the branch was (or would have been) created from.
    pub upstream: String,
    /// The choice made for a dirty worktree, if it was dirty.
    pub dirty_action: Option<DirtyAction>,
    pub resolution: BranchResolution,
    /// For [`DirtyAction::MoveToFeature`]: whether the stash reapplied cleanly.
    pub stash_restored: Option<bool>,
}

/// Run the branch-create flow.
pub fn create_feature_branch(
    session: &Session<'_>,
    branch_arg: Option<String>,
) -> Result<FeatOutcome> {
    let raw = match branch_arg {
        Some(raw) => raw,
        None => required_text(session.prompter, "Feature branch name:", "Branch name")?,
    };
    let branch = validate_branch_name(&raw)?;

    let git = session.git();
    git.verify_repository()?;

    let dirty_action = if git.is_worktree_dirty()? {
        Some(handle_dirty_worktree(session, &git)?)
    } else {
        None
    };

    let config = session.config;
    let upstream = git.ensure_upstream_branch(&config.remote, &config.trunk_branch)?;

    let resolution = resolve_target_branch(session, &git, &branch, &upstream)?;
    info!(branch = %branch, upstream = %upstream, ?resolution, "feature branch ready");

    let stash_restored = if dirty_action == Some(DirtyAction::MoveToFeature) {
        let restored = git.stash_pop()?;
        if !restored {
            eprintln!(
                "warning: stash pop failed. Resolve conflicts and run `git stash apply` if needed."
            );
        }
        Some(restored)
    } else {
        None
    };

    Ok(FeatOutcome {
        branch,
        upstream,
        dirty_action,
        resolution,
        stash_restored,
    })
}

fn handle_dirty_worktree(session: &Session<'_>, git: &Git<'_>) -> Result<DirtyAction> {
    let labels: Vec<&str> = DirtyAction::ALL.iter().map(|a| a.label()).collect();
    let index = session.prompter.select(
        "Worktree has changes. What do you want to do?",
        &labels,
        0,
    )?;
    let action = pick(&DirtyAction::ALL, index)?;

    match action {
        DirtyAction::Stash => git.stash_push(&stash_message("auto-stash"))?,
        DirtyAction::CommitToCurrent => {
            git.stage_all()?;
            let message = required_text(session.prompter, "Commit message:", "Commit message")?;
            git.commit_all(&message)?;
        }
        DirtyAction::MoveToFeature => git.stash_push(&stash_message("move-to-feature"))?,
        DirtyAction::Drop => {
            git.reset_hard()?;
            git.clean_untracked()?;
        }
    }

    info!(?action, "handled dirty worktree");
    Ok(action)
}

fn resolve_target_branch(
    session: &Session<'_>,
    git: &Git<'_>,
    branch: &str,
    upstream: &str,
) -> Result<BranchResolution> {
    if !git.local_branch_exists(branch)? {
        git.create_branch_from(branch, upstream)?;
        return Ok(BranchResolution::Created);
    }

    let labels: Vec<&str> = BranchAction::ALL.iter().map(|a| a.label()).collect();
    let index = session.prompter.select(
        &format!("Branch '{}' already exists. What do you want to do?", branch),
        &labels,
        0,
    )?;

    match pick(&BranchAction::ALL, index)? {
        BranchAction::ReuseExisting => {
            git.switch_branch(branch)?;
            Ok(BranchResolution::Reused)
        }
        BranchAction::Recreate => {
            // git refuses to delete the checked-out branch; reset it in place instead.
            if git.current_branch()? == branch {
                git.reset_branch_to(branch, upstream)?;
            } else {
                git.delete_branch_force(branch)?;
                git.create_branch_from(branch, upstream)?;
            }
            Ok(BranchResolution::Recreated)
        }
    }
}

fn pick<T: Copy>(choices: &[T], index: usize) -> Result<T> {
    choices
        .get(index)
        .copied()
        .ok_or_else(|| GitshipError::InvalidInput(format!("invalid selection: {}", index)))
}

fn stash_message(kind: &str) -> String {
    format!(
        "git-feat {} {}",
        kind,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Print the summary line for a finished run.
pub fn print_outcome(outcome: &FeatOutcome) {
    match outcome.resolution {
        BranchResolution::Created => println!(
            "Created and switched to {} from {}.",
            outcome.branch, outcome.upstream
        ),
        BranchResolution::Reused => {
            println!("Switched to existing branch {}.", outcome.branch)
        }
        BranchResolution::Recreated => println!(
            "Recreated and switched to {} from {}.",
            outcome.branch, outcome.upstream
        ),
    }
}
