//! CLI argument parsing for `git-feat` and `git-pr`.
//!
//! Uses clap derive macros for declarative argument definitions. The flows
//! themselves live in the `commands` module.

use clap::{ArgAction, Parser};

/// Create a feature branch from the upstream trunk branch.
///
/// Uncommitted changes can be stashed, committed to the current branch,
/// carried over to the new branch, or dropped first.
#[derive(Parser, Debug)]
#[command(name = "git-feat")]
#[command(author, version, about, long_about = None)]
pub struct FeatCli {
    /// Name of the feature branch (prompted for when omitted).
    pub branch: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). GITSHIP_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl FeatCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Push the current branch and open a pull request for it.
///
/// Uncommitted changes are committed first. With a single commit ahead of
/// the trunk branch its subject becomes the title; otherwise a title is asked for.
#[derive(Parser, Debug)]
#[command(name = "git-pr")]
#[command(author, version, about, long_about = None)]
pub struct PrCli {
    /// Increase log verbosity (-v debug, -vv trace). GITSHIP_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl PrCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
