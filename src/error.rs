//! Error types for gitship.
//!
//! Uses thiserror for derive macros. Every variant renders a message that is
//! printed as `error: <message>` by the binaries.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for gitship operations.
#[derive(Error, Debug)]
pub enum GitshipError {
    /// The working directory is not inside a git work tree.
    #[error("not inside a git repository.")]
    NotARepository,

    /// A branch name, commit message, or title was empty or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// The remote tracking ref could not be resolved after fetching.
    #[error("{0} not found. Ensure the remote and branch exist.")]
    UpstreamNotFound(String),

    /// `git rev-list --count` printed something that is not a count.
    #[error("unable to parse ahead count from: '{0}'")]
    ParseError(String),

    /// Publishing was attempted from a trunk branch.
    #[error("cannot publish from '{0}'. Create a feature branch first.")]
    ProtectedBranch(String),

    /// The current branch has no commits that the upstream lacks.
    #[error("branch '{branch}' has no commits ahead of {upstream}.")]
    NothingToPublish { branch: String, upstream: String },

    /// An external command exited non-zero (or could not be started).
    #[error("command failed ({code}): {label}\n{message}")]
    CommandFailed {
        label: String,
        code: i32,
        message: String,
    },

    /// The user dismissed an interactive prompt.
    #[error("prompt cancelled.")]
    PromptCancelled,

    /// The configuration file could not be read or is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GitshipError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitshipError::NotARepository
            | GitshipError::InvalidInput(_)
            | GitshipError::ProtectedBranch(_)
            | GitshipError::NothingToPublish { .. }
            | GitshipError::Config(_) => exit_codes::USER_ERROR,
            GitshipError::UpstreamNotFound(_)
            | GitshipError::ParseError(_)
            | GitshipError::CommandFailed { .. } => exit_codes::COMMAND_FAILURE,
            GitshipError::PromptCancelled => exit_codes::CANCELLED,
        }
    }
}

/// Result type alias for gitship operations.
pub type Result<T> = std::result::Result<T, GitshipError>;
