//! Exit code constants for `git-feat` and `git-pr`.
//!
//! - 0: Success
//! - 1: User error (bad input, protected branch, nothing to publish, bad config)
//! - 3: External command failure (git/gh exited non-zero, unexpected output)
//! - 130: Prompt cancelled (matches the conventional SIGINT status)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid input, refused branch, empty publish, or invalid config.
pub const USER_ERROR: i32 = 1;

/// External command failure: git or gh failed, or their output was unusable.
pub const COMMAND_FAILURE: i32 = 3;

/// The user cancelled an interactive prompt.
pub const CANCELLED: i32 = 130;
