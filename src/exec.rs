//! External process runner for gitship.
//!
//! Every git and gh invocation goes through a [`CommandRunner`]. The real
//! implementation, [`ProcessRunner`], spawns the program with an explicit
//! [`ProcessEnv`] instead of the ambient process environment, waits for it,
//! and returns trimmed stdout/stderr together with the exit code.

use crate::error::{GitshipError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::{debug, trace};

/// Exit code reported for a process that terminated without one (killed by a signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Result of an external command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
    /// Process exit code, or [`NO_EXIT_CODE`] when killed by a signal.
    pub exit_code: i32,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code().unwrap_or(NO_EXIT_CODE),
        }
    }

    /// Returns true if the command exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// The text explaining a failure: stderr, or stdout when stderr is empty.
    pub fn failure_message(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }

    /// Stdout and stderr joined by a newline.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Per-invocation options.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Working directory for the child; inherits the caller's when `None`.
    pub cwd: Option<PathBuf>,
    /// Return the output instead of failing when the exit code is non-zero.
    pub allow_failure: bool,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the command in `cwd`.
    pub fn in_dir<P: AsRef<Path>>(mut self, cwd: P) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Tolerate a non-zero exit code.
    pub fn allow_failure(mut self) -> Self {
        self.allow_failure = true;
        self
    }
}

/// The environment variables handed to every spawned program.
///
/// Captured once at startup by the binaries; tests build one by hand so that
/// child processes never depend on whatever the test harness inherited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnv {
    vars: BTreeMap<String, String>,
}

impl ProcessEnv {
    /// An environment with no variables at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment. Variables whose name or value
    /// is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Add or replace a variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Remove a variable if present.
    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Executes external programs on behalf of the repository and hosting operations.
pub trait CommandRunner {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// # Returns
    ///
    /// * `Ok(CommandOutput)` - Exit code 0, or any exit code when `allow_failure` is set
    /// * `Err(GitshipError::CommandFailed)` - Non-zero exit without `allow_failure`,
    ///   or the program could not be started at all
    fn run(&self, program: &str, args: &[&str], options: &RunOptions) -> Result<CommandOutput>;
}

/// Human-readable label for a command line, quoted the way a shell would need it.
pub fn command_label(program: &str, args: &[&str]) -> String {
    shell_words::join(std::iter::once(program).chain(args.iter().copied()))
}

/// Runs real processes with an explicit environment.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    env: ProcessEnv,
}

impl ProcessRunner {
    pub fn new(env: ProcessEnv) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &ProcessEnv {
        &self.env
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], options: &RunOptions) -> Result<CommandOutput> {
        let label = command_label(program, args);
        debug!(command = %label, cwd = ?options.cwd, "running");

        let mut command = Command::new(program);
        command
            .args(args)
            .env_clear()
            .envs(self.env.iter())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = &options.cwd {
            command.current_dir(cwd);
        }

        let output = command.output().map_err(|e| GitshipError::CommandFailed {
            label: label.clone(),
            code: NO_EXIT_CODE,
            message: format!("failed to execute {}: {}", program, e),
        })?;

        let result = CommandOutput::from_output(&output);
        trace!(command = %label, exit_code = result.exit_code, "finished");

        if result.success() || options.allow_failure {
            Ok(result)
        } else {
            Err(GitshipError::CommandFailed {
                label,
                code: result.exit_code,
                message: result.failure_message().to_string(),
            })
        }
    }
}
