use crate::error::{GitshipError, Result};
use crate::exec::{CommandOutput, CommandRunner, ProcessEnv, ProcessRunner, RunOptions};
use crate::prompt::Prompter;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Git variables that would redirect child git processes away from the test repo.
const GIT_REDIRECT_VARS: &[&str] = &["GIT_DIR", "GIT_WORK_TREE", "GIT_INDEX_FILE"];

/// A runner over the real environment minus variables that would confuse git.
pub(crate) fn test_runner() -> ProcessRunner {
    let env = GIT_REDIRECT_VARS
        .iter()
        .fold(ProcessEnv::capture(), |env, var| env.without_var(var));
    ProcessRunner::new(env)
}

// ============================================================================
// Scripted command runner
// ============================================================================

/// A [`CommandRunner`] that records invocations and answers from a script.
///
/// Responses are matched against the command line (program and arguments
/// joined by single spaces) by prefix; the longest matching prefix wins.
/// Several responses with the same prefix are handed out in order, the last
/// one repeating. Unmatched commands succeed with empty output.
pub(crate) struct FakeRunner {
    responses: RefCell<Vec<(String, CommandOutput)>>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self {
            responses: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A runner inside a clean repository whose local branches do not exist yet.
    pub(crate) fn in_repo() -> Self {
        Self::new()
            .respond("git rev-parse --is-inside-work-tree", "true")
            .fail("git rev-parse --verify --quiet refs/heads/", 1, "")
    }

    /// Answer commands starting with `prefix` with exit code 0 and `stdout`.
    pub(crate) fn respond(self, prefix: &str, stdout: &str) -> Self {
        self.push(prefix, stdout, "", 0)
    }

    /// Answer commands starting with `prefix` with `code` and `stderr`.
    pub(crate) fn fail(self, prefix: &str, code: i32, stderr: &str) -> Self {
        self.push(prefix, "", stderr, code)
    }

    /// Answer with explicit stdout, stderr and exit code.
    pub(crate) fn push(self, prefix: &str, stdout: &str, stderr: &str, code: i32) -> Self {
        self.responses.borrow_mut().push((
            prefix.to_string(),
            CommandOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                exit_code: code,
            },
        ));
        self
    }

    /// Every command line run so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// True if any command line starting with `prefix` was run.
    pub(crate) fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|call| call.starts_with(prefix))
    }

    fn answer(&self, line: &str) -> CommandOutput {
        let mut responses = self.responses.borrow_mut();
        let best = responses
            .iter()
            .filter(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(prefix, _)| prefix.len())
            .max();
        let Some(best) = best else {
            return CommandOutput {
                stdout: String::new(),
                stderr: String::new(),
                exit_code: 0,
            };
        };

        let matching: Vec<usize> = responses
            .iter()
            .enumerate()
            .filter(|(_, (prefix, _))| prefix.len() == best && line.starts_with(prefix.as_str()))
            .map(|(index, _)| index)
            .collect();
        if matching.len() > 1 {
            responses.remove(matching[0]).1
        } else {
            responses[matching[0]].1.clone()
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str], options: &RunOptions) -> Result<CommandOutput> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line.clone());

        let output = self.answer(&line);
        if output.success() || options.allow_failure {
            Ok(output)
        } else {
            Err(GitshipError::CommandFailed {
                label: line,
                code: output.exit_code,
                message: output.failure_message().to_string(),
            })
        }
    }
}

// ============================================================================
// Scripted prompter
// ============================================================================

/// One queued answer for [`ScriptedPrompter`].
#[derive(Debug, Clone)]
pub(crate) enum Answer {
    Text(String),
    Choice(usize),
    Cancel,
}

/// A [`Prompter`] that replays queued answers and records every prompt message.
///
/// Panics on a prompt it has no answer for, so unexpected prompts fail the test.
pub(crate) struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub(crate) fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn silent() -> Self {
        Self::new(Vec::new())
    }

    /// Every prompt message shown so far, in order.
    pub(crate) fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next(&self, message: &str) -> Answer {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {message}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &self,
        message: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String> {
        match self.next(message) {
            Answer::Text(text) => {
                validate(text.as_str()).map_err(GitshipError::InvalidInput)?;
                Ok(text)
            }
            Answer::Cancel => Err(GitshipError::PromptCancelled),
            Answer::Choice(index) => panic!("text prompt '{message}' answered with choice {index}"),
        }
    }

    fn select(&self, message: &str, options: &[&str], _default: usize) -> Result<usize> {
        match self.next(message) {
            Answer::Choice(index) => {
                assert!(index < options.len(), "choice {index} out of range for '{message}'");
                Ok(index)
            }
            Answer::Cancel => Err(GitshipError::PromptCancelled),
            Answer::Text(text) => panic!("choice prompt '{message}' answered with text {text:?}"),
        }
    }
}

// ============================================================================
// Real git repositories
// ============================================================================

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path(), 1);
    temp_dir
}

/// A repository whose `origin` remote points at itself, so fetches succeed offline.
pub(crate) fn create_test_repo_with_remote() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();
    init_repo(path, 2);

    let path_str = path.to_string_lossy().to_string();
    git(path, &["remote", "add", "origin", &path_str]);

    temp_dir
}

/// A work repository plus a bare `origin` it has pushed `main` to.
pub(crate) struct TestRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestRepo {
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

pub(crate) fn create_test_repo_with_bare_remote() -> TestRepo {
    let temp_dir = TempDir::new().unwrap();
    let work = temp_dir.path().join("work");
    let bare = temp_dir.path().join("origin.git");
    std::fs::create_dir_all(&work).unwrap();

    git(temp_dir.path(), &["init", "--bare", &bare.to_string_lossy()]);
    init_repo(&work, 2);
    git(&work, &["remote", "add", "origin", &bare.to_string_lossy()]);
    git(&work, &["push", "origin", "main"]);

    TestRepo {
        _temp_dir: temp_dir,
        path: work,
    }
}

fn init_repo(path: &Path, commits: usize) {
    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    for i in 2..=commits {
        std::fs::write(path.join(format!("file{}.txt", i)), format!("File {}\n", i)).unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", &format!("Commit {}", i)]);
    }
}

/// Run git directly for test setup, panicking on failure. Returns trimmed stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let mut command = Command::new("git");
    command.current_dir(repo_dir).args(args);
    for var in GIT_REDIRECT_VARS {
        command.env_remove(var);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
