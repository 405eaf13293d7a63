//! Local validation of feature branch names.
//!
//! Mirrors the parts of git's ref-name rules that matter for a branch typed
//! by a user, so a bad name is rejected before any git command runs.

use crate::error::{GitshipError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Whitespace, control characters, and the characters git forbids in refs.
static FORBIDDEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x00-\x1f\x7f~^:?*\[\\]").expect("Invalid ref character regex"));

/// Trim `raw` and check it is usable as a new branch name.
///
/// # Returns
///
/// * `Ok(String)` - The trimmed name
/// * `Err(GitshipError::InvalidInput)` - Empty after trimming, or not a valid ref name
pub fn validate_branch_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(GitshipError::InvalidInput(
            "Branch name is required.".to_string(),
        ));
    }

    if let Some(reason) = ref_name_problem(name) {
        return Err(GitshipError::InvalidInput(format!(
            "invalid branch name '{}': {}",
            name, reason
        )));
    }

    Ok(name.to_string())
}

fn ref_name_problem(name: &str) -> Option<&'static str> {
    if let Some(found) = FORBIDDEN_CHARS.find(name) {
        let invisible = found
            .as_str()
            .chars()
            .all(|c| c.is_whitespace() || c.is_control());
        return Some(if invisible {
            "contains whitespace or a control character"
        } else {
            "contains one of ~ ^ : ? * [ \\"
        });
    }
    if name == "@" {
        return Some("'@' is not a valid branch name");
    }
    if name.starts_with('-') {
        return Some("must not start with '-'");
    }
    if name.contains("..") {
        return Some("must not contain '..'");
    }
    if name.contains("@{") {
        return Some("must not contain '@{'");
    }
    if name.ends_with('.') {
        return Some("must not end with '.'");
    }
    for component in name.split('/') {
        if component.is_empty() {
            return Some("must not start or end with '/' or contain '//'");
        }
        if component.starts_with('.') {
            return Some("path components must not start with '.'");
        }
        if component.ends_with(".lock") {
            return Some("path components must not end with '.lock'");
        }
    }
    None
}
