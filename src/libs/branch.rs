//! Issue IDs taken from git branch names.
//!
//! Branches are commonly named after the issue they implement, with the ID at
//! either end and an optional namespace: `dev-123`, `feature/123-foo-bar`,
//! `bugfix/123`. Passing `.` as the issue argument makes rlw read the current
//! branch and pick the ID from there.

use super::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

const BRANCH_HEAD_HEADER: &str = "# branch.head ";
const DETACHED_HEAD: &str = "(detached)";

/// The issue argument of the log command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueRef {
    /// `.`: derive the ID from the current branch.
    CurrentBranch,
    /// An explicit ID, written as `123` or `#123`.
    Id(u32),
}

impl FromStr for IssueRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "." {
            return Ok(IssueRef::CurrentBranch);
        }
        parse_issue_id(s.strip_prefix('#').unwrap_or(s))
            .map(IssueRef::Id)
            .ok_or_else(|| Error::InvalidIssueId(s.to_owned()))
    }
}

impl IssueRef {
    /// Resolves to a concrete ID, reading the branch checked out in `directory` if needed.
    pub fn resolve(self, directory: &Path) -> Result<u32> {
        match self {
            IssueRef::Id(id) => Ok(id),
            IssueRef::CurrentBranch => {
                let branch_name = branch_name_from_directory(directory)?;
                tracing::debug!(branch = %branch_name, "deriving issue id from branch");
                issue_id_from_branch_name(&branch_name)
            }
        }
    }
}

/// Extracts the issue ID from a branch name.
///
/// Any namespace up to the last `/` is dropped, the rest is split on `-`, and
/// the first token, then the last one, is tried. A token only counts if it
/// consists of digits alone.
pub fn issue_id_from_branch_name(branch_name: &str) -> Result<u32> {
    let name = branch_name.trim();
    let name = name.rsplit_once('/').map_or(name, |(_, name)| name);

    let tokens: Vec<&str> = name.split('-').collect();
    let issue_id = [tokens.first(), tokens.last()]
        .into_iter()
        .flatten()
        .find_map(|token| parse_issue_id(token));
    issue_id.ok_or_else(|| Error::NoIssueId(branch_name.to_owned()))
}

/// Reads the name of the branch checked out in `directory`.
///
/// Runs `git status --porcelain=v2 --branch` and takes the `branch.head`
/// header, which is stable across git versions and locales.
pub fn branch_name_from_directory(directory: &Path) -> Result<String> {
    let no_branch = |reason: String| Error::NoBranch {
        directory: directory.display().to_string(),
        reason,
    };

    let output = Command::new("git")
        .arg("status")
        .arg("--porcelain=v2")
        .arg("--branch")
        .current_dir(directory)
        .output()
        .map_err(|e| no_branch(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(no_branch(stderr.trim().to_string()));
    }

    branch_name_from_status(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| no_branch("HEAD is not on a branch".to_string()))
}

/// Picks the branch name out of porcelain v2 status output.
pub fn branch_name_from_status(status: &str) -> Option<String> {
    status
        .lines()
        .find_map(|line| line.strip_prefix(BRANCH_HEAD_HEADER))
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != DETACHED_HEAD)
        .map(str::to_owned)
}

/// A positive decimal integer made of ASCII digits only.
fn parse_issue_id(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_check_rejects_signs() {
        assert_eq!(parse_issue_id("+12"), None);
        assert_eq!(parse_issue_id("12a"), None);
        assert_eq!(parse_issue_id("0"), None);
        assert_eq!(parse_issue_id("0042"), Some(42));
    }

    #[test]
    fn test_status_without_branch_header() {
        assert_eq!(branch_name_from_status("# branch.oid abc\n"), None);
    }
}
