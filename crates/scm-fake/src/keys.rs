//! Composite keys for the fixture tables
//!
//! Keys are structs rather than joined strings, so `("a:b", "c")` and
//! `("a", "b:c")` never collide.

use std::fmt;

/// Identifies a file in a repository at a reference.
///
/// Used for both seeded files (reference = any ref) and updated files
/// (reference = the branch written to).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileKey {
    pub repo: String,
    pub path: String,
    pub reference: String,
}

impl FileKey {
    pub fn new(repo: &str, path: &str, reference: &str) -> Self {
        Self {
            repo: repo.to_string(),
            path: path.to_string(),
            reference: reference.to_string(),
        }
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.repo, self.path, self.reference)
    }
}

/// A branch-creation event: `branch` created in `repo` from commit `sha`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchKey {
    pub repo: String,
    pub branch: String,
    pub sha: String,
}

impl BranchKey {
    pub fn new(repo: &str, branch: &str, sha: &str) -> Self {
        Self {
            repo: repo.to_string(),
            branch: branch.to_string(),
            sha: sha.to_string(),
        }
    }
}

impl fmt::Display for BranchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "branch {} in repo {} from sha {}",
            self.branch, self.repo, self.sha
        )
    }
}

/// A branch whose current tip is seeded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadKey {
    pub repo: String,
    pub branch: String,
}

impl HeadKey {
    pub fn new(repo: &str, branch: &str) -> Self {
        Self {
            repo: repo.to_string(),
            branch: branch.to_string(),
        }
    }
}

impl fmt::Display for HeadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.repo, self.branch)
    }
}
