//! Fixture tables
//!
//! Seeded read state (`files`, `branch_heads`) and recorded writes
//! (`updated_files`, `created_branches`, `pull_requests`) live in separate
//! tables. A read never sees a write made during the test and an assertion
//! never sees seeded state.
//!
//! Ordered collections keep failure messages stable across runs.

use std::collections::{BTreeMap, BTreeSet};

use scm_client::PullRequestInput;

use crate::assertion::AssertionFailure;
use crate::keys::{BranchKey, FileKey, HeadKey};

/// In-memory state behind a [`FakeClient`](crate::FakeClient).
#[derive(Debug, Clone, Default)]
pub struct FixtureState {
    files: BTreeMap<FileKey, Vec<u8>>,
    branch_heads: BTreeMap<HeadKey, String>,
    updated_files: BTreeMap<FileKey, Vec<u8>>,
    created_branches: BTreeSet<BranchKey>,
    pull_requests: BTreeMap<String, Vec<PullRequestInput>>,
}

impl FixtureState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeded state ===

    pub fn seed_file(&mut self, key: FileKey, body: Vec<u8>) {
        self.files.insert(key, body);
    }

    pub fn seed_branch_head(&mut self, key: HeadKey, sha: String) {
        self.branch_heads.insert(key, sha);
    }

    pub fn file(&self, key: &FileKey) -> Option<&[u8]> {
        self.files.get(key).map(Vec::as_slice)
    }

    pub fn branch_head(&self, key: &HeadKey) -> Option<&str> {
        self.branch_heads.get(key).map(String::as_str)
    }

    // === Recorded writes ===

    /// Record an update, replacing any earlier write to the same key.
    pub fn record_update(&mut self, key: FileKey, content: Vec<u8>) {
        self.updated_files.insert(key, content);
    }

    /// Record a branch creation. Returns false if the same key was already
    /// recorded.
    pub fn record_branch(&mut self, key: BranchKey) -> bool {
        self.created_branches.insert(key)
    }

    /// Append a pull request and return its 1-based position in `repo`.
    pub fn record_pull_request(&mut self, repo: &str, input: PullRequestInput) -> usize {
        let existing = self.pull_requests.entry(repo.to_string()).or_default();
        existing.push(input);
        existing.len()
    }

    pub fn updated(&self, key: &FileKey) -> Option<&[u8]> {
        self.updated_files.get(key).map(Vec::as_slice)
    }

    pub fn pull_requests(&self, repo: &str) -> &[PullRequestInput] {
        self.pull_requests
            .get(repo)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn branch_count(&self) -> usize {
        self.created_branches.len()
    }

    pub fn pull_request_count(&self) -> usize {
        self.pull_requests.values().map(Vec::len).sum()
    }

    // === Verification ===

    pub fn verify_branch_created(&self, key: &BranchKey) -> Result<(), AssertionFailure> {
        if self.created_branches.contains(key) {
            Ok(())
        } else {
            Err(AssertionFailure::BranchNotCreated { key: key.clone() })
        }
    }

    pub fn verify_branch_not_created(&self, key: &BranchKey) -> Result<(), AssertionFailure> {
        if self.created_branches.contains(key) {
            Err(AssertionFailure::BranchCreated { key: key.clone() })
        } else {
            Ok(())
        }
    }

    pub fn verify_pull_request_created(
        &self,
        repo: &str,
        input: &PullRequestInput,
    ) -> Result<(), AssertionFailure> {
        if self.pull_requests(repo).contains(input) {
            Ok(())
        } else {
            Err(AssertionFailure::PullRequestNotCreated {
                repo: repo.to_string(),
            })
        }
    }

    pub fn verify_pull_request_not_created(
        &self,
        repo: &str,
        input: &PullRequestInput,
    ) -> Result<(), AssertionFailure> {
        if self.pull_requests(repo).contains(input) {
            Err(AssertionFailure::PullRequestCreated {
                repo: repo.to_string(),
            })
        } else {
            Ok(())
        }
    }

    pub fn verify_no_branches(&self) -> Result<(), AssertionFailure> {
        match self.branch_count() {
            0 => Ok(()),
            count => Err(AssertionFailure::BranchesCreated { count }),
        }
    }

    pub fn verify_no_pull_requests(&self) -> Result<(), AssertionFailure> {
        match self.pull_request_count() {
            0 => Ok(()),
            count => Err(AssertionFailure::PullRequestsCreated { count }),
        }
    }

    /// Check every write table, reporting the first one that is not empty.
    pub fn verify_no_interactions(&self) -> Result<(), AssertionFailure> {
        if !self.updated_files.is_empty() {
            return Err(AssertionFailure::FilesUpdated {
                files: self.updated_files.keys().cloned().collect(),
            });
        }
        if !self.created_branches.is_empty() {
            return Err(AssertionFailure::UnexpectedBranches {
                branches: self.created_branches.iter().cloned().collect(),
            });
        }
        if !self.pull_requests.is_empty() {
            return Err(AssertionFailure::UnexpectedPullRequests {
                repos: self.pull_requests.keys().cloned().collect(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> PullRequestInput {
        PullRequestInput {
            title: title.to_string(),
            source: "feature".to_string(),
            target: "main".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn pull_request_positions_are_per_repo() {
        let mut state = FixtureState::new();
        assert_eq!(state.record_pull_request("a", input("one")), 1);
        assert_eq!(state.record_pull_request("a", input("two")), 2);
        assert_eq!(state.record_pull_request("b", input("one")), 1);
        assert_eq!(state.pull_request_count(), 3);
    }

    #[test]
    fn duplicate_branch_is_recorded_once() {
        let mut state = FixtureState::new();
        assert!(state.record_branch(BranchKey::new("r", "b", "sha")));
        assert!(!state.record_branch(BranchKey::new("r", "b", "sha")));
        assert_eq!(state.branch_count(), 1);
    }

    #[test]
    fn seeded_and_updated_files_do_not_mix() {
        let mut state = FixtureState::new();
        let key = FileKey::new("r", "a.txt", "main");
        state.seed_file(key.clone(), b"seeded".to_vec());
        state.record_update(key.clone(), b"written".to_vec());

        assert_eq!(state.file(&key), Some(&b"seeded"[..]));
        assert_eq!(state.updated(&key), Some(&b"written"[..]));
    }

    #[test]
    fn seeding_is_not_an_interaction() {
        let mut state = FixtureState::new();
        state.seed_file(FileKey::new("r", "a.txt", "main"), b"x".to_vec());
        state.seed_branch_head(HeadKey::new("r", "main"), "abc".to_string());
        assert_eq!(state.verify_no_interactions(), Ok(()));
    }

    #[test]
    fn no_interactions_reports_updated_files_first() {
        let mut state = FixtureState::new();
        state.record_branch(BranchKey::new("r", "b", "sha"));
        state.record_update(FileKey::new("r", "a.txt", "b"), Vec::new());

        assert!(matches!(
            state.verify_no_interactions(),
            Err(AssertionFailure::FilesUpdated { .. })
        ));
    }
}
