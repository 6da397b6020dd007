//! Assertion failures reported by the fixture

use crate::keys::{BranchKey, FileKey};

/// A violated expectation about the writes a fixture recorded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionFailure {
    #[error("{key} not created")]
    BranchNotCreated { key: BranchKey },

    #[error("{key} was created")]
    BranchCreated { key: BranchKey },

    #[error("pull request not created in repo {repo}")]
    PullRequestNotCreated { repo: String },

    #[error("pull request was created in repo {repo}")]
    PullRequestCreated { repo: String },

    #[error("expected no branches to be created: got {count}")]
    BranchesCreated { count: usize },

    #[error("expected no pull requests to be created: got {count}")]
    PullRequestsCreated { count: usize },

    #[error("files were updated: {}", format_files(.files))]
    FilesUpdated { files: Vec<FileKey> },

    #[error("branches created: {}", format_branches(.branches))]
    UnexpectedBranches { branches: Vec<BranchKey> },

    #[error("pull requests created in repos: {}", .repos.join(", "))]
    UnexpectedPullRequests { repos: Vec<String> },
}

fn format_files(files: &[FileKey]) -> String {
    files
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_branches(branches: &[BranchKey]) -> String {
    branches
        .iter()
        .map(|b| format!("{}@{}:{}", b.repo, b.branch, b.sha))
        .collect::<Vec<_>>()
        .join(", ")
}
