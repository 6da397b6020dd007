//! The `GitClient` capability trait

use crate::Result;
use crate::types::{Content, PullRequest, PullRequestInput, Signature};

/// Operations a source-control hosting client must support.
///
/// `repo` is the host's repository identifier (typically `owner/name`).
/// Implementations take `&self`; any state they keep is their own concern.
pub trait GitClient {
    /// Read a file at `reference` (branch, tag or commit).
    fn get_file(&self, repo: &str, reference: &str, path: &str) -> Result<Content>;

    /// Write `content` to `path` on `branch`.
    ///
    /// `previous_sha` is the [`Content::sha`] the caller last read.
    #[allow(clippy::too_many_arguments)]
    fn update_file(
        &self,
        repo: &str,
        branch: &str,
        path: &str,
        message: &str,
        previous_sha: &str,
        signature: &Signature,
        content: &[u8],
    ) -> Result<()>;

    /// Remove `path` from `branch`.
    ///
    /// Hosts or doubles without file deletion return [`Error::Unsupported`].
    /// The in-memory fixture always does, unless a test injects a different
    /// failure for this operation.
    ///
    /// [`Error::Unsupported`]: crate::Error::Unsupported
    #[allow(clippy::too_many_arguments)]
    fn delete_file(
        &self,
        repo: &str,
        branch: &str,
        path: &str,
        message: &str,
        previous_sha: &str,
        signature: &Signature,
        content: &[u8],
    ) -> Result<()>;

    /// Open a pull request.
    fn create_pull_request(&self, repo: &str, input: &PullRequestInput) -> Result<PullRequest>;

    /// Create `branch` pointing at commit `sha`.
    fn create_branch(&self, repo: &str, branch: &str, sha: &str) -> Result<()>;

    /// Current tip commit of `branch`.
    fn get_branch_head(&self, repo: &str, branch: &str) -> Result<String>;
}
