//! In-memory `GitClient` implementation

use std::cell::{Ref, RefCell};

use scm_client::{Content, Error, GitClient, PullRequest, PullRequestInput, Result, Signature};

use crate::assertion::AssertionFailure;
use crate::config::FakeConfig;
use crate::hash::content_sha;
use crate::keys::{BranchKey, FileKey, HeadKey};
use crate::overrides::{Operation, Overrides};
use crate::reporter::{PanicReporter, Reporter};
use crate::state::FixtureState;

/// A [`GitClient`] backed by in-memory tables, for use in tests.
///
/// One instance per test. State lives in a `RefCell`, so the fixture is
/// `!Sync`; share it by reference within a single thread only.
///
/// Pull-request numbers come from the length of the per-repository record
/// after appending. Nothing guards that sequence against interleaved callers.
#[derive(Debug)]
pub struct FakeClient<R: Reporter = PanicReporter> {
    state: RefCell<FixtureState>,
    overrides: RefCell<Overrides>,
    config: FakeConfig,
    reporter: R,
}

impl FakeClient {
    /// Empty fixture with default config that panics on failed assertions.
    pub fn new() -> Self {
        Self::with_reporter(PanicReporter)
    }

    pub fn with_config(config: FakeConfig) -> Self {
        Self::with_reporter(PanicReporter).configured(config)
    }
}

impl Default for FakeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reporter> FakeClient<R> {
    /// Empty fixture that sends failed assertions to `reporter`.
    pub fn with_reporter(reporter: R) -> Self {
        Self {
            state: RefCell::new(FixtureState::new()),
            overrides: RefCell::new(Overrides::new()),
            config: FakeConfig::default(),
            reporter,
        }
    }

    /// Replace the config.
    pub fn configured(mut self, config: FakeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start with the given failures configured.
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        *self.overrides.borrow_mut() = overrides;
        self
    }

    pub fn config(&self) -> &FakeConfig {
        &self.config
    }

    /// Read-only view of the tables.
    pub fn state(&self) -> Ref<'_, FixtureState> {
        self.state.borrow()
    }

    // === Failure injection ===

    /// Make `operation` return `error` until cleared.
    ///
    /// For [`Operation::DeleteFile`] the injected error replaces the usual
    /// [`Error::Unsupported`].
    pub fn fail(&self, operation: Operation, error: Error) {
        self.overrides.borrow_mut().set(operation, error);
    }

    pub fn clear_failure(&self, operation: Operation) {
        self.overrides.borrow_mut().clear(operation);
    }

    pub fn clear_failures(&self) {
        self.overrides.borrow_mut().clear_all();
    }

    fn injected(&self, operation: Operation) -> Result<()> {
        match self.overrides.borrow().get(operation) {
            Some(error) => {
                tracing::debug!(%operation, %error, "returning injected failure");
                Err(error.clone())
            }
            None => Ok(()),
        }
    }

    // === Seeding ===

    /// Seed the content `get_file` returns for `(repo, path, reference)`.
    pub fn add_file_contents(&self, repo: &str, path: &str, reference: &str, body: &[u8]) {
        self.state
            .borrow_mut()
            .seed_file(FileKey::new(repo, path, reference), body.to_vec());
    }

    /// Seed the sha `get_branch_head` returns for `(repo, branch)`.
    pub fn add_branch_head(&self, repo: &str, branch: &str, sha: &str) {
        self.state
            .borrow_mut()
            .seed_branch_head(HeadKey::new(repo, branch), sha.to_string());
    }

    // === Inspection ===

    /// Bytes last written by `update_file` to `path` on `branch`.
    pub fn updated_contents(&self, repo: &str, path: &str, branch: &str) -> Option<Vec<u8>> {
        self.state
            .borrow()
            .updated(&FileKey::new(repo, path, branch))
            .map(<[u8]>::to_vec)
    }

    /// Pull requests opened in `repo`, in creation order.
    pub fn pull_requests(&self, repo: &str) -> Vec<PullRequestInput> {
        self.state.borrow().pull_requests(repo).to_vec()
    }

    // === Assertions ===

    #[track_caller]
    fn report(&self, outcome: std::result::Result<(), AssertionFailure>) {
        if let Err(failure) = outcome {
            self.reporter.fail_now(failure);
        }
    }

    /// Fails unless `branch` was created in `repo` from `sha`.
    #[track_caller]
    pub fn assert_branch_created(&self, repo: &str, branch: &str, sha: &str) {
        let outcome = self
            .state
            .borrow()
            .verify_branch_created(&BranchKey::new(repo, branch, sha));
        self.report(outcome);
    }

    /// Fails if `branch` was created in `repo` from `sha`.
    #[track_caller]
    pub fn refute_branch_created(&self, repo: &str, branch: &str, sha: &str) {
        let outcome = self
            .state
            .borrow()
            .verify_branch_not_created(&BranchKey::new(repo, branch, sha));
        self.report(outcome);
    }

    /// Fails unless a pull request equal to `input` was opened in `repo`.
    #[track_caller]
    pub fn assert_pull_request_created(&self, repo: &str, input: &PullRequestInput) {
        let outcome = self.state.borrow().verify_pull_request_created(repo, input);
        self.report(outcome);
    }

    /// Fails if a pull request equal to `input` was opened in `repo`.
    #[track_caller]
    pub fn refute_pull_request_created(&self, repo: &str, input: &PullRequestInput) {
        let outcome = self
            .state
            .borrow()
            .verify_pull_request_not_created(repo, input);
        self.report(outcome);
    }

    #[track_caller]
    pub fn assert_no_branches_created(&self) {
        let outcome = self.state.borrow().verify_no_branches();
        self.report(outcome);
    }

    #[track_caller]
    pub fn assert_no_pull_requests_created(&self) {
        let outcome = self.state.borrow().verify_no_pull_requests();
        self.report(outcome);
    }

    /// Fails if any file was updated, branch created or pull request opened.
    #[track_caller]
    pub fn assert_no_interactions(&self) {
        let outcome = self.state.borrow().verify_no_interactions();
        self.report(outcome);
    }
}

impl<R: Reporter> GitClient for FakeClient<R> {
    fn get_file(&self, repo: &str, reference: &str, path: &str) -> Result<Content> {
        self.injected(Operation::GetFile)?;

        let key = FileKey::new(repo, path, reference);
        let state = self.state.borrow();
        let data = state
            .file(&key)
            .ok_or_else(|| Error::not_found(key.to_string()))?;
        tracing::debug!(repo, reference, path, bytes = data.len(), "get_file");

        Ok(Content {
            path: path.to_string(),
            data: data.to_vec(),
            sha: content_sha(data),
        })
    }

    fn update_file(
        &self,
        repo: &str,
        branch: &str,
        path: &str,
        _message: &str,
        previous_sha: &str,
        _signature: &Signature,
        content: &[u8],
    ) -> Result<()> {
        self.injected(Operation::UpdateFile)?;

        // previous_sha is accepted as-is; stale writes are not rejected.
        tracing::debug!(repo, branch, path, previous_sha, bytes = content.len(), "update_file");
        self.state
            .borrow_mut()
            .record_update(FileKey::new(repo, path, branch), content.to_vec());
        Ok(())
    }

    fn delete_file(
        &self,
        repo: &str,
        branch: &str,
        path: &str,
        _message: &str,
        _previous_sha: &str,
        _signature: &Signature,
        _content: &[u8],
    ) -> Result<()> {
        self.injected(Operation::DeleteFile)?;

        tracing::debug!(repo, branch, path, "delete_file is not supported");
        Err(Error::unsupported(Operation::DeleteFile.as_str()))
    }

    fn create_pull_request(&self, repo: &str, input: &PullRequestInput) -> Result<PullRequest> {
        self.injected(Operation::CreatePullRequest)?;

        let position = self
            .state
            .borrow_mut()
            .record_pull_request(repo, input.clone());
        let number = position as u64;
        let link = self.config.link_for(number);
        tracing::debug!(repo, number, source = %input.source, target = %input.target, "create_pull_request");

        Ok(PullRequest { number, link })
    }

    fn create_branch(&self, repo: &str, branch: &str, sha: &str) -> Result<()> {
        self.injected(Operation::CreateBranch)?;

        let inserted = self
            .state
            .borrow_mut()
            .record_branch(BranchKey::new(repo, branch, sha));
        tracing::debug!(repo, branch, sha, duplicate = !inserted, "create_branch");
        Ok(())
    }

    fn get_branch_head(&self, repo: &str, branch: &str) -> Result<String> {
        self.injected(Operation::GetBranchHead)?;

        let key = HeadKey::new(repo, branch);
        let state = self.state.borrow();
        let sha = state
            .branch_head(&key)
            .ok_or_else(|| Error::not_found(key.to_string()))?;
        tracing::debug!(repo, branch, sha, "get_branch_head");
        Ok(sha.to_string())
    }
}
