//! In-memory fixture for the `scm-client` contract
//!
//! [`FakeClient`] backs every [`GitClient`](scm_client::GitClient) operation
//! with in-memory tables. Tests seed read state, run the code under test,
//! then assert on the recorded writes.
//!
//! ```rust
//! use scm_client::GitClient;
//! use scm_fake::{FakeClient, content_sha};
//!
//! let fake = FakeClient::new();
//! fake.add_file_contents("r", "a.txt", "main", b"hello");
//!
//! let content = fake.get_file("r", "main", "a.txt").unwrap();
//! assert_eq!(content.sha, content_sha(b"hello"));
//! fake.assert_no_interactions();
//! ```

pub mod assertion;
pub mod client;
pub mod config;
pub mod error;
pub mod hash;
pub mod keys;
pub mod logging;
pub mod overrides;
pub mod reporter;
pub mod state;

pub use assertion::AssertionFailure;
pub use client::FakeClient;
pub use config::FakeConfig;
pub use error::{ConfigError, Result};
pub use hash::content_sha;
pub use keys::{BranchKey, FileKey, HeadKey};
pub use overrides::{Operation, Overrides};
pub use reporter::{PanicReporter, RecordingReporter, Reporter};
pub use state::FixtureState;
