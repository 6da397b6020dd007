//! Capability contract for source-control hosting clients
//!
//! Consumers depend on [`GitClient`] only. A networked client and the
//! in-memory fixture in `scm-fake` both implement it.

pub mod client;
pub mod error;
pub mod types;

pub use client::GitClient;
pub use error::{Error, Result};
pub use types::{Content, PullRequest, PullRequestInput, Signature};
