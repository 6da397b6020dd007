//! Value types exchanged with a source-control host

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File content read from a repository at a given reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Path of the file within the repository
    pub path: String,

    /// Raw file bytes
    pub data: Vec<u8>,

    /// Revision identifier of this content, used as `previous_sha` on update
    pub sha: String,
}

/// Author/committer identity attached to a write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub email: String,

    /// Commit timestamp; the host picks one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl Signature {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            date: None,
        }
    }
}

/// Request to open a pull request.
///
/// Two inputs are the same request when every field matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestInput {
    pub title: String,

    #[serde(default)]
    pub body: String,

    /// Branch carrying the changes
    pub source: String,

    /// Branch the changes should be merged into
    pub target: String,
}

/// A pull request as created by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Host-assigned number, 1-based per repository
    pub number: u64,

    /// Web link to the pull request
    pub link: String,
}
