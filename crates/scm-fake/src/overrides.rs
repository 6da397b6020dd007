//! Per-operation failure injection
//!
//! An override makes one operation return a fixed error instead of running,
//! without touching any fixture table.

use std::fmt;

use scm_client::Error;

/// The capability operations a fixture can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetFile,
    UpdateFile,
    DeleteFile,
    CreatePullRequest,
    CreateBranch,
    GetBranchHead,
}

impl Operation {
    /// All operations, in contract order.
    pub const ALL: [Operation; 6] = [
        Operation::GetFile,
        Operation::UpdateFile,
        Operation::DeleteFile,
        Operation::CreatePullRequest,
        Operation::CreateBranch,
        Operation::GetBranchHead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetFile => "get_file",
            Operation::UpdateFile => "update_file",
            Operation::DeleteFile => "delete_file",
            Operation::CreatePullRequest => "create_pull_request",
            Operation::CreateBranch => "create_branch",
            Operation::GetBranchHead => "get_branch_head",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured failures, one optional error per operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    get_file: Option<Error>,
    update_file: Option<Error>,
    delete_file: Option<Error>,
    create_pull_request: Option<Error>,
    create_branch: Option<Error>,
    get_branch_head: Option<Error>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Overrides::set`].
    pub fn with(mut self, operation: Operation, error: Error) -> Self {
        self.set(operation, error);
        self
    }

    pub fn set(&mut self, operation: Operation, error: Error) {
        *self.slot_mut(operation) = Some(error);
    }

    pub fn clear(&mut self, operation: Operation) {
        *self.slot_mut(operation) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// The error `operation` should return, if one is configured.
    pub fn get(&self, operation: Operation) -> Option<&Error> {
        match operation {
            Operation::GetFile => self.get_file.as_ref(),
            Operation::UpdateFile => self.update_file.as_ref(),
            Operation::DeleteFile => self.delete_file.as_ref(),
            Operation::CreatePullRequest => self.create_pull_request.as_ref(),
            Operation::CreateBranch => self.create_branch.as_ref(),
            Operation::GetBranchHead => self.get_branch_head.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Operation::ALL.iter().all(|op| self.get(*op).is_none())
    }

    fn slot_mut(&mut self, operation: Operation) -> &mut Option<Error> {
        match operation {
            Operation::GetFile => &mut self.get_file,
            Operation::UpdateFile => &mut self.update_file,
            Operation::DeleteFile => &mut self.delete_file,
            Operation::CreatePullRequest => &mut self.create_pull_request,
            Operation::CreateBranch => &mut self.create_branch,
            Operation::GetBranchHead => &mut self.get_branch_head,
        }
    }
}
