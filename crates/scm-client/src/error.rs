//! Error types for scm-client

/// Result type for scm-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a [`GitClient`](crate::GitClient) can return.
///
/// Errors are `Clone` so a fixture can hand out the same configured
/// failure on every call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("not found: {resource}")]
    NotFound { resource: String },

    #[error("operation not supported: {operation}")]
    Unsupported { operation: String },

    #[error("backend error: {message}")]
    Backend { message: String },
}

impl Error {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// True for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
