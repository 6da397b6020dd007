//! Error types for scm-fake

/// Result type for scm-fake configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building a fixture configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse fixture config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Link template '{template}' has no {{number}} placeholder")]
    MissingPlaceholder { template: String },
}
