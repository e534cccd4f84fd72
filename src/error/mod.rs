//! Error types for agent-foundry.

pub mod unified;

pub use unified::ErrorCategory;

use thiserror::Error;

/// Primary error type for all foundry operations.
#[derive(Error, Debug)]
pub enum FoundryError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The generation backend failed while producing records.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tools not found: {missing:?}. Available tools: {available:?}")]
    ToolNotFound {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid agent spec: {0}")]
    InvalidSpec(String),
}

impl FoundryError {
    /// Create an upstream failure.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Create a tool-not-found error for a single missing tool.
    pub fn tool_not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::ToolNotFound {
            missing: vec![name.into()],
            available,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Upstream(_) => ErrorCategory::Upstream,
            Self::Stream(_) => ErrorCategory::Stream,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Io(_) => ErrorCategory::Io,
            Self::ToolNotFound { .. } => ErrorCategory::Tool,
            Self::InvalidArgument(_) | Self::InvalidSpec(_) => ErrorCategory::Validation,
        }
    }

    /// Coarse code carried by a `RUN_ERROR` event for this failure.
    pub fn code(&self) -> String {
        self.category().to_string()
    }

    /// Whether this error is potentially retryable by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Upstream | ErrorCategory::Stream | ErrorCategory::Timeout | ErrorCategory::Io
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FoundryError>;
