use thiserror::Error;

/// Error types for forum topic operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API error from Telegram
    #[error("Telegram API error ({code}): {description}")]
    Api { code: i64, description: String },

    /// Telegram asked the caller to slow down
    #[error("Telegram flood control, retry after {retry_after}s: {description}")]
    FloodControl { retry_after: u64, description: String },

    /// The group was upgraded to a supergroup with a new identifier
    #[error("Chat migrated to {migrate_to_chat_id}: {description}")]
    ChatMigrated {
        migrate_to_chat_id: i64,
        description: String,
    },

    /// The response body could not be decoded into the expected shape
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new configuration error
    pub fn configuration<S: AsRef<str>>(message: S) -> Self {
        Error::Configuration(message.as_ref().to_string())
    }

    /// Create a new validation error
    pub fn validation<S: AsRef<str>>(message: S) -> Self {
        Error::Validation(message.as_ref().to_string())
    }

    /// Create a new API error
    pub fn api<S: AsRef<str>>(code: i64, description: S) -> Self {
        Error::Api {
            code,
            description: description.as_ref().to_string(),
        }
    }

    /// Create a new generic error
    pub fn other<S: AsRef<str>>(message: S) -> Self {
        Error::Other(message.as_ref().to_string())
    }

    /// Whether the error was reported by the Telegram API itself
    pub fn is_api(&self) -> bool {
        matches!(
            self,
            Error::Api { .. } | Error::FloodControl { .. } | Error::ChatMigrated { .. }
        )
    }
}

/// Convenience alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
