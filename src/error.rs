//! Error types for the onboarding client.

/// Top-level error type for the onboarding client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the backend company resource.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Invalid response from server: {reason}")]
    InvalidResponse { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Short message suitable for inline display next to the wizard controls.
    ///
    /// Prefers the server-supplied detail, falls back to the transport error,
    /// and otherwise uses a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail, .. } if !detail.is_empty() => detail.clone(),
            Self::Transport { reason, .. } => reason.clone(),
            _ => "Failed to save progress. Please try again.".to_string(),
        }
    }
}

/// Result type alias for the onboarding client.
pub type Result<T> = std::result::Result<T, Error>;
