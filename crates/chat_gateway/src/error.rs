//! Gateway error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The requested resource does not exist. Distinguished from generic
    /// failures so callers can treat it as non-fatal (absent profile,
    /// already-deleted session). Carries the server's user-displayable
    /// message when the response body provides one.
    #[error("{}", message.as_deref().unwrap_or("Resource not found"))]
    NotFound { message: Option<String> },

    /// The service rejected the request and supplied a user-displayable
    /// message.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The gateway could not be constructed from the supplied
    /// configuration.
    #[error("Invalid gateway configuration: {0}")]
    InvalidConfig(String),
}

impl GatewayError {
    /// Message suitable for a non-blocking user notification.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Remote { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
