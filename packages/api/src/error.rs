//! Error type shared by every client operation.

use thiserror::Error;

/// Errors surfaced by the API client.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS,
    /// CORS rejection).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// The backend's `detail`/`error` message, when it sent one.
        detail: Option<String>,
    },

    /// The refresh credential was missing or rejected; the session is over
    /// and the stored credential pair has been cleared.
    #[error("session expired")]
    SessionExpired,

    /// Sign-in was attempted without a credential.
    #[error("no sign-in credential provided")]
    MissingCredential,

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for inline display in a form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
