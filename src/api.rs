//! Back-office REST API client
//!
//! Defines the ApiError type, the explicit Session passed to every request,
//! and the client that fetches the directory.

use thiserror::Error;

mod client;
mod session;

pub use client::{ApiClient, check_status, fetch_directory_blocking};
pub use session::Session;

/// Errors that can occur while talking to the back-office API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Token missing, expired or rejected (HTTP 401)
    #[error("Unauthorized: the API rejected the session token. Log in again and pass a fresh --token.")]
    Unauthorized,

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-success response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to decode the response body
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
