use thiserror::Error;

use crate::api::ApiError;

/// Custom error types for courier-desk
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("No directory source configured.\n\nPass --data <FILE> or --api-url <URL>, or set [data] path in the config file.")]
    NoDataSource,

    #[error("Invalid directory data: {0}")]
    InvalidData(String),

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
