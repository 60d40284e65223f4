// ABOUTME: Error types for the site helpers: tab-state stores and the GitHub stats client.
// ABOUTME: Provides StoreError and StatsError with convenience constructors and boolean helpers.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by key-value stores backing tab state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a JSON object of strings.
    #[error("corrupt store file {path}: {message}")]
    Corrupt { path: PathBuf, message: String },
}

impl StoreError {
    pub fn corrupt(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        StoreError::Corrupt {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Errors raised while talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request could not be sent or the connection failed.
    #[error("github request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("github returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON.
    #[error("unexpected github response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl StatsError {
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        StatsError::Http {
            url: url.into(),
            source,
        }
    }

    pub fn status(url: impl Into<String>, status: u16) -> Self {
        StatsError::Status {
            url: url.into(),
            status,
        }
    }

    pub fn decode(url: impl Into<String>, err: impl fmt::Display) -> Self {
        StatsError::Decode {
            url: url.into(),
            message: err.to_string(),
        }
    }

    /// Returns true if the API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StatsError::Status { status: 404, .. })
    }
}
