// ABOUTME: Error types for channel catalog ingestion.
// ABOUTME: Provides CatalogError with Parse and Invalid variants plus convenience constructors.

use std::fmt;
use thiserror::Error;

/// Errors raised while turning raw catalog data into typed records.
///
/// Resolution itself never fails; these only occur at the ingestion boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload is not well-formed JSON or does not have the catalog shape.
    #[error("failed to parse channel catalog: {0}")]
    Parse(String),

    /// The payload could not be located or is structurally unusable.
    #[error("invalid channel catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    /// Creates a Parse error from an underlying deserializer error.
    pub fn parse(err: impl fmt::Display) -> Self {
        CatalogError::Parse(err.to_string())
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        CatalogError::Invalid(msg.into())
    }
}
