//! Error types for CoinCap shared types

use thiserror::Error;

/// Errors produced while parsing the shared types from their wire form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Unknown interval code
    #[error("invalid interval: {0} (supported: m1, m5, m15, m30, h1, h2, h6, h12, d1)")]
    InvalidInterval(String),
}

/// Result type for type parsing
pub type TypesResult<T> = Result<T, TypesError>;
