//! Error types for REST API operations

/// Errors that can occur during REST API operations
///
/// Validation errors (`MissingParameter`, `InvalidParameter`) are raised
/// before any request is sent. Transport and decode errors carry the
/// originating error as their source, untouched.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// A required parameter was empty or unset
    #[error("Missing parameter: {name}")]
    MissingParameter {
        /// Query or path parameter name
        name: &'static str,
    },

    /// A supplied parameter violates an API constraint
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Query or path parameter name
        name: &'static str,
        /// Constraint that was violated
        reason: String,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decompressed
    #[error("Decompression error: {0}")]
    Decompression(#[source] std::io::Error),

    /// Response body did not match the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// API key cannot be used as a bearer token
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl RestError {
    pub(crate) fn missing(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// True if the request was rejected before reaching the network
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. } | Self::InvalidParameter { .. }
        )
    }

    /// True if a response arrived but its body could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decompression(_) | Self::Decode(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
