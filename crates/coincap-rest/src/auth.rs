//! API key for authenticated requests
//!
//! CoinCap accepts an optional API key sent as `Authorization: Bearer <key>`.
//! Keys raise the rate limit but are not needed for any endpoint.
//!
//! The key is held in a `secrecy::SecretString`, so it is zeroized on drop
//! and never shows up in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{RestError, RestResult};

/// Environment variable read by [`ApiKey::from_env`]
pub const API_KEY_ENV: &str = "COINCAP_API_KEY";

/// Bearer token for the CoinCap API
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Create an API key
    ///
    /// Fails if the key is empty or contains characters that are not
    /// allowed in an HTTP header value.
    pub fn new(key: impl Into<String>) -> RestResult<Self> {
        let key = key.into();
        let trimmed = key.trim();

        if trimmed.is_empty() {
            return Err(RestError::InvalidApiKey("key is empty".to_string()));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(RestError::InvalidApiKey(
                "key contains whitespace or non-ASCII characters".to_string(),
            ));
        }

        Ok(Self {
            key: SecretString::from(trimmed.to_string()),
        })
    }

    /// Read the key from `COINCAP_API_KEY`
    pub fn from_env() -> RestResult<Self> {
        let key =
            std::env::var(API_KEY_ENV).map_err(|_| RestError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        Self::new(key)
    }

    /// Value for the `Authorization` header
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.key.expose_secret())
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self {
            key: SecretString::from(self.key.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("key", &"[REDACTED]").finish()
    }
}
