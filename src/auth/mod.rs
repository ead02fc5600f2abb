//! Authentication — API credentials and request signing.
//!
//! Every P2P endpoint is private: each request carries the key id, a
//! millisecond timestamp, a receive-window tolerance, and an HMAC-SHA256
//! signature over the canonical parameter encoding. See [`sign`].
//!
//! The secret is stored in a [`SecretString`] which zeroizes memory on drop;
//! it is never exposed through the public API.

pub mod sign;

use secrecy::{ExposeSecret, SecretString};

pub use sign::{sign_request, RequestSignature};

/// API key id + secret for the P2P endpoints.
pub struct ApiCredentials {
    api_key: String,
    api_secret: SecretString,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl Clone for ApiCredentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = ApiCredentials::new("key-id", "top-secret");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("key-id"));
        assert!(!rendered.contains("top-secret"));
    }

    #[test]
    fn test_credentials_clone_preserves_secret() {
        let creds = ApiCredentials::new("key-id", "top-secret");
        let cloned = creds.clone();
        assert_eq!(cloned.secret(), "top-secret");
    }
}
