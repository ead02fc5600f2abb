//! HMAC-SHA256 request signing.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::ApiCredentials;
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// The signature and the values that went into it, ready to be attached as
/// wire headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    /// Millisecond epoch timestamp the request was signed at.
    pub timestamp: i64,
    /// Receive-window tolerance in milliseconds.
    pub recv_window: u64,
    /// Lowercase hex HMAC-SHA256 signature.
    pub signature: String,
}

/// Sign one request.
///
/// The sign string is the deterministic concatenation
/// `{timestamp}{api_key}{recv_window}{canonical_params}`, where
/// `canonical_params` is the sorted-key query string for GET requests and the
/// compact sorted-key JSON body for POST requests. The same canonical string
/// is transmitted on the wire, so the server verifies against identical
/// bytes.
pub fn sign_request(
    credentials: &ApiCredentials,
    timestamp: i64,
    recv_window: u64,
    canonical_params: &str,
) -> Result<RequestSignature, AuthError> {
    let secret = credentials.secret();
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let payload = format!(
        "{timestamp}{}{recv_window}{canonical_params}",
        credentials.api_key()
    );

    // HMAC accepts keys of any length, so construction cannot fail for a
    // non-empty secret.
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::MissingSecret)?;
    mac.update(payload.as_bytes());

    Ok(RequestSignature {
        timestamp,
        recv_window,
        signature: hex::encode(mac.finalize().into_bytes()),
    })
}
