//! Interpretation of the server's generic response envelope.
//!
//! Every endpoint wraps its payload in `{ retCode, retMsg, result }`. The
//! numeric code is authoritative: `retCode == 0` is success even when a
//! message is also present. This module knows nothing about entity shapes —
//! it only unwraps the outer envelope.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiFailure, ProtocolError, SdkError};

/// Raw envelope. The generic `code`/`message` spellings are accepted as
/// aliases; some gateway responses use them instead of the v5 names.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "retCode", alias = "code")]
    code: Option<i64>,
    #[serde(rename = "retMsg", alias = "message")]
    message: Option<String>,
    result: Option<Value>,
}

/// Interpret a response body.
///
/// Returns the `result` payload on `retCode == 0`, [`SdkError::Api`] for any
/// other code (message verbatim), and [`SdkError::Protocol`] when the body is
/// not JSON or carries no numeric code.
pub fn interpret(body: &str) -> Result<Value, SdkError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| SdkError::Protocol(ProtocolError::Json(e)))?;

    let code = envelope
        .code
        .ok_or(SdkError::Protocol(ProtocolError::MissingCode))?;

    if code != 0 {
        return Err(SdkError::Api(ApiFailure {
            code,
            message: envelope.message.unwrap_or_default(),
        }));
    }

    Ok(envelope.result.unwrap_or(Value::Null))
}
