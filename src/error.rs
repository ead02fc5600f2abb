//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("transport error: {0}")]
    Http(#[from] HttpError),

    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Api(#[from] ApiFailure),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Transport-layer errors. Never produced for a well-formed server response.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("unauthorized")]
    Unauthorized,

    #[error("rate limited")]
    RateLimited,

    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Transport(err)
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("api secret is missing or empty")]
    MissingSecret,
}

/// The response body could not be interpreted as an API envelope.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response envelope carries no numeric status code")]
    MissingCode,
}

/// A well-formed server-reported failure (`retCode != 0`).
///
/// This is a normal, expected outcome the caller branches on — the code and
/// message are carried verbatim from the envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("server returned code {code}: {message}")]
pub struct ApiFailure {
    pub code: i64,
    pub message: String,
}

/// A success envelope whose payload does not match the expected entity shape.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{entity} payload did not match the expected shape: {source}")]
    Payload {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{entity}.{field}: {value:?} is not a valid integer")]
    Int {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{entity}.{field}: {value:?} is not a valid decimal")]
    Decimal {
        entity: &'static str,
        field: &'static str,
        value: String,
    },
}

impl DecodeError {
    pub(crate) fn payload(entity: &'static str, source: serde_json::Error) -> Self {
        DecodeError::Payload { entity, source }
    }
}
