//! Low-level HTTP dispatcher — `P2pHttp`.
//!
//! One signed network call per dispatch, no internal retries. Holds no
//! mutable state beyond the reusable `reqwest::Client`, so any number of
//! dispatches may run concurrently.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::auth::{sign_request, ApiCredentials};
use crate::error::{HttpError, SdkError};
use crate::http::endpoint::{Endpoint, Method};
use crate::http::envelope;
use crate::shared::Params;

/// Low-level client for the signed P2P REST endpoints.
pub struct P2pHttp {
    base_url: String,
    client: Client,
    credentials: ApiCredentials,
    recv_window: u64,
}

impl P2pHttp {
    pub fn new(
        base_url: &str,
        credentials: ApiCredentials,
        recv_window: u64,
        timeout: Duration,
    ) -> Result<Self, SdkError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(HttpError::from)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
            recv_window,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one API operation.
    ///
    /// Filters `params` to the endpoint's declared set, canonically encodes
    /// them (query string for GET, JSON body for POST), signs, performs
    /// exactly one network attempt, and interprets the response envelope.
    /// Returns the `result` payload on success.
    pub async fn dispatch(&self, endpoint: &Endpoint, params: &Params) -> Result<Value, SdkError> {
        let filtered = endpoint.filter(params);

        let canonical = match endpoint.method {
            Method::Get => canonical_query(&filtered),
            Method::Post => canonical_json(&filtered),
        };

        let timestamp = Utc::now().timestamp_millis();
        let signature = sign_request(&self.credentials, timestamp, self.recv_window, &canonical)?;

        debug!(
            path = endpoint.path,
            params = filtered.len(),
            "dispatching P2P request"
        );

        let url = match endpoint.method {
            Method::Get if canonical.is_empty() => {
                format!("{}{}", self.base_url, endpoint.path)
            }
            Method::Get => format!("{}{}?{}", self.base_url, endpoint.path, canonical),
            Method::Post => format!("{}{}", self.base_url, endpoint.path),
        };

        let mut request = match endpoint.method {
            Method::Get => self.client.get(&url),
            Method::Post => self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                // The body must be the exact bytes that were signed.
                .body(canonical),
        };

        request = request
            .header("X-BAPI-API-KEY", self.credentials.api_key())
            .header("X-BAPI-TIMESTAMP", signature.timestamp.to_string())
            .header("X-BAPI-RECV-WINDOW", signature.recv_window.to_string())
            .header("X-BAPI-SIGN", &signature.signature)
            .header("X-BAPI-SIGN-TYPE", "2");

        let response = request.send().await.map_err(HttpError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(HttpError::from)?;

        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => HttpError::Unauthorized,
                429 => HttpError::RateLimited,
                code => HttpError::Status { status: code, body },
            }
            .into());
        }

        envelope::interpret(&body)
    }
}

/// Sorted-key `k=v&k=v` encoding, used both for the GET query string and its
/// signature. List values are comma-joined, matching the server's convention
/// for multi-valued GET parameters.
pub(crate) fn canonical_query(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(&query_value(value))))
        .collect::<Vec<_>>()
        .join("&")
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(query_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Compact JSON encoding of the parameter map. `Params` is a `BTreeMap`, so
/// keys serialize in sorted order and the output is byte-stable.
pub(crate) fn canonical_json(params: &Params) -> String {
    // Serializing a map of already-valid `Value`s cannot fail.
    serde_json::to_string(params).unwrap_or_else(|_| "{}".to_string())
}
