//! High-level client — `P2pClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods.

use std::time::Duration;

use crate::auth::ApiCredentials;
use crate::domain::account::client::Account;
use crate::domain::ad::client::Ads;
use crate::domain::balance::client::Balances;
use crate::error::SdkError;
use crate::http::P2pHttp;
use crate::network::{DEFAULT_RECV_WINDOW_MS, MAINNET_API_URL};

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::ad::client::Ads as AdsClient;
pub use crate::domain::balance::client::Balances as BalancesClient;

/// The primary entry point for the Bybit P2P SDK.
///
/// Holds no mutable session state; the underlying transport handle is
/// reusable and the client is cheap to clone.
pub struct P2pClient {
    pub(crate) http: P2pHttp,
}

impl P2pClient {
    pub fn builder() -> P2pClientBuilder {
        P2pClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn balances(&self) -> Balances<'_> {
        Balances { client: self }
    }

    pub fn ads(&self) -> Ads<'_> {
        Ads { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct P2pClientBuilder {
    base_url: String,
    credentials: Option<ApiCredentials>,
    recv_window: u64,
    timeout: Duration,
}

impl Default for P2pClientBuilder {
    fn default() -> Self {
        Self {
            base_url: MAINNET_API_URL.to_string(),
            credentials: None,
            recv_window: DEFAULT_RECV_WINDOW_MS,
            timeout: Duration::from_secs(10),
        }
    }
}

impl P2pClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Point the client at the testnet gateway.
    pub fn testnet(mut self) -> Self {
        self.base_url = crate::network::TESTNET_API_URL.to_string();
        self
    }

    pub fn credentials(mut self, credentials: ApiCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Receive-window tolerance in milliseconds.
    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    /// Per-request timeout. A timed-out request surfaces as a transport
    /// error.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<P2pClient, SdkError> {
        let credentials = self
            .credentials
            .unwrap_or_else(|| ApiCredentials::new("", ""));
        let http = P2pHttp::new(&self.base_url, credentials, self.recv_window, self.timeout)?;
        Ok(P2pClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = P2pClient::builder()
            .credentials(ApiCredentials::new("key", "secret"))
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), MAINNET_API_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = P2pClient::builder()
            .base_url("https://api.example.com/")
            .credentials(ApiCredentials::new("key", "secret"))
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "https://api.example.com");
    }
}
