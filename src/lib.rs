//! # Bybit P2P SDK
//!
//! An async Rust client for the Bybit P2P trading REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared types, domain models, unified errors
//! 2. **Auth** — credentials + HMAC-SHA256 request signing
//! 3. **HTTP** — endpoint catalog, envelope interpretation, `P2pHttp` dispatcher
//! 4. **High-Level Client** — `P2pClient` with nested sub-clients
//!
//! Every endpoint is private and signed; responses arrive in a generic
//! `{ retCode, retMsg, result }` envelope and are mapped into owned,
//! immutable domain entities. A server-reported failure surfaces as
//! [`error::ApiFailure`] with the code and message verbatim; transport,
//! protocol and decoding problems each have their own error class.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bybit_p2p_sdk::prelude::*;
//!
//! let client = P2pClient::builder()
//!     .credentials(ApiCredentials::new("api-key", "api-secret"))
//!     .build()?;
//!
//! let balances = client.balances().current(&BalanceQuery::default()).await?;
//! let ads = client.ads().online(&OnlineAdsQuery::default()).await?;
//! ```
#![cfg_attr(test, recursion_limit = "256")]

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials and request signing.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Endpoint catalog, envelope interpretation, dispatcher.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `P2pClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Params, Side};

    // Domain types — account
    pub use crate::domain::account::{AccountInfo, PrivilegeInfo};

    // Domain types — balance
    pub use crate::domain::balance::{BalanceSnapshot, CoinBalance};

    // Domain types — ads
    pub use crate::domain::ad::{
        Currency, MarketAd, MyAdsPage, OnlineAdsPage, PaymentConfig, PaymentTemplateItem,
        PaymentTerm, SymbolInfo, Token, TradingPreferenceSet,
    };

    // Queries
    pub use crate::domain::ad::client::{MyAdsQuery, OnlineAdsQuery};
    pub use crate::domain::balance::client::BalanceQuery;

    // Errors
    pub use crate::error::{ApiFailure, SdkError};

    // Network
    pub use crate::network::{MAINNET_API_URL, TESTNET_API_URL};

    // Auth
    pub use crate::auth::ApiCredentials;

    // Client + sub-clients
    pub use crate::client::{AccountClient, AdsClient, BalancesClient, P2pClient, P2pClientBuilder};
}
