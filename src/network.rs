//! Network URL constants for the Bybit P2P SDK.

/// Mainnet REST API base URL.
pub const MAINNET_API_URL: &str = "https://api.bybit.com";

/// Testnet REST API base URL.
pub const TESTNET_API_URL: &str = "https://api-testnet.bybit.com";

/// Default receive-window tolerance, in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;
