//! Wire types for the balance endpoint.

use serde::Deserialize;

/// Raw `result` payload of the balance query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResult {
    pub account_type: String,
    pub member_id: String,
    pub balance: Vec<CoinBalanceResponse>,
}

/// Raw per-coin entry. Every amount is a numeric string; blank means absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalanceResponse {
    pub coin: String,
    pub wallet_balance: String,
    pub transfer_balance: String,
    pub bonus: String,
}
