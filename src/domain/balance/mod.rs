//! Balance domain — per-coin wallet snapshots.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::Serialize;

/// Wallet balance for one coin at the moment of the call.
///
/// Blank wire values decode as `None`, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinBalance {
    pub name: String,
    pub wallet_balance: Option<Decimal>,
    pub transfer_balance: Option<Decimal>,
    pub bonus: Option<Decimal>,
}

/// The full balance query result: account identity plus one entry per coin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSnapshot {
    pub account_type: String,
    pub member_id: i64,
    pub balances: Vec<CoinBalance>,
}
