//! Balances sub-client.

use serde_json::json;

use super::wire;
use super::BalanceSnapshot;
use crate::client::P2pClient;
use crate::error::{DecodeError, SdkError};
use crate::http::endpoint;
use crate::shared::Params;

/// Query for the balance endpoint.
///
/// Only `accountType` is declared on the endpoint descriptor; the remaining
/// fields are assembled into the parameter map and are subject to the
/// dispatcher's filtering.
#[derive(Debug, Clone)]
pub struct BalanceQuery {
    /// Account type: `UNIFIED`, `FUND` or `CONTRACT`.
    pub account_type: String,
    pub with_bonus: bool,
    /// Required when a master key queries a sub-account balance.
    pub member_id: Option<String>,
    /// Coin names; transmitted comma-joined.
    pub coins: Vec<String>,
}

impl Default for BalanceQuery {
    fn default() -> Self {
        Self {
            account_type: "FUND".to_string(),
            with_bonus: false,
            member_id: None,
            coins: Vec::new(),
        }
    }
}

impl BalanceQuery {
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("accountType".to_string(), json!(self.account_type));
        params.insert(
            "withBonus".to_string(),
            json!(if self.with_bonus { "1" } else { "0" }),
        );
        if let Some(member_id) = &self.member_id {
            params.insert("memberId".to_string(), json!(member_id));
        }
        if !self.coins.is_empty() {
            params.insert("coin".to_string(), json!(self.coins.join(",")));
        }
        params
    }
}

pub struct Balances<'a> {
    pub(crate) client: &'a P2pClient,
}

impl Balances<'_> {
    /// Wallet balance per coin for the queried account type.
    pub async fn current(&self, query: &BalanceQuery) -> Result<BalanceSnapshot, SdkError> {
        let payload = self
            .client
            .http
            .dispatch(&endpoint::GET_CURRENT_BALANCE, &query.params())
            .await?;

        let result: wire::BalanceResult = serde_json::from_value(payload)
            .map_err(|e| DecodeError::payload("BalanceSnapshot", e))?;

        Ok(BalanceSnapshot::try_from(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_params() {
        let params = BalanceQuery::default().params();
        assert_eq!(params["accountType"], "FUND");
        assert_eq!(params["withBonus"], "0");
        assert!(!params.contains_key("memberId"));
        assert!(!params.contains_key("coin"));
    }

    #[test]
    fn test_coins_are_comma_joined() {
        let query = BalanceQuery {
            coins: vec!["USDT".to_string(), "BTC".to_string()],
            with_bonus: true,
            ..BalanceQuery::default()
        };
        let params = query.params();
        assert_eq!(params["coin"], "USDT,BTC");
        assert_eq!(params["withBonus"], "1");
    }
}
