//! The fixed endpoint catalog.
//!
//! Each supported operation is declared once as a `const` descriptor: path,
//! verb, and the parameter names the server recognizes for it. The catalog is
//! read-only configuration with no lifecycle beyond process start.

use crate::shared::Params;

/// HTTP verb for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Declaration of one API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: Method,
    /// Parameter names the server recognizes. An empty list means no
    /// filtering is applied: every caller-supplied key is transmitted.
    pub allowed_params: &'static [&'static str],
}

impl Endpoint {
    /// Restrict `params` to the declared parameter set.
    ///
    /// Descriptors with an empty `allowed_params` pass the map through
    /// unchanged; all others drop every key outside the set.
    pub fn filter(&self, params: &Params) -> Params {
        if self.allowed_params.is_empty() {
            return params.clone();
        }
        params
            .iter()
            .filter(|(key, _)| self.allowed_params.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Wallet balance per coin for one account type.
pub const GET_CURRENT_BALANCE: Endpoint = Endpoint {
    path: "/v5/asset/transfer/query-account-coins-balance",
    method: Method::Get,
    allowed_params: &["accountType"],
};

/// The authenticated user's P2P profile.
pub const GET_ACCOUNT_INFORMATION: Endpoint = Endpoint {
    path: "/v5/p2p/user/personal/info",
    method: Method::Post,
    allowed_params: &[],
};

/// The authenticated user's own ads.
pub const GET_ADS_LIST: Endpoint = Endpoint {
    path: "/v5/p2p/item/personal/list",
    method: Method::Post,
    allowed_params: &[],
};

/// Public marketplace ads.
pub const GET_ONLINE_ADS: Endpoint = Endpoint {
    path: "/v5/p2p/item/online",
    method: Method::Post,
    allowed_params: &["tokenId", "currencyId", "side"],
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, serde_json::Value)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_filter_drops_undeclared_keys() {
        let supplied = params(&[
            ("accountType", json!("FUND")),
            ("withBonus", json!("1")),
            ("memberId", json!("123")),
        ]);
        let filtered = GET_CURRENT_BALANCE.filter(&supplied);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered["accountType"], json!("FUND"));
    }

    #[test]
    fn test_filter_keeps_every_declared_key() {
        let supplied = params(&[
            ("tokenId", json!("USDT")),
            ("currencyId", json!("USD")),
            ("side", json!("1")),
            ("page", json!("1")),
        ]);
        let filtered = GET_ONLINE_ADS.filter(&supplied);
        assert_eq!(filtered.len(), 3);
        assert!(!filtered.contains_key("page"));
    }

    #[test]
    fn test_empty_declaration_passes_everything_through() {
        let supplied = params(&[
            ("side", json!("0")),
            ("status", json!("1")),
            ("anythingAtAll", json!(42)),
        ]);
        let filtered = GET_ADS_LIST.filter(&supplied);
        assert_eq!(filtered, supplied);
    }
}
