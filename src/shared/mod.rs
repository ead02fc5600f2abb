//! Shared types and utilities used across all domain modules.

pub mod serde_util;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A request parameter map.
///
/// `BTreeMap` keeps iteration order sorted by key, which makes both the query
/// string and the JSON body canonical: identical logical requests always
/// encode — and therefore sign — identically.
pub type Params = BTreeMap<String, serde_json::Value>;

// ─── Side ────────────────────────────────────────────────────────────────────

/// Ad side: the maker buys or sells the token.
///
/// The wire encodes the side as an integer; `0` means buy and every other
/// value decodes as sell, matching the server's observed behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn from_code(code: i64) -> Self {
        if code == 0 {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_code() {
        assert_eq!(Side::from_code(0), Side::Buy);
        assert_eq!(Side::from_code(1), Side::Sell);
        // Unknown codes decode as sell.
        assert_eq!(Side::from_code(7), Side::Sell);
        assert_eq!(Side::from_code(-1), Side::Sell);
    }

    #[test]
    fn test_side_serde() {
        let json = serde_json::to_string(&Side::Buy).unwrap();
        assert_eq!(json, "\"buy\"");
        let back: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(back, Side::Sell);
    }
}
