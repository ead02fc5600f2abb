//! Ads sub-client — marketplace and personal ad queries.

use serde_json::json;

use super::wire;
use super::{MyAdsPage, OnlineAdsPage};
use crate::client::P2pClient;
use crate::error::{DecodeError, SdkError};
use crate::http::endpoint;
use crate::shared::{Params, Side};

/// Query for the public marketplace.
///
/// Only `tokenId`, `currencyId` and `side` are declared on the endpoint
/// descriptor; the rest of the fields are assembled into the parameter map
/// and are subject to the dispatcher's filtering.
#[derive(Debug, Clone)]
pub struct OnlineAdsQuery {
    /// Token id, e.g. `USDT`, `BTC`.
    pub token_id: String,
    /// Currency id, e.g. `USD`, `EUR`.
    pub currency_id: String,
    pub side: Side,
    /// Searching amount.
    pub amount: Option<String>,
    pub page: u32,
    pub size: u32,
    /// `OVERALL_RANKING`, `TRADE_VOLUME`, `TRADE_COMPLETION_RATE` or `TRADE_PRICE`.
    pub sort_type: String,
    pub item_region: i64,
    /// Only ads with no verification requirement.
    pub verification_filter: bool,
    /// Only verified makers.
    pub va_maker: bool,
    /// Only ads the caller is eligible to trade.
    pub can_trade: bool,
    /// Only block advertisers.
    pub bulk_maker: bool,
    /// Payment method ids.
    pub payment: Vec<String>,
    pub payment_period: Vec<i64>,
}

impl Default for OnlineAdsQuery {
    fn default() -> Self {
        Self {
            token_id: "USDT".to_string(),
            currency_id: "USD".to_string(),
            side: Side::Buy,
            amount: None,
            page: 1,
            size: 10,
            sort_type: "OVERALL_RANKING".to_string(),
            item_region: 1,
            verification_filter: false,
            va_maker: false,
            can_trade: false,
            bulk_maker: false,
            payment: Vec::new(),
            payment_period: Vec::new(),
        }
    }
}

impl OnlineAdsQuery {
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("tokenId".to_string(), json!(self.token_id));
        params.insert("currencyId".to_string(), json!(self.currency_id));
        // The marketplace endpoint inverts the side encoding relative to the
        // personal-ads endpoint: "1" requests buy ads, "0" sell ads.
        params.insert(
            "side".to_string(),
            json!(match self.side {
                Side::Buy => "1",
                Side::Sell => "0",
            }),
        );
        params.insert(
            "verificationFilter".to_string(),
            json!(if self.verification_filter { 0 } else { 2 }),
        );
        params.insert("vaMaker".to_string(), json!(self.va_maker));
        params.insert("page".to_string(), json!(self.page.to_string()));
        params.insert("size".to_string(), json!(self.size.to_string()));
        params.insert("itemRegion".to_string(), json!(self.item_region));
        params.insert("canTrade".to_string(), json!(self.can_trade));
        params.insert("bulkMaker".to_string(), json!(self.bulk_maker));
        params.insert("payment".to_string(), json!(self.payment));
        params.insert("paymentPeriod".to_string(), json!(self.payment_period));
        params.insert("sortType".to_string(), json!(self.sort_type));
        if let Some(amount) = &self.amount {
            params.insert("amount".to_string(), json!(amount));
        }
        params
    }
}

/// Query for the authenticated user's own ads.
#[derive(Debug, Clone)]
pub struct MyAdsQuery {
    pub side: Side,
    /// Show available ads only.
    pub available: bool,
    pub token_id: String,
    pub currency_id: String,
    pub page: u32,
    pub size: u32,
    /// Restrict to one ad id.
    pub item_id: Option<String>,
}

impl Default for MyAdsQuery {
    fn default() -> Self {
        Self {
            side: Side::Buy,
            available: false,
            token_id: "USDT".to_string(),
            currency_id: "USD".to_string(),
            page: 1,
            size: 10,
            item_id: None,
        }
    }
}

impl MyAdsQuery {
    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert(
            "side".to_string(),
            json!(match self.side {
                Side::Buy => "0",
                Side::Sell => "1",
            }),
        );
        params.insert(
            "status".to_string(),
            json!(if self.available { "2" } else { "1" }),
        );
        params.insert("tokenId".to_string(), json!(self.token_id));
        params.insert("currencyId".to_string(), json!(self.currency_id));
        params.insert("page".to_string(), json!(self.page.to_string()));
        params.insert("size".to_string(), json!(self.size.to_string()));
        if let Some(item_id) = &self.item_id {
            params.insert("itemId".to_string(), json!(item_id));
        }
        params
    }
}

pub struct Ads<'a> {
    pub(crate) client: &'a P2pClient,
}

impl Ads<'_> {
    /// Public marketplace ads matching the query.
    pub async fn online(&self, query: &OnlineAdsQuery) -> Result<OnlineAdsPage, SdkError> {
        let payload = self
            .client
            .http
            .dispatch(&endpoint::GET_ONLINE_ADS, &query.params())
            .await?;

        let result: wire::OnlineAdsResult = serde_json::from_value(payload)
            .map_err(|e| DecodeError::payload("OnlineAdsPage", e))?;

        Ok(OnlineAdsPage::try_from(result)?)
    }

    /// The authenticated user's own ads.
    pub async fn mine(&self, query: &MyAdsQuery) -> Result<MyAdsPage, SdkError> {
        let payload = self
            .client
            .http
            .dispatch(&endpoint::GET_ADS_LIST, &query.params())
            .await?;

        let result: wire::MyAdsResult =
            serde_json::from_value(payload).map_err(|e| DecodeError::payload("MyAdsPage", e))?;

        Ok(MyAdsPage::try_from(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_query_side_encoding_is_inverted() {
        let buy = OnlineAdsQuery::default().params();
        assert_eq!(buy["side"], "1");

        let sell = OnlineAdsQuery {
            side: Side::Sell,
            ..OnlineAdsQuery::default()
        }
        .params();
        assert_eq!(sell["side"], "0");
    }

    #[test]
    fn test_online_query_defaults() {
        let params = OnlineAdsQuery::default().params();
        assert_eq!(params["tokenId"], "USDT");
        assert_eq!(params["currencyId"], "USD");
        assert_eq!(params["verificationFilter"], 2);
        assert_eq!(params["page"], "1");
        assert!(!params.contains_key("amount"));
    }

    #[test]
    fn test_my_ads_query_encoding() {
        let params = MyAdsQuery {
            side: Side::Sell,
            available: true,
            item_id: Some("7777".to_string()),
            ..MyAdsQuery::default()
        }
        .params();
        assert_eq!(params["side"], "1");
        assert_eq!(params["status"], "2");
        assert_eq!(params["itemId"], "7777");
    }
}
