//! Wire types for the ad endpoints.
//!
//! These mirror the server payloads field for field: camelCase names, numbers
//! transmitted as strings, flags as 0/1 integers. The lenient deserializers
//! cover fields the server sends inconsistently typed (e.g. `side` as either
//! an integer or a numeric string).

use serde::Deserialize;

use crate::shared::serde_util;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    pub currency_id: String,
    pub exchange_id: String,
    pub id: String,
    pub org_id: String,
    pub scale: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token_id: String,
    pub exchange_id: String,
    pub id: String,
    pub org_id: String,
    pub scale: String,
    pub sequence: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPreferenceSetResponse {
    pub complete_rate_day_30: String,
    pub has_complete_rate_day_30: i64,
    pub has_national_limit: i64,
    pub has_order_finish_number_day_30: i64,
    pub has_register_time: i64,
    pub has_un_post_ad: i64,
    pub is_email: i64,
    pub is_kyc: i64,
    pub is_mobile: i64,
    pub national_limit: String,
    pub order_finish_number_day_30: i64,
    pub register_time_threshold: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfoResponse {
    pub id: String,
    pub exchange_id: String,
    pub org_id: String,
    pub token_id: String,
    pub currency_id: String,
    pub status: i64,
    #[serde(default)]
    pub buy_ad: Option<serde_json::Value>,
    #[serde(default)]
    pub sell_ad: Option<serde_json::Value>,
    pub buy_fee_rate: String,
    pub sell_fee_rate: String,
    pub currency: CurrencyResponse,
    pub token: TokenResponse,
    pub currency_lower_max_quote: String,
    pub currency_max_quote: String,
    pub currency_min_quote: String,
    pub token_max_quote: String,
    pub token_min_quote: String,
    pub kyc_currency_limit: String,
    pub item_down_range: String,
    pub item_up_range: String,
    pub item_side_limit: i64,
    pub lower_limit_alarm: i64,
    pub upper_limit_alarm: i64,
    pub order_auto_cancel_minute: i64,
    pub order_finish_minute: i64,
    pub trade_side: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTemplateItemResponse {
    pub field_name: String,
    pub label_dialect: String,
    pub placeholder_dialect: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfigResponse {
    pub payment_dialect: String,
    pub payment_name: String,
    pub payment_type: i64,
    pub payment_template_item: Vec<PaymentTemplateItemResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTermResponse {
    pub id: String,
    pub payment_type: String,
    pub payment_config: PaymentConfigResponse,
    pub payment_template_version: f64,
    pub real_name_verified: bool,
    pub visible: i64,
    pub account_no: String,
    pub bank_name: String,
    pub branch_name: String,
    pub business_name: String,
    pub clabe: String,
    pub concept: String,
    pub debit_card_number: String,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: String,
    pub mobile: String,
    pub pay_message: String,
    pub payment_ext1: String,
    pub payment_ext2: String,
    pub payment_ext3: String,
    pub payment_ext4: String,
    pub payment_ext5: String,
    pub payment_ext6: String,
    pub qrcode: String,
    pub real_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAdResponse {
    pub id: String,
    pub account_id: String,
    pub user_id: String,
    pub nick_name: String,
    #[serde(with = "serde_util::int_or_str")]
    pub side: i64,
    pub status: i64,
    pub price_type: i64,
    pub price: String,
    pub premium: String,
    pub quantity: String,
    pub min_amount: String,
    pub max_amount: String,
    pub executed_quantity: String,
    pub frozen_quantity: String,
    pub last_quantity: String,
    pub fee: String,
    #[serde(default, with = "serde_util::opt_stringly")]
    pub fee_rate: Option<String>,
    pub currency_id: String,
    pub token_id: String,
    pub token_name: String,
    pub symbol_info: SymbolInfoResponse,
    pub trading_preference_set: TradingPreferenceSetResponse,
    #[serde(default)]
    pub payment_terms: Option<Vec<PaymentTermResponse>>,
    pub payments: Vec<String>,
    pub payment_period: i64,
    pub remark: String,
    pub item_type: String,
    pub is_online: bool,
    pub create_date: String,
    #[serde(default)]
    pub update_date: Option<String>,
    pub last_logout_time: String,
    pub finish_num: String,
    pub order_num: i64,
    pub recent_order_num: i64,
    pub recent_execute_rate: i64,
    pub verification_order_switch: bool,
    pub verification_order_amount: String,
    pub verification_order_labels: Vec<serde_json::Value>,
    pub version: f64,
    #[serde(default)]
    pub auth_status: Option<i64>,
    #[serde(default)]
    pub auth_tag: Option<Vec<String>>,
    #[serde(default)]
    pub ban: Option<bool>,
    #[serde(default)]
    pub baned: Option<bool>,
    #[serde(default)]
    pub blocked: Option<String>,
    #[serde(default)]
    pub maker_contact: Option<bool>,
    #[serde(default)]
    pub recommend: Option<bool>,
    #[serde(default)]
    pub recommend_tag: Option<String>,
    #[serde(default)]
    pub subsidy_ad: Option<bool>,
    #[serde(default)]
    pub user_mask_id: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Raw `result` payload of the public marketplace query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineAdsResult {
    #[serde(with = "serde_util::int_or_str")]
    pub count: i64,
    pub items: Vec<MarketAdResponse>,
}

/// Raw `result` payload of the personal ads query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyAdsResult {
    #[serde(with = "serde_util::int_or_str")]
    pub count: i64,
    #[serde(with = "serde_util::relaxed_bool")]
    pub hidden_flag: bool,
    pub items: Vec<MarketAdResponse>,
}
