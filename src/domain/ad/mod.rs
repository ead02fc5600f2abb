//! Ad domain — marketplace ads and their owned configuration tree.
//!
//! A [`MarketAd`] owns its [`SymbolInfo`] (which in turn owns the
//! [`Currency`] and [`Token`] metadata), its [`TradingPreferenceSet`], and
//! zero or more [`PaymentTerm`]s. Everything is built in one pass from one
//! decoded payload; there are no back-references and no shared state.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::shared::Side;

// ─── Symbol metadata ─────────────────────────────────────────────────────────

/// Fiat currency metadata. `scale` is a unit-less integer exponent and is
/// never coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Currency {
    pub currency_id: String,
    pub exchange_id: i64,
    pub id: i64,
    pub org_id: i64,
    pub scale: i64,
}

/// Crypto token metadata. The wire transmits `scale` untyped as a string; it
/// is carried through uncoerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub token_id: String,
    pub exchange_id: i64,
    pub id: i64,
    pub org_id: i64,
    pub scale: String,
    pub sequence: i64,
}

/// The maker's trust thresholds for counterparties.
///
/// Every `has_*`/`is_*` flag arrives as a 0/1 integer and is normalized to a
/// boolean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradingPreferenceSet {
    pub complete_rate_day_30: String,
    pub has_complete_rate_day_30: bool,
    pub has_national_limit: bool,
    pub has_order_finish_number_day_30: bool,
    pub has_register_time: bool,
    pub has_un_post_ad: bool,
    pub is_email: bool,
    pub is_kyc: bool,
    pub is_mobile: bool,
    pub national_limit: String,
    pub order_finish_number_day_30: i64,
    pub register_time_threshold: i64,
}

/// Trading-pair configuration embedded in an ad. Owns its [`Currency`] and
/// [`Token`] by value; its lifetime is bound to the containing ad.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolInfo {
    pub id: i64,
    pub exchange_id: i64,
    pub org_id: i64,
    pub token_id: String,
    pub currency_id: String,
    pub status: i64,
    pub buy_ad: Option<serde_json::Value>,
    pub sell_ad: Option<serde_json::Value>,
    pub buy_fee_rate: String,
    pub sell_fee_rate: String,
    pub currency: Currency,
    pub token: Token,
    pub currency_lower_max_quote: Decimal,
    pub currency_max_quote: Decimal,
    pub currency_min_quote: Decimal,
    pub token_max_quote: Decimal,
    pub token_min_quote: Decimal,
    pub kyc_currency_limit: Decimal,
    pub item_down_range: Decimal,
    pub item_up_range: Decimal,
    pub item_side_limit: i64,
    pub lower_limit_alarm: i64,
    pub upper_limit_alarm: i64,
    pub order_auto_cancel_minute: i64,
    pub order_finish_minute: i64,
    pub trade_side: i64,
}

// ─── Payment tree ────────────────────────────────────────────────────────────

/// One field of a payment-method template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentTemplateItem {
    pub field_name: String,
    pub label_dialect: String,
    pub placeholder_dialect: String,
}

/// Payment-method descriptor; owns its ordered template items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentConfig {
    pub payment_dialect: String,
    pub payment_name: String,
    pub payment_type: i64,
    pub template_items: Vec<PaymentTemplateItem>,
}

/// A concrete payment method attached to an ad; owns exactly one
/// [`PaymentConfig`].
///
/// Every optional textual field collapses a blank or whitespace-only value to
/// `None` — callers branch on absence, never on empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentTerm {
    pub id: i64,
    pub payment_type: String,
    pub payment_config: PaymentConfig,
    pub payment_template_version: f64,
    pub real_name_verified: bool,
    pub visible: bool,
    pub account_no: Option<String>,
    pub bank_name: Option<String>,
    pub branch_name: Option<String>,
    pub business_name: Option<String>,
    pub clabe: Option<String>,
    pub concept: Option<String>,
    pub debit_card_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub second_last_name: Option<String>,
    pub mobile: Option<String>,
    pub pay_message: Option<String>,
    pub payment_ext_1: Option<String>,
    pub payment_ext_2: Option<String>,
    pub payment_ext_3: Option<String>,
    pub payment_ext_4: Option<String>,
    pub payment_ext_5: Option<String>,
    pub payment_ext_6: Option<String>,
    pub qrcode: Option<String>,
    pub real_name: Option<String>,
}

// ─── MarketAd ────────────────────────────────────────────────────────────────

/// A traded offer on the marketplace — a read-only snapshot at the moment of
/// the call.
///
/// The blank-capable quantity fields (`executed_quantity`, `fee`,
/// `frozen_quantity`, `last_quantity`) decode as `None` when blank, never as
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAd {
    pub id: i64,
    pub account_id: i64,
    pub user_id: String,
    pub nickname: String,
    pub side: Side,
    pub status: i64,
    pub price_type: i64,
    pub price: Decimal,
    pub premium: bool,
    pub quantity: Decimal,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub executed_quantity: Option<Decimal>,
    pub frozen_quantity: Option<Decimal>,
    pub last_quantity: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub fee_rate: Option<String>,
    pub currency_id: String,
    pub token_id: String,
    pub token_name: String,
    pub symbol_info: SymbolInfo,
    pub trading_preference_set: TradingPreferenceSet,
    pub payment_terms: Vec<PaymentTerm>,
    pub payments: Vec<String>,
    pub payment_period: i64,
    pub remark: String,
    pub item_type: String,
    pub is_online: bool,
    pub create_date: i64,
    pub update_date: Option<String>,
    pub last_logout_time: i64,
    pub finish_num: String,
    pub order_num: i64,
    pub recent_order_num: i64,
    pub recent_execute_rate: i64,
    pub verification_order_switch: bool,
    pub verification_order_amount: i64,
    pub verification_order_labels: Vec<serde_json::Value>,
    pub version: f64,
    pub auth_status: Option<i64>,
    pub auth_tag: Option<Vec<String>>,
    pub ban: Option<bool>,
    pub baned: Option<bool>,
    pub blocked: Option<String>,
    pub maker_contact: Option<bool>,
    pub recommend: Option<bool>,
    pub recommend_tag: Option<String>,
    pub subsidy_ad: Option<bool>,
    pub user_mask_id: Option<String>,
    pub user_type: Option<String>,
}

// ─── Pages ───────────────────────────────────────────────────────────────────

/// Result page of the public marketplace query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnlineAdsPage {
    pub total: i64,
    pub items: Vec<MarketAd>,
}

/// Result page of the personal ads query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MyAdsPage {
    pub count: i64,
    pub hidden: bool,
    pub items: Vec<MarketAd>,
}
