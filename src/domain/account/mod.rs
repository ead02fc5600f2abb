//! Account domain — the authenticated user's P2P profile.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::Serialize;

/// One named privilege granted to the account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivilegeInfo {
    pub name: String,
    pub data: String,
}

/// The account profile snapshot.
///
/// Identifiers and epoch timestamps are transmitted as strings and parsed to
/// integers; `email`/`mobile` collapse blanks to `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountInfo {
    pub account_create_days: i64,
    pub account_id: i64,
    pub auth_status: Option<i64>,
    pub average_release_time: i64,
    pub average_transfer_time: i64,
    pub bad_appraise_count: i64,
    pub blocked: String,
    pub can_sub_online: bool,
    pub contact_config: bool,
    pub contact_count: i64,
    pub cur_privilege_info: Vec<PrivilegeInfo>,
    pub default_nickname: bool,
    pub email: Option<String>,
    pub execute_num: i64,
    pub first_trade_days: i64,
    pub good_appraise_count: i64,
    pub good_appraise_rate: Decimal,
    pub has_un_post_ad: bool,
    pub is_online: bool,
    pub kyc_country_code: String,
    pub kyc_level: i64,
    pub last_30_trade_currency: String,
    pub last_logout_time: i64,
    pub lost_role_affected: bool,
    pub mobile: Option<String>,
    pub nickname: String,
    pub open_api_switch: bool,
    pub order_num: i64,
    pub payment_count: i64,
    pub payment_real_name_uneditable: bool,
    pub real_name: String,
    pub real_name_en: String,
    pub real_name_mask: String,
    pub recent_finish_count: i64,
    pub recent_rate: f64,
    pub recent_trade_amount: Option<Decimal>,
    pub register_time: i64,
    pub total_finish_buy_count: i64,
    pub total_finish_count: i64,
    pub total_finish_sell_count: i64,
    pub total_trade_amount: Option<Decimal>,
    pub user_cancel_count_limit: i64,
    pub user_cur_privilege: Vec<serde_json::Value>,
    pub user_id: i64,
    pub user_tag: Vec<serde_json::Value>,
    pub user_type: String,
    pub vip_level: i64,
    pub vip_profit: String,
    pub white_flag: i64,
}
