//! Wire types for the account information endpoint.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegeInfoResponse {
    pub name: String,
    pub data: String,
}

/// Raw `result` payload of the account information endpoint. Identifiers and
/// epoch timestamps arrive as numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfoResponse {
    pub account_create_days: i64,
    pub account_id: String,
    #[serde(default)]
    pub auth_status: Option<i64>,
    pub average_release_time: String,
    pub average_transfer_time: String,
    pub bad_appraise_count: i64,
    pub blocked: String,
    pub can_sub_online: bool,
    pub contact_config: bool,
    pub contact_count: i64,
    pub cur_privilege_info: Vec<PrivilegeInfoResponse>,
    pub default_nick_name: bool,
    pub email: String,
    pub execute_num: i64,
    pub first_trade_days: i64,
    pub good_appraise_count: i64,
    pub good_appraise_rate: String,
    pub has_un_post_ad: i64,
    pub is_online: bool,
    pub kyc_country_code: String,
    pub kyc_level: i64,
    #[serde(rename = "last30TradeCurrency")]
    pub last_30_trade_currency: String,
    pub last_logout_time: String,
    pub lost_role_affected: bool,
    pub mobile: String,
    pub nick_name: String,
    pub open_api_switch: i64,
    pub order_num: i64,
    pub payment_count: i64,
    pub payment_real_name_uneditable: bool,
    pub real_name: String,
    pub real_name_en: String,
    pub real_name_mask: String,
    pub recent_finish_count: i64,
    pub recent_rate: f64,
    pub recent_trade_amount: String,
    pub register_time: String,
    pub total_finish_buy_count: i64,
    pub total_finish_count: i64,
    pub total_finish_sell_count: i64,
    pub total_trade_amount: String,
    pub user_cancel_count_limit: i64,
    pub user_cur_privilege: Vec<serde_json::Value>,
    pub user_id: String,
    pub user_tag: Vec<serde_json::Value>,
    pub user_type: String,
    pub vip_level: i64,
    pub vip_profit: String,
    pub white_flag: i64,
}
