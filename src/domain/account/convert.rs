//! Conversion: account wire types → domain types.

use super::wire;
use super::{AccountInfo, PrivilegeInfo};
use crate::domain::{decimal_field, flag, int_field, opt_decimal_field, opt_text};
use crate::error::DecodeError;

impl From<wire::PrivilegeInfoResponse> for PrivilegeInfo {
    fn from(source: wire::PrivilegeInfoResponse) -> Self {
        PrivilegeInfo {
            name: source.name,
            data: source.data,
        }
    }
}

impl TryFrom<wire::AccountInfoResponse> for AccountInfo {
    type Error = DecodeError;

    fn try_from(source: wire::AccountInfoResponse) -> Result<Self, Self::Error> {
        const E: &str = "AccountInfo";
        Ok(AccountInfo {
            account_create_days: source.account_create_days,
            account_id: int_field(E, "accountId", &source.account_id)?,
            auth_status: source.auth_status,
            average_release_time: int_field(E, "averageReleaseTime", &source.average_release_time)?,
            average_transfer_time: int_field(
                E,
                "averageTransferTime",
                &source.average_transfer_time,
            )?,
            bad_appraise_count: source.bad_appraise_count,
            blocked: source.blocked,
            can_sub_online: source.can_sub_online,
            contact_config: source.contact_config,
            contact_count: source.contact_count,
            cur_privilege_info: source
                .cur_privilege_info
                .into_iter()
                .map(PrivilegeInfo::from)
                .collect(),
            default_nickname: source.default_nick_name,
            email: opt_text(source.email),
            execute_num: source.execute_num,
            first_trade_days: source.first_trade_days,
            good_appraise_count: source.good_appraise_count,
            good_appraise_rate: decimal_field(E, "goodAppraiseRate", &source.good_appraise_rate)?,
            has_un_post_ad: flag(source.has_un_post_ad),
            is_online: source.is_online,
            kyc_country_code: source.kyc_country_code,
            kyc_level: source.kyc_level,
            last_30_trade_currency: source.last_30_trade_currency,
            last_logout_time: int_field(E, "lastLogoutTime", &source.last_logout_time)?,
            lost_role_affected: source.lost_role_affected,
            mobile: opt_text(source.mobile),
            nickname: source.nick_name,
            open_api_switch: flag(source.open_api_switch),
            order_num: source.order_num,
            payment_count: source.payment_count,
            payment_real_name_uneditable: source.payment_real_name_uneditable,
            real_name: source.real_name,
            real_name_en: source.real_name_en,
            real_name_mask: source.real_name_mask,
            recent_finish_count: source.recent_finish_count,
            recent_rate: source.recent_rate,
            recent_trade_amount: opt_decimal_field(
                E,
                "recentTradeAmount",
                &source.recent_trade_amount,
            )?,
            register_time: int_field(E, "registerTime", &source.register_time)?,
            total_finish_buy_count: source.total_finish_buy_count,
            total_finish_count: source.total_finish_count,
            total_finish_sell_count: source.total_finish_sell_count,
            total_trade_amount: opt_decimal_field(E, "totalTradeAmount", &source.total_trade_amount)?,
            user_cancel_count_limit: source.user_cancel_count_limit,
            user_cur_privilege: source.user_cur_privilege,
            user_id: int_field(E, "userId", &source.user_id)?,
            user_tag: source.user_tag,
            user_type: source.user_type,
            vip_level: source.vip_level,
            vip_profit: source.vip_profit,
            white_flag: source.white_flag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn minimal_account_response() -> serde_json::Value {
        json!({
            "accountCreateDays": 400,
            "accountId": "991",
            "averageReleaseTime": "65",
            "averageTransferTime": "120",
            "badAppraiseCount": 1,
            "blocked": "N",
            "canSubOnline": true,
            "contactConfig": false,
            "contactCount": 3,
            "curPrivilegeInfo": [{"name": "maker", "data": "1"}],
            "defaultNickName": false,
            "email": "trader@example.com",
            "executeNum": 12,
            "firstTradeDays": 300,
            "goodAppraiseCount": 88,
            "goodAppraiseRate": "0.99",
            "hasUnPostAd": 0,
            "isOnline": true,
            "kycCountryCode": "DE",
            "kycLevel": 2,
            "last30TradeCurrency": "EUR",
            "lastLogoutTime": "1700000000000",
            "lostRoleAffected": false,
            "mobile": "   ",
            "nickName": "maker-1",
            "openApiSwitch": 1,
            "orderNum": 150,
            "paymentCount": 2,
            "paymentRealNameUneditable": true,
            "realName": "Jane Doe",
            "realNameEn": "Jane Doe",
            "realNameMask": "J*** D**",
            "recentFinishCount": 20,
            "recentRate": 0.98,
            "recentTradeAmount": "5000.25",
            "registerTime": "1600000000000",
            "totalFinishBuyCount": 80,
            "totalFinishCount": 140,
            "totalFinishSellCount": 60,
            "totalTradeAmount": "",
            "userCancelCountLimit": 4,
            "userCurPrivilege": [],
            "userId": "123456",
            "userTag": [],
            "userType": "PERSONAL",
            "vipLevel": 1,
            "vipProfit": "0",
            "whiteFlag": 0
        })
    }

    #[test]
    fn test_account_info_maps_and_normalizes() {
        let wire: wire::AccountInfoResponse =
            serde_json::from_value(minimal_account_response()).unwrap();
        let info = AccountInfo::try_from(wire).unwrap();

        assert_eq!(info.account_id, 991);
        assert_eq!(info.user_id, 123_456);
        assert_eq!(info.last_logout_time, 1_700_000_000_000);
        // 0/1 flags become booleans.
        assert!(!info.has_un_post_ad);
        assert!(info.open_api_switch);
        // Blank optional strings collapse to None; non-blank are kept.
        assert_eq!(info.mobile, None);
        assert_eq!(info.email.as_deref(), Some("trader@example.com"));
        // Blank optional amounts collapse to None.
        assert_eq!(info.total_trade_amount, None);
        assert_eq!(info.recent_trade_amount, Some("5000.25".parse().unwrap()));
        // Privilege order is preserved.
        assert_eq!(info.cur_privilege_info[0].name, "maker");
    }

    #[test]
    fn test_unparseable_user_id_fails() {
        let mut payload = minimal_account_response();
        payload["userId"] = json!("not-a-number");
        let wire: wire::AccountInfoResponse = serde_json::from_value(payload).unwrap();
        let err = AccountInfo::try_from(wire).unwrap_err();
        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn test_missing_required_field_is_a_shape_error() {
        let mut payload = minimal_account_response();
        payload.as_object_mut().unwrap().remove("nickName");
        let res: Result<wire::AccountInfoResponse, _> = serde_json::from_value(payload);
        assert!(res.is_err());
    }
}
