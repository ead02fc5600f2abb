//! Conversion: ad wire types → domain types.

use super::wire;
use super::{
    Currency, MarketAd, MyAdsPage, OnlineAdsPage, PaymentConfig, PaymentTemplateItem, PaymentTerm,
    SymbolInfo, Token, TradingPreferenceSet,
};
use crate::domain::{decimal_field, flag, int_field, opt_decimal_field, opt_text};
use crate::error::DecodeError;
use crate::shared::Side;

impl TryFrom<wire::CurrencyResponse> for Currency {
    type Error = DecodeError;

    fn try_from(source: wire::CurrencyResponse) -> Result<Self, Self::Error> {
        const E: &str = "Currency";
        Ok(Currency {
            exchange_id: int_field(E, "exchangeId", &source.exchange_id)?,
            id: int_field(E, "id", &source.id)?,
            org_id: int_field(E, "orgId", &source.org_id)?,
            currency_id: source.currency_id,
            scale: source.scale,
        })
    }
}

impl TryFrom<wire::TokenResponse> for Token {
    type Error = DecodeError;

    fn try_from(source: wire::TokenResponse) -> Result<Self, Self::Error> {
        const E: &str = "Token";
        Ok(Token {
            exchange_id: int_field(E, "exchangeId", &source.exchange_id)?,
            id: int_field(E, "id", &source.id)?,
            org_id: int_field(E, "orgId", &source.org_id)?,
            token_id: source.token_id,
            scale: source.scale,
            sequence: source.sequence,
        })
    }
}

impl From<wire::TradingPreferenceSetResponse> for TradingPreferenceSet {
    fn from(source: wire::TradingPreferenceSetResponse) -> Self {
        TradingPreferenceSet {
            complete_rate_day_30: source.complete_rate_day_30,
            has_complete_rate_day_30: flag(source.has_complete_rate_day_30),
            has_national_limit: flag(source.has_national_limit),
            has_order_finish_number_day_30: flag(source.has_order_finish_number_day_30),
            has_register_time: flag(source.has_register_time),
            has_un_post_ad: flag(source.has_un_post_ad),
            is_email: flag(source.is_email),
            is_kyc: flag(source.is_kyc),
            is_mobile: flag(source.is_mobile),
            national_limit: source.national_limit,
            order_finish_number_day_30: source.order_finish_number_day_30,
            register_time_threshold: source.register_time_threshold,
        }
    }
}

impl TryFrom<wire::SymbolInfoResponse> for SymbolInfo {
    type Error = DecodeError;

    fn try_from(source: wire::SymbolInfoResponse) -> Result<Self, Self::Error> {
        const E: &str = "SymbolInfo";
        Ok(SymbolInfo {
            id: int_field(E, "id", &source.id)?,
            exchange_id: int_field(E, "exchangeId", &source.exchange_id)?,
            org_id: int_field(E, "orgId", &source.org_id)?,
            currency: Currency::try_from(source.currency)?,
            token: Token::try_from(source.token)?,
            currency_lower_max_quote: decimal_field(
                E,
                "currencyLowerMaxQuote",
                &source.currency_lower_max_quote,
            )?,
            currency_max_quote: decimal_field(E, "currencyMaxQuote", &source.currency_max_quote)?,
            currency_min_quote: decimal_field(E, "currencyMinQuote", &source.currency_min_quote)?,
            token_max_quote: decimal_field(E, "tokenMaxQuote", &source.token_max_quote)?,
            token_min_quote: decimal_field(E, "tokenMinQuote", &source.token_min_quote)?,
            kyc_currency_limit: decimal_field(E, "kycCurrencyLimit", &source.kyc_currency_limit)?,
            item_down_range: decimal_field(E, "itemDownRange", &source.item_down_range)?,
            item_up_range: decimal_field(E, "itemUpRange", &source.item_up_range)?,
            token_id: source.token_id,
            currency_id: source.currency_id,
            status: source.status,
            buy_ad: source.buy_ad,
            sell_ad: source.sell_ad,
            buy_fee_rate: source.buy_fee_rate,
            sell_fee_rate: source.sell_fee_rate,
            item_side_limit: source.item_side_limit,
            lower_limit_alarm: source.lower_limit_alarm,
            upper_limit_alarm: source.upper_limit_alarm,
            order_auto_cancel_minute: source.order_auto_cancel_minute,
            order_finish_minute: source.order_finish_minute,
            trade_side: source.trade_side,
        })
    }
}

impl From<wire::PaymentTemplateItemResponse> for PaymentTemplateItem {
    fn from(source: wire::PaymentTemplateItemResponse) -> Self {
        PaymentTemplateItem {
            field_name: source.field_name,
            label_dialect: source.label_dialect,
            placeholder_dialect: source.placeholder_dialect,
        }
    }
}

impl From<wire::PaymentConfigResponse> for PaymentConfig {
    fn from(source: wire::PaymentConfigResponse) -> Self {
        PaymentConfig {
            payment_dialect: source.payment_dialect,
            payment_name: source.payment_name,
            payment_type: source.payment_type,
            template_items: source
                .payment_template_item
                .into_iter()
                .map(PaymentTemplateItem::from)
                .collect(),
        }
    }
}

impl TryFrom<wire::PaymentTermResponse> for PaymentTerm {
    type Error = DecodeError;

    fn try_from(source: wire::PaymentTermResponse) -> Result<Self, Self::Error> {
        Ok(PaymentTerm {
            id: int_field("PaymentTerm", "id", &source.id)?,
            payment_type: source.payment_type,
            payment_config: PaymentConfig::from(source.payment_config),
            payment_template_version: source.payment_template_version,
            real_name_verified: source.real_name_verified,
            visible: flag(source.visible),
            account_no: opt_text(source.account_no),
            bank_name: opt_text(source.bank_name),
            branch_name: opt_text(source.branch_name),
            business_name: opt_text(source.business_name),
            clabe: opt_text(source.clabe),
            concept: opt_text(source.concept),
            debit_card_number: opt_text(source.debit_card_number),
            first_name: opt_text(source.first_name),
            last_name: opt_text(source.last_name),
            second_last_name: opt_text(source.second_last_name),
            mobile: opt_text(source.mobile),
            pay_message: opt_text(source.pay_message),
            payment_ext_1: opt_text(source.payment_ext1),
            payment_ext_2: opt_text(source.payment_ext2),
            payment_ext_3: opt_text(source.payment_ext3),
            payment_ext_4: opt_text(source.payment_ext4),
            payment_ext_5: opt_text(source.payment_ext5),
            payment_ext_6: opt_text(source.payment_ext6),
            qrcode: opt_text(source.qrcode),
            real_name: opt_text(source.real_name),
        })
    }
}

impl TryFrom<wire::MarketAdResponse> for MarketAd {
    type Error = DecodeError;

    fn try_from(source: wire::MarketAdResponse) -> Result<Self, Self::Error> {
        const E: &str = "MarketAd";

        let payment_terms = source
            .payment_terms
            .unwrap_or_default()
            .into_iter()
            .map(PaymentTerm::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MarketAd {
            id: int_field(E, "id", &source.id)?,
            account_id: int_field(E, "accountId", &source.account_id)?,
            side: Side::from_code(source.side),
            price: decimal_field(E, "price", &source.price)?,
            // The wire sends `premium` as a string; a non-empty value means
            // the ad is premium-priced.
            premium: !source.premium.is_empty(),
            quantity: decimal_field(E, "quantity", &source.quantity)?,
            min_amount: decimal_field(E, "minAmount", &source.min_amount)?,
            max_amount: decimal_field(E, "maxAmount", &source.max_amount)?,
            executed_quantity: opt_decimal_field(E, "executedQuantity", &source.executed_quantity)?,
            frozen_quantity: opt_decimal_field(E, "frozenQuantity", &source.frozen_quantity)?,
            last_quantity: opt_decimal_field(E, "lastQuantity", &source.last_quantity)?,
            fee: opt_decimal_field(E, "fee", &source.fee)?,
            fee_rate: source.fee_rate,
            symbol_info: SymbolInfo::try_from(source.symbol_info)?,
            trading_preference_set: TradingPreferenceSet::from(source.trading_preference_set),
            payment_terms,
            create_date: int_field(E, "createDate", &source.create_date)?,
            last_logout_time: int_field(E, "lastLogoutTime", &source.last_logout_time)?,
            verification_order_amount: int_field(
                E,
                "verificationOrderAmount",
                &source.verification_order_amount,
            )?,
            user_id: source.user_id,
            nickname: source.nick_name,
            status: source.status,
            price_type: source.price_type,
            currency_id: source.currency_id,
            token_id: source.token_id,
            token_name: source.token_name,
            payments: source.payments,
            payment_period: source.payment_period,
            remark: source.remark,
            item_type: source.item_type,
            is_online: source.is_online,
            update_date: source.update_date,
            finish_num: source.finish_num,
            order_num: source.order_num,
            recent_order_num: source.recent_order_num,
            recent_execute_rate: source.recent_execute_rate,
            verification_order_switch: source.verification_order_switch,
            verification_order_labels: source.verification_order_labels,
            version: source.version,
            auth_status: source.auth_status,
            auth_tag: source.auth_tag,
            ban: source.ban,
            baned: source.baned,
            blocked: source.blocked,
            maker_contact: source.maker_contact,
            recommend: source.recommend,
            recommend_tag: source.recommend_tag,
            subsidy_ad: source.subsidy_ad,
            user_mask_id: source.user_mask_id,
            user_type: source.user_type,
        })
    }
}

impl TryFrom<wire::OnlineAdsResult> for OnlineAdsPage {
    type Error = DecodeError;

    fn try_from(source: wire::OnlineAdsResult) -> Result<Self, Self::Error> {
        Ok(OnlineAdsPage {
            total: source.count,
            items: source
                .items
                .into_iter()
                .map(MarketAd::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl TryFrom<wire::MyAdsResult> for MyAdsPage {
    type Error = DecodeError;

    fn try_from(source: wire::MyAdsResult) -> Result<Self, Self::Error> {
        Ok(MyAdsPage {
            count: source.count,
            hidden: source.hidden_flag,
            items: source
                .items
                .into_iter()
                .map(MarketAd::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn symbol_info_payload() -> serde_json::Value {
        json!({
            "id": "10",
            "exchangeId": "301",
            "orgId": "9001",
            "tokenId": "USDT",
            "currencyId": "USD",
            "status": 1,
            "buyFeeRate": "0",
            "sellFeeRate": "0",
            "currency": {
                "currencyId": "USD",
                "exchangeId": "301",
                "id": "840",
                "orgId": "9001",
                "scale": 2
            },
            "token": {
                "tokenId": "USDT",
                "exchangeId": "301",
                "id": "1",
                "orgId": "9001",
                "scale": "4",
                "sequence": 1
            },
            "currencyLowerMaxQuote": "100",
            "currencyMaxQuote": "100000",
            "currencyMinQuote": "10",
            "tokenMaxQuote": "100000",
            "tokenMinQuote": "10",
            "kycCurrencyLimit": "900",
            "itemDownRange": "70",
            "itemUpRange": "130",
            "itemSideLimit": 2,
            "lowerLimitAlarm": 80,
            "upperLimitAlarm": 120,
            "orderAutoCancelMinute": 15,
            "orderFinishMinute": 10,
            "tradeSide": 0
        })
    }

    pub(crate) fn preference_payload() -> serde_json::Value {
        json!({
            "completeRateDay30": "95",
            "hasCompleteRateDay30": 1,
            "hasNationalLimit": 0,
            "hasOrderFinishNumberDay30": 1,
            "hasRegisterTime": 0,
            "hasUnPostAd": 0,
            "isEmail": 0,
            "isKyc": 1,
            "isMobile": 1,
            "nationalLimit": "",
            "orderFinishNumberDay30": 5,
            "registerTimeThreshold": 30
        })
    }

    pub(crate) fn payment_term_payload() -> serde_json::Value {
        json!({
            "id": "555",
            "paymentType": "14",
            "paymentConfig": {
                "paymentDialect": "BANK",
                "paymentName": "Bank Transfer",
                "paymentType": 14,
                "paymentTemplateItem": [
                    {
                        "fieldName": "accountNo",
                        "labelDialect": "Account number",
                        "placeholderDialect": "Enter account number"
                    }
                ]
            },
            "paymentTemplateVersion": 1.0,
            "realNameVerified": true,
            "visible": 1,
            "accountNo": "DE00 1234",
            "bankName": "  Example Bank  ",
            "branchName": "",
            "businessName": "   ",
            "clabe": "",
            "concept": "",
            "debitCardNumber": "",
            "firstName": "",
            "lastName": "",
            "secondLastName": "",
            "mobile": "",
            "payMessage": "",
            "paymentExt1": "",
            "paymentExt2": "",
            "paymentExt3": "",
            "paymentExt4": "",
            "paymentExt5": "",
            "paymentExt6": "",
            "qrcode": "",
            "realName": ""
        })
    }

    pub(crate) fn market_ad_payload() -> serde_json::Value {
        json!({
            "id": "7777",
            "accountId": "991",
            "userId": "123456",
            "nickName": "maker-1",
            "side": 0,
            "status": 10,
            "priceType": 0,
            "price": "1.02",
            "premium": "",
            "quantity": "1500",
            "minAmount": "50",
            "maxAmount": "1000",
            "executedQuantity": "200",
            "frozenQuantity": "",
            "lastQuantity": "1300",
            "fee": "",
            "currencyId": "USD",
            "tokenId": "USDT",
            "tokenName": "Tether",
            "symbolInfo": symbol_info_payload(),
            "tradingPreferenceSet": preference_payload(),
            "paymentTerms": [payment_term_payload()],
            "payments": ["14"],
            "paymentPeriod": 15,
            "remark": "fast release",
            "itemType": "ORIGIN",
            "isOnline": true,
            "createDate": "1700000000000",
            "lastLogoutTime": "1700000100000",
            "finishNum": "42",
            "orderNum": 100,
            "recentOrderNum": 12,
            "recentExecuteRate": 98,
            "verificationOrderSwitch": false,
            "verificationOrderAmount": "0",
            "verificationOrderLabels": [],
            "version": 1.0
        })
    }

    fn decode_ad(payload: serde_json::Value) -> Result<MarketAd, DecodeError> {
        let wire: wire::MarketAdResponse = serde_json::from_value(payload)
            .map_err(|e| DecodeError::payload("MarketAd", e))?;
        MarketAd::try_from(wire)
    }

    #[test]
    fn test_market_ad_maps_the_whole_tree() {
        let ad = decode_ad(market_ad_payload()).unwrap();

        assert_eq!(ad.id, 7777);
        assert_eq!(ad.account_id, 991);
        assert_eq!(ad.side, Side::Buy);
        assert_eq!(ad.price, "1.02".parse().unwrap());
        assert!(!ad.premium);
        // Blank-capable quantities: present parses, blank is absent.
        assert_eq!(ad.executed_quantity, Some("200".parse().unwrap()));
        assert_eq!(ad.frozen_quantity, None);
        assert_eq!(ad.fee, None);
        // Owned symbol tree.
        assert_eq!(ad.symbol_info.currency.scale, 2);
        assert_eq!(ad.symbol_info.token.scale, "4");
        assert_eq!(ad.symbol_info.token.id, 1);
        // Preference flags normalized.
        assert!(ad.trading_preference_set.is_kyc);
        assert!(!ad.trading_preference_set.is_email);
        // Payment term blanks collapsed, non-blanks trimmed.
        let term = &ad.payment_terms[0];
        assert_eq!(term.id, 555);
        assert_eq!(term.account_no.as_deref(), Some("DE00 1234"));
        assert_eq!(term.bank_name.as_deref(), Some("Example Bank"));
        assert_eq!(term.branch_name, None);
        assert_eq!(term.business_name, None);
        assert_eq!(term.payment_config.template_items[0].field_name, "accountNo");
        assert!(term.visible);
    }

    #[test]
    fn test_side_string_and_unknown_codes() {
        let mut payload = market_ad_payload();
        payload["side"] = json!("1");
        assert_eq!(decode_ad(payload).unwrap().side, Side::Sell);

        let mut payload = market_ad_payload();
        payload["side"] = json!(7);
        assert_eq!(decode_ad(payload).unwrap().side, Side::Sell);
    }

    #[test]
    fn test_missing_payment_terms_become_empty() {
        let mut payload = market_ad_payload();
        payload.as_object_mut().unwrap().remove("paymentTerms");
        let ad = decode_ad(payload).unwrap();
        assert!(ad.payment_terms.is_empty());
    }

    #[test]
    fn test_bad_nested_element_fails_the_parent() {
        let mut payload = market_ad_payload();
        payload["paymentTerms"][0]["id"] = json!("not-a-number");
        let err = decode_ad(payload).unwrap_err();
        assert!(err.to_string().contains("PaymentTerm.id"));
    }

    #[test]
    fn test_unparseable_price_fails() {
        let mut payload = market_ad_payload();
        payload["price"] = json!("1,02");
        assert!(decode_ad(payload).is_err());
    }

    #[test]
    fn test_online_page_preserves_order_and_count() {
        let mut second = market_ad_payload();
        second["id"] = json!("7778");
        let result: wire::OnlineAdsResult = serde_json::from_value(json!({
            "count": 2,
            "items": [market_ad_payload(), second]
        }))
        .unwrap();
        let page = OnlineAdsPage::try_from(result).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].id, 7777);
        assert_eq!(page.items[1].id, 7778);
    }

    #[test]
    fn test_my_ads_page_hidden_flag_is_lenient() {
        let result: wire::MyAdsResult = serde_json::from_value(json!({
            "count": "1",
            "hiddenFlag": 1,
            "items": [market_ad_payload()]
        }))
        .unwrap();
        let page = MyAdsPage::try_from(result).unwrap();
        assert_eq!(page.count, 1);
        assert!(page.hidden);
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let a = decode_ad(market_ad_payload()).unwrap();
        let b = decode_ad(market_ad_payload()).unwrap();
        assert_eq!(a, b);
    }
}
