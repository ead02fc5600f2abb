//! Conversion: balance wire types → domain types.

use super::wire;
use super::{BalanceSnapshot, CoinBalance};
use crate::domain::{int_field, opt_decimal_field};
use crate::error::DecodeError;

impl TryFrom<wire::CoinBalanceResponse> for CoinBalance {
    type Error = DecodeError;

    fn try_from(source: wire::CoinBalanceResponse) -> Result<Self, Self::Error> {
        const E: &str = "CoinBalance";
        Ok(CoinBalance {
            wallet_balance: opt_decimal_field(E, "walletBalance", &source.wallet_balance)?,
            transfer_balance: opt_decimal_field(E, "transferBalance", &source.transfer_balance)?,
            bonus: opt_decimal_field(E, "bonus", &source.bonus)?,
            name: source.coin,
        })
    }
}

impl TryFrom<wire::BalanceResult> for BalanceSnapshot {
    type Error = DecodeError;

    fn try_from(source: wire::BalanceResult) -> Result<Self, Self::Error> {
        let balances = source
            .balance
            .into_iter()
            .map(CoinBalance::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BalanceSnapshot {
            member_id: int_field("BalanceSnapshot", "memberId", &source.member_id)?,
            account_type: source.account_type,
            balances,
        })
    }
}
