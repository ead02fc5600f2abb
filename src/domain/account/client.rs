//! Account sub-client.

use super::wire;
use super::AccountInfo;
use crate::client::P2pClient;
use crate::error::{DecodeError, SdkError};
use crate::http::endpoint;
use crate::shared::Params;

pub struct Account<'a> {
    pub(crate) client: &'a P2pClient,
}

impl Account<'_> {
    /// The authenticated user's P2P profile.
    pub async fn info(&self) -> Result<AccountInfo, SdkError> {
        self.info_with(&Params::new()).await
    }

    /// Same as [`info`](Self::info) with extra parameters. The endpoint
    /// declares no parameter filter, so every supplied key is transmitted.
    pub async fn info_with(&self, params: &Params) -> Result<AccountInfo, SdkError> {
        let payload = self
            .client
            .http
            .dispatch(&endpoint::GET_ACCOUNT_INFORMATION, params)
            .await?;

        let result: wire::AccountInfoResponse =
            serde_json::from_value(payload).map_err(|e| DecodeError::payload("AccountInfo", e))?;

        Ok(AccountInfo::try_from(result)?)
    }
}
