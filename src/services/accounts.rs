use reqwest::StatusCode;
use tracing::{instrument, warn};

use super::client::{log_failure, TwitterConnectorClient};
use super::types::{PageRequest, WatchedAccount, WatchedAccountPage};
use crate::errors::{ConnectorError, ConnectorResult};

pub const SAVE_ACCOUNT_FAILURE: &str = "Error when saving twitter account";
pub const DELETE_ACCOUNT_FAILURE: &str = "Error when deleting twitter account";
pub const LIST_ACCOUNTS_FAILURE: &str = "Error when getting twitter accounts";
pub const GET_ACCOUNT_FAILURE: &str = "Error when getting twitter account";

impl TwitterConnectorClient {
    /// Starts watching `twitter_username`. The server assigns the id.
    ///
    /// A 401 or 404 answer carries a message for the administrator (unknown
    /// username, missing rights) and is returned verbatim as
    /// [`ConnectorError::Server`]. Any other failure is masked.
    #[instrument(skip(self))]
    pub async fn add_watched_account(&self, twitter_username: &str) -> ConnectorResult<()> {
        let request = self
            .http()
            .post(self.endpoint(""))
            .form(&[("twitterUsername", twitter_username)]);
        let response = self.send(request, SAVE_ACCOUNT_FAILURE).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        log_failure(status, SAVE_ACCOUNT_FAILURE);
        if status == StatusCode::NOT_FOUND || status == StatusCode::UNAUTHORIZED {
            let text = response.text().await.map_err(|e| {
                warn!(error = %e, "Unable to read server message");
                ConnectorError::rejected(SAVE_ACCOUNT_FAILURE)
            })?;
            return Err(ConnectorError::Server(text));
        }

        Err(ConnectorError::rejected(SAVE_ACCOUNT_FAILURE))
    }

    #[instrument(skip(self))]
    pub async fn delete_watched_account(&self, account_id: u64) -> ConnectorResult<()> {
        let request = self.http().delete(self.endpoint(&format!("/{account_id}")));
        self.execute(request, DELETE_ACCOUNT_FAILURE).await
    }

    /// `force_update` is only sent when given.
    #[instrument(skip(self))]
    pub async fn list_watched_accounts(
        &self,
        page: PageRequest,
        force_update: Option<bool>,
    ) -> ConnectorResult<WatchedAccountPage> {
        let request = self
            .http()
            .get(self.endpoint(""))
            .query(&page.query(force_update));
        self.fetch_json(request, LIST_ACCOUNTS_FAILURE).await
    }

    #[instrument(skip(self))]
    pub async fn get_watched_account(&self, account_id: u64) -> ConnectorResult<WatchedAccount> {
        let request = self.http().get(self.endpoint(&format!("/{account_id}")));
        self.fetch_json(request, GET_ACCOUNT_FAILURE).await
    }
}
