use tracing::instrument;

use super::client::TwitterConnectorClient;
use super::types::TokenStatus;
use crate::errors::ConnectorResult;

const BEARER_TOKEN_PATH: &str = "/bearerToken";

pub const TOKEN_STATUS_FAILURE: &str = "Error when getting twitter bearer token status";
pub const SAVE_TOKEN_FAILURE: &str = "Error when saving twitter bearer token";
pub const DELETE_TOKEN_FAILURE: &str = "Error when deleting twitter bearer token";

impl TwitterConnectorClient {
    #[instrument(skip(self))]
    pub async fn check_token_status(&self) -> ConnectorResult<TokenStatus> {
        let request = self.http().get(self.endpoint(BEARER_TOKEN_PATH));
        self.fetch_json(request, TOKEN_STATUS_FAILURE).await
    }

    #[instrument(skip_all)]
    pub async fn save_bearer_token(&self, bearer_token: &str) -> ConnectorResult<()> {
        let request = self
            .http()
            .post(self.endpoint(BEARER_TOKEN_PATH))
            .form(&[("bearerToken", bearer_token)]);
        self.execute(request, SAVE_TOKEN_FAILURE).await
    }

    #[instrument(skip(self))]
    pub async fn delete_bearer_token(&self) -> ConnectorResult<()> {
        let request = self.http().delete(self.endpoint(BEARER_TOKEN_PATH));
        self.execute(request, DELETE_TOKEN_FAILURE).await
    }
}
