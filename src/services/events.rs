use tracing::instrument;

use super::client::TwitterConnectorClient;
use super::types::EventStatus;
use crate::errors::ConnectorResult;

const EVENT_STATUS_PATH: &str = "/events/status";

pub const EVENT_STATUS_FAILURE: &str = "Response code indicates a server error";

impl TwitterConnectorClient {
    #[instrument(skip(self))]
    pub async fn set_event_status(
        &self,
        event_id: u64,
        account_id: u64,
        enabled: bool,
    ) -> ConnectorResult<()> {
        let status = EventStatus {
            event_id,
            account_id,
            enabled,
        };
        let request = self
            .http()
            .post(self.endpoint(EVENT_STATUS_PATH))
            .form(&status);
        self.execute(request, EVENT_STATUS_FAILURE).await
    }
}
