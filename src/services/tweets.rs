use tracing::instrument;

use super::client::TwitterConnectorClient;
use super::types::{PageRequest, TweetPage};
use crate::errors::ConnectorResult;

const TWEETS_PATH: &str = "/tweets";

pub const LIST_TWEETS_FAILURE: &str = "Error when getting watched tweet";

impl TwitterConnectorClient {
    #[instrument(skip(self))]
    pub async fn list_watched_tweets(&self, page: PageRequest) -> ConnectorResult<TweetPage> {
        let request = self
            .http()
            .get(self.endpoint(TWEETS_PATH))
            .query(&page.query(None));
        self.fetch_json(request, LIST_TWEETS_FAILURE).await
    }
}
