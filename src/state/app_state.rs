use crate::components::ComponentRegistry;
use crate::config::ConnectorConfig;
use crate::errors::ConnectorResult;
use crate::oauth::TwitterConnector;
use crate::services::TwitterConnectorClient;

/// Everything the admin surface is composed from, built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ConnectorConfig,
    pub client: TwitterConnectorClient,
    pub components: ComponentRegistry,
    pub connector: TwitterConnector,
}

impl AppState {
    pub fn new(config: ConnectorConfig) -> ConnectorResult<Self> {
        let client = TwitterConnectorClient::new(&config)?;

        Ok(Self {
            config,
            client,
            components: ComponentRegistry::with_admin_components(),
            connector: TwitterConnector::default(),
        })
    }
}
