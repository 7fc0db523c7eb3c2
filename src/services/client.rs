use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::{Client as ReqwestClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ConnectorConfig;
use crate::errors::{ConnectorError, ConnectorResult};

/// Stateless wrapper around the gamification Twitter connector REST API.
///
/// Every call issues exactly one request and resolves once. Nothing is
/// retried, cached or de-duplicated.
#[derive(Debug, Clone)]
pub struct TwitterConnectorClient {
    http: ReqwestClient,
    base_url: String,
}

impl TwitterConnectorClient {
    pub fn new(config: &ConnectorConfig) -> ConnectorResult<Self> {
        // Session cookies are forwarded on every call, like `credentials: include`
        let jar = Arc::new(Jar::default());
        if let Some(cookies) = &config.session_cookie {
            for pair in cookies.split(';').map(str::trim).filter(|p| p.contains('=')) {
                jar.add_cookie_str(&format!("{pair}; Path=/"), &config.server_url);
            }
        }

        let http = ReqwestClient::builder()
            .timeout(config.timeout)
            .cookie_provider(jar)
            .user_agent(format!("gamification-twitter/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http_client(http, config.connector_base_url()))
    }

    /// Uses a caller-provided HTTP client, e.g. one sharing a cookie store.
    pub fn with_http_client(http: ReqwestClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    pub(crate) fn http(&self) -> &ReqwestClient {
        &self.http
    }

    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        failure: &'static str,
    ) -> ConnectorResult<Response> {
        let request = request.build().map_err(|e| {
            warn!(error = %e, "Unable to build connector request");
            ConnectorError::rejected(failure)
        })?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            "Calling gamification connector API"
        );

        self.http.execute(request).await.map_err(|e| {
            warn!(error = %e, "Connector API request failed");
            ConnectorError::rejected(failure)
        })
    }

    /// Read calls: the parsed JSON body on success, the generic failure otherwise.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        failure: &'static str,
    ) -> ConnectorResult<T> {
        let response = self.send(request, failure).await?;
        let response = ensure_success(response, failure)?;

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Unable to decode connector API response");
            ConnectorError::rejected(failure)
        })
    }

    /// Mutating calls: the body of a successful response is never read.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        failure: &'static str,
    ) -> ConnectorResult<()> {
        let response = self.send(request, failure).await?;
        ensure_success(response, failure).map(|_| ())
    }
}

fn ensure_success(response: Response, failure: &'static str) -> ConnectorResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        log_failure(status, failure);
        Err(ConnectorError::rejected(failure))
    }
}

pub(crate) fn log_failure(status: StatusCode, failure: &str) {
    warn!(status = status.as_u16(), "{failure}");
}
