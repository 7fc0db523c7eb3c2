use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::errors::{ConnectorError, ConnectorResult};

pub const SERVER_URL_VAR: &str = "TWITTER_CONNECTOR_SERVER_URL";
pub const PORTAL_CONTEXT_VAR: &str = "TWITTER_CONNECTOR_PORTAL_CONTEXT";
pub const REST_PREFIX_VAR: &str = "TWITTER_CONNECTOR_REST_PREFIX";
pub const SESSION_COOKIE_VAR: &str = "TWITTER_CONNECTOR_SESSION_COOKIE";
pub const TIMEOUT_VAR: &str = "TWITTER_CONNECTOR_TIMEOUT_SECS";

const DEFAULT_PORTAL_CONTEXT: &str = "portal";
const DEFAULT_REST_PREFIX: &str = "rest";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONNECTOR_PATH: &str = "gamification/connectors/twitter";
const OAUTH_PATH: &str = "/portal/twitterOauth";

/// Where the gamification portal lives and how to reach its REST services.
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    pub server_url: Url,
    pub portal_context: String,
    pub rest_prefix: String,
    /// Raw `name=value` cookie forwarded with every request.
    pub session_cookie: Option<String>,
    pub timeout: Duration,
}

impl ConnectorConfig {
    pub fn new(server_url: &str) -> ConnectorResult<Self> {
        let server_url = Url::parse(server_url).map_err(|e| {
            ConnectorError::Config(format!("invalid server URL '{server_url}': {e}"))
        })?;

        if server_url.cannot_be_a_base() {
            return Err(ConnectorError::Config(format!(
                "server URL '{server_url}' cannot be used as a base"
            )));
        }

        Ok(Self {
            server_url,
            portal_context: DEFAULT_PORTAL_CONTEXT.to_string(),
            rest_prefix: DEFAULT_REST_PREFIX.to_string(),
            session_cookie: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_portal_context(mut self, portal_context: impl Into<String>) -> Self {
        self.portal_context = portal_context.into();
        self
    }

    pub fn with_rest_prefix(mut self, rest_prefix: impl Into<String>) -> Self {
        self.rest_prefix = rest_prefix.into();
        self
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> ConnectorResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ConnectorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = lookup(SERVER_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConnectorError::Config(format!("{SERVER_URL_VAR} not set")))?;

        let mut config = Self::new(server_url.trim())?;

        if let Some(context) = lookup(PORTAL_CONTEXT_VAR) {
            config.portal_context = context;
        }
        if let Some(prefix) = lookup(REST_PREFIX_VAR) {
            config.rest_prefix = prefix;
        }
        config.session_cookie = lookup(SESSION_COOKIE_VAR).filter(|value| !value.is_empty());

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConnectorError::Config(format!(
                        "{TIMEOUT_VAR} must be a positive number of seconds, got '{raw}'"
                    ))
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// `{server}/{portal_context}/{rest_prefix}/gamification/connectors/twitter`
    pub fn connector_base_url(&self) -> String {
        let mut segments = vec![self.server_url.as_str().trim_end_matches('/')];
        segments.extend(
            [self.portal_context.as_str(), self.rest_prefix.as_str()]
                .into_iter()
                .map(|segment| segment.trim_matches('/'))
                .filter(|segment| !segment.is_empty()),
        );
        segments.push(CONNECTOR_PATH);
        segments.join("/")
    }

    pub fn origin(&self) -> String {
        self.server_url.origin().ascii_serialization()
    }

    pub fn oauth_url(&self) -> String {
        format!("{}{OAUTH_PATH}", self.origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn base_url_uses_defaults() {
        let config = ConnectorConfig::new("https://meeds.example.com").unwrap();
        assert_eq!(
            config.connector_base_url(),
            "https://meeds.example.com/portal/rest/gamification/connectors/twitter"
        );
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn base_url_ignores_surrounding_slashes() {
        let config = ConnectorConfig::new("http://localhost:8080/")
            .unwrap()
            .with_portal_context("/community/")
            .with_rest_prefix("/api");
        assert_eq!(
            config.connector_base_url(),
            "http://localhost:8080/community/api/gamification/connectors/twitter"
        );
    }

    #[test]
    fn oauth_url_targets_origin() {
        let config = ConnectorConfig::new("http://localhost:8080/some/path").unwrap();
        assert_eq!(config.oauth_url(), "http://localhost:8080/portal/twitterOauth");
    }

    #[test]
    fn rejects_invalid_server_url() {
        let err = ConnectorConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ConnectorError::Config(_)));
    }

    #[test]
    fn from_lookup_reads_every_variable() {
        let config = ConnectorConfig::from_lookup(lookup(&[
            (SERVER_URL_VAR, "https://portal.test"),
            (PORTAL_CONTEXT_VAR, "intranet"),
            (REST_PREFIX_VAR, "v1"),
            (SESSION_COOKIE_VAR, "JSESSIONID=abc"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();

        assert_eq!(
            config.connector_base_url(),
            "https://portal.test/intranet/v1/gamification/connectors/twitter"
        );
        assert_eq!(config.session_cookie.as_deref(), Some("JSESSIONID=abc"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn from_lookup_requires_server_url() {
        let err = ConnectorConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid configuration: TWITTER_CONNECTOR_SERVER_URL not set"
        );
    }

    #[test]
    fn from_lookup_rejects_zero_timeout() {
        let err = ConnectorConfig::from_lookup(lookup(&[
            (SERVER_URL_VAR, "https://portal.test"),
            (TIMEOUT_VAR, "0"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid configuration: TWITTER_CONNECTOR_TIMEOUT_SECS must be a positive number \
             of seconds, got '0'"
        );
    }

    #[test]
    fn from_lookup_rejects_bad_timeout() {
        let err = ConnectorConfig::from_lookup(lookup(&[
            (SERVER_URL_VAR, "https://portal.test"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConnectorError::Config(_)));
    }
}
