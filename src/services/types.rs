use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_OFFSET: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 10;

/// Whether a bearer token is stored and what is left of its rate limit window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatus {
    #[serde(default)]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub remaining: Option<u64>,
    /// Epoch seconds at which the rate limit window resets.
    #[serde(default)]
    pub reset: Option<i64>,
}

impl TokenStatus {
    pub fn is_valid(&self) -> bool {
        self.is_valid.unwrap_or(false)
    }

    /// A valid token that can still issue requests in the current window.
    pub fn is_usable(&self) -> bool {
        self.is_valid() && self.remaining.is_some_and(|remaining| remaining > 0)
    }

    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        self.reset
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedAccount {
    pub id: u64,
    #[serde(default)]
    pub remote_id: Option<String>,
    /// Twitter username (handle) of the watched account.
    #[serde(default, alias = "twitterUsername")]
    pub identifier: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub watched_date: Option<String>,
    #[serde(default)]
    pub watched_by: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub refresh_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub tweet_id: u64,
    #[serde(default)]
    pub tweet_link: Option<String>,
    #[serde(default)]
    pub likers: Vec<String>,
    #[serde(default)]
    pub retweeters: Vec<String>,
}

/// One page of a paginated listing.
///
/// Every field remembers whether the server sent it, and unknown top-level
/// fields are kept in `extra`, so the page serializes back to the body the
/// server sent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct EntityList<T> {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "present")]
    entities: Option<Option<Vec<T>>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "present")]
    offset: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "present")]
    limit: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "present")]
    size: Option<Option<u64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> EntityList<T> {
    pub fn entities(&self) -> &[T] {
        self.entities
            .as_ref()
            .and_then(Option::as_ref)
            .map_or(&[], Vec::as_slice)
    }

    pub fn into_entities(self) -> Vec<T> {
        self.entities.flatten().unwrap_or_default()
    }

    pub fn offset(&self) -> Option<u32> {
        self.offset.flatten()
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit.flatten()
    }

    /// Total number of items, only sent when `returnSize=true` was asked.
    pub fn size(&self) -> Option<u64> {
        self.size.flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.entities().is_empty()
    }
}

/// Keeps a field that is missing (`None`) apart from one sent as `null`
/// (`Some(None)`).
mod present {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

pub type WatchedAccountPage = EntityList<WatchedAccount>;
pub type TweetPage = EntityList<Tweet>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    pub fn next(self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            ..self
        }
    }

    /// Query parameters in the order the server documents them.
    pub(crate) fn query(&self, force_update: Option<bool>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
            ("returnSize", "true".to_string()),
        ];
        if let Some(force) = force_update {
            params.push(("forceUpdate", force.to_string()));
        }
        params
    }
}

/// Enables or disables a gamification event for one watched account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatus {
    pub event_id: u64,
    pub account_id: u64,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_status_reads_backend_shape() {
        let status: TokenStatus =
            serde_json::from_value(json!({"isValid": true, "remaining": 42, "reset": 1700000000}))
                .unwrap();
        assert!(status.is_usable());
        assert_eq!(
            status.reset_at().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn token_status_without_token_is_not_usable() {
        let status: TokenStatus = serde_json::from_value(json!({})).unwrap();
        assert!(!status.is_valid());
        assert!(!status.is_usable());
        assert!(status.reset_at().is_none());

        let exhausted = TokenStatus {
            is_valid: Some(true),
            remaining: Some(0),
            reset: None,
        };
        assert!(!exhausted.is_usable());
    }

    #[test]
    fn watched_account_accepts_twitter_username_alias() {
        let account: WatchedAccount =
            serde_json::from_value(json!({"id": 3, "twitterUsername": "meeds_io"})).unwrap();
        assert_eq!(account.id, 3);
        assert_eq!(account.identifier.as_deref(), Some("meeds_io"));
        assert!(account.avatar_url.is_none());
    }

    #[test]
    fn entity_list_keeps_unknown_fields() {
        let body = json!({"accounts": [], "size": 0});
        let page: WatchedAccountPage = serde_json::from_value(body.clone()).unwrap();

        assert!(page.is_empty());
        assert_eq!(page.size(), Some(0));
        assert_eq!(page.extra.get("accounts"), Some(&json!([])));
        assert_eq!(serde_json::to_value(&page).unwrap(), body);
    }

    #[test]
    fn empty_page_serializes_back_unchanged() {
        let body = json!({"entities": [], "offset": 0, "limit": 10, "size": 0});
        let page: WatchedAccountPage = serde_json::from_value(body.clone()).unwrap();

        assert!(page.is_empty());
        assert_eq!(page.offset(), Some(0));
        assert_eq!(page.limit(), Some(10));
        assert_eq!(serde_json::to_value(&page).unwrap(), body);
    }

    #[test]
    fn null_and_missing_fields_serialize_back_unchanged() {
        let with_null = json!({"entities": [], "offset": 0, "limit": 10, "size": null});
        let page: WatchedAccountPage = serde_json::from_value(with_null.clone()).unwrap();
        assert_eq!(page.size(), None);
        assert_eq!(serde_json::to_value(&page).unwrap(), with_null);

        let without_size = json!({"entities": [{"id": 4}], "offset": 0, "limit": 10});
        let page: WatchedAccountPage = serde_json::from_value(without_size.clone()).unwrap();
        assert_eq!(page.entities()[0].id, 4);
        assert_eq!(page.size(), None);
        assert_eq!(serde_json::to_value(&page).unwrap(), without_size);
    }

    #[test]
    fn page_request_query_defaults() {
        let query = PageRequest::default().query(None);
        assert_eq!(
            query,
            vec![
                ("offset", "0".to_string()),
                ("limit", "10".to_string()),
                ("returnSize", "true".to_string()),
            ]
        );

        let forced = PageRequest::default().query(Some(false));
        assert_eq!(forced.last(), Some(&("forceUpdate", "false".to_string())));
    }

    #[test]
    fn page_request_next_advances_by_limit() {
        assert_eq!(PageRequest::new(20, 5).next(), PageRequest::new(25, 5));
    }
}
