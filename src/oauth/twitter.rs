use serde::Serialize;
use tracing::debug;

use super::types::{PopupWindow, Viewport, WindowOpener};
use crate::errors::ConnectorResult;

pub const OAUTH_ROUTE: &str = "/portal/twitterOauth";
pub const OAUTH_WINDOW_NAME: &str = "Twitter OAuth";
pub const OAUTH_WINDOW_WIDTH: u32 = 600;
pub const OAUTH_WINDOW_HEIGHT: u32 = 600;

/// Identity and display metadata of the user-facing Twitter connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterConnector {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_card: String,
    pub initialized: bool,
    /// Twitter handle linked by the current user, empty until linked.
    pub identifier: String,
    pub user: String,
    pub rank: u32,
    pub profile_base_url: String,
}

impl Default for TwitterConnector {
    fn default() -> Self {
        Self {
            name: "twitter".to_string(),
            title: "twitterConnector.label.profile".to_string(),
            description: "twitterConnector.label.description".to_string(),
            image: "/gamification-twitter/images/TwitterX.svg".to_string(),
            image_card: "/gamification-twitter/images/TwitterXWhite.svg".to_string(),
            initialized: true,
            identifier: String::new(),
            user: String::new(),
            rank: 20,
            profile_base_url: "https://twitter.com".to_string(),
        }
    }
}

impl TwitterConnector {
    pub fn is_linked(&self) -> bool {
        !self.identifier.is_empty()
    }

    pub fn profile_url(&self, identifier: &str) -> String {
        format!(
            "{}/{}",
            self.profile_base_url.trim_end_matches('/'),
            identifier.trim_start_matches('@')
        )
    }

    pub fn oauth_popup(&self, origin: &str, viewport: Viewport) -> PopupWindow {
        let url = format!("{}{OAUTH_ROUTE}", origin.trim_end_matches('/'));
        PopupWindow::centered(
            url,
            OAUTH_WINDOW_NAME,
            OAUTH_WINDOW_WIDTH,
            OAUTH_WINDOW_HEIGHT,
            viewport,
        )
    }

    /// Opens the OAuth popup centred on `viewport`. The server finishes the
    /// flow by itself; nothing here waits for it.
    pub fn open_oauth_popup(
        &self,
        origin: &str,
        viewport: Viewport,
        opener: &dyn WindowOpener,
    ) -> ConnectorResult<PopupWindow> {
        let popup = self.oauth_popup(origin, viewport);
        debug!(url = %popup.url, features = %popup.features(), "Opening Twitter OAuth popup");
        opener.open_window(&popup)?;
        Ok(popup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<PopupWindow>>,
    }

    impl WindowOpener for RecordingOpener {
        fn open_window(&self, popup: &PopupWindow) -> ConnectorResult<()> {
            self.opened.borrow_mut().push(popup.clone());
            Ok(())
        }
    }

    #[test]
    fn default_metadata() {
        let connector = TwitterConnector::default();
        assert_eq!(connector.name, "twitter");
        assert_eq!(connector.rank, 20);
        assert!(connector.initialized);
        assert!(!connector.is_linked());

        let json = serde_json::to_value(&connector).unwrap();
        assert_eq!(json["imageCard"], "/gamification-twitter/images/TwitterXWhite.svg");
        assert_eq!(json["profileBaseUrl"], "https://twitter.com");
    }

    #[test]
    fn profile_url_strips_at_sign() {
        let connector = TwitterConnector::default();
        assert_eq!(connector.profile_url("@meeds_io"), "https://twitter.com/meeds_io");
    }

    #[test]
    fn open_oauth_popup_hands_centered_window_to_opener() {
        let connector = TwitterConnector::default();
        let opener = RecordingOpener::default();

        let popup = connector
            .open_oauth_popup("https://meeds.example.com/", Viewport::new(1280.0, 800.0), &opener)
            .unwrap();

        assert_eq!(popup.url, "https://meeds.example.com/portal/twitterOauth");
        assert_eq!(popup.name, "Twitter OAuth");
        assert_eq!(popup.features(), "width=600, height=600, left=340, top=100");
        assert_eq!(opener.opened.borrow().as_slice(), &[popup]);
    }
}
