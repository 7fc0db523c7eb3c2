//! Client side of the gamification Twitter/X connector.
//!
//! [`services::TwitterConnectorClient`] wraps the administration REST API
//! (bearer token, watched accounts, watched tweets, event toggles).
//! [`components::ComponentRegistry`] names the admin screen building blocks and
//! [`oauth::TwitterConnector`] describes the user-facing connector, including
//! its OAuth popup.

pub mod components;
pub mod config;
pub mod errors;
pub mod oauth;
pub mod services;
pub mod state;

pub use components::{AdminComponent, ComponentRegistry};
pub use config::ConnectorConfig;
pub use errors::{ConnectorError, ConnectorResult};
pub use oauth::{BrowserOpener, PopupWindow, TwitterConnector, Viewport, WindowOpener};
pub use services::{
    EntityList, EventStatus, PageRequest, TokenStatus, Tweet, TweetPage, TwitterConnectorClient,
    WatchedAccount, WatchedAccountPage,
};
pub use state::AppState;
