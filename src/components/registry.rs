use std::collections::HashMap;
use std::fmt;

use tracing::debug;

/// Building blocks of the Twitter connector administration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminComponent {
    ConnectorItem,
    ConnectionSettingDrawer,
    AccountFormDrawer,
    TokenFormDrawer,
    WatchedAccountList,
    WatchedAccount,
    WatchedAccountDetail,
    EventList,
    EventItem,
}

impl AdminComponent {
    pub const ALL: [AdminComponent; 9] = [
        Self::ConnectorItem,
        Self::ConnectionSettingDrawer,
        Self::AccountFormDrawer,
        Self::TokenFormDrawer,
        Self::WatchedAccountList,
        Self::WatchedAccount,
        Self::WatchedAccountDetail,
        Self::EventList,
        Self::EventItem,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::ConnectorItem => "twitter-admin-connector-item",
            Self::ConnectionSettingDrawer => "twitter-admin-connection-setting-drawer",
            Self::AccountFormDrawer => "twitter-admin-account-form-drawer",
            Self::TokenFormDrawer => "twitter-admin-token-form-drawer",
            Self::WatchedAccountList => "twitter-admin-watched-account-list",
            Self::WatchedAccount => "twitter-admin-watched-account",
            Self::WatchedAccountDetail => "twitter-admin-watched-account-detail",
            Self::EventList => "twitter-admin-event-list",
            Self::EventItem => "twitter-admin-event-item",
        }
    }
}

impl fmt::Display for AdminComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Name to component table handed to whatever composes the admin screen.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, AdminComponent>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin_components() -> Self {
        let mut registry = Self::new();
        for component in AdminComponent::ALL {
            registry.register(component.tag(), component);
        }
        registry
    }

    /// Last registration under a name wins. Returns the replaced component.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        component: AdminComponent,
    ) -> Option<AdminComponent> {
        let name = name.into();
        debug!(%name, %component, "Registering admin component");
        self.components.insert(name, component)
    }

    pub fn get(&self, name: &str) -> Option<AdminComponent> {
        self.components.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
