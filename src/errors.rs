use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Generic failure of one REST operation. Status and body are not kept.
    #[error("{0}")]
    Rejected(String),

    /// Message sent back verbatim by the gamification server.
    #[error("{0}")]
    Server(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Unable to open window: {0}")]
    Window(#[from] std::io::Error),
}

impl ConnectorError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Message meant to be shown to the administrator as is.
    pub fn message(&self) -> String {
        match self {
            Self::Rejected(msg) | Self::Server(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_server_message(&self) -> bool {
        matches!(self, Self::Server(_))
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_and_server_messages_display_verbatim() {
        let generic = ConnectorError::rejected("Error when saving twitter account");
        assert_eq!(generic.to_string(), "Error when saving twitter account");
        assert_eq!(generic.message(), "Error when saving twitter account");
        assert!(!generic.is_server_message());

        let server = ConnectorError::Server("The Twitter account doesn't exist".to_string());
        assert_eq!(server.to_string(), "The Twitter account doesn't exist");
        assert!(server.is_server_message());
    }

    #[test]
    fn config_error_is_prefixed() {
        let err = ConnectorError::Config("TWITTER_CONNECTOR_SERVER_URL not set".to_string());
        assert_eq!(
            err.message(),
            "Invalid configuration: TWITTER_CONNECTOR_SERVER_URL not set"
        );
    }
}
