use std::fmt;

/// Caller mistakes surfaced by the reply helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// A gateway event that cannot carry an error reply
    UnsupportedEvent(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::UnsupportedEvent(kind) => write!(
                f,
                "Event must be a message or an application command, got {}",
                kind
            ),
        }
    }
}

impl std::error::Error for BotError {}

/// Problems reading the bot configuration from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingToken,
    InvalidPrefix(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingToken => write!(f, "DISCORD_TOKEN environment variable not set"),
            ConfigError::InvalidPrefix(prefix) => {
                write!(f, "BOT_PREFIX must not contain whitespace: {:?}", prefix)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
