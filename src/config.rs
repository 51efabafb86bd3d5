use std::env;

use crate::models::ConfigError;

const DEFAULT_PREFIX: &str = "!";

/// Settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_values(env::var("DISCORD_TOKEN").ok(), env::var("BOT_PREFIX").ok())
    }

    fn from_values(token: Option<String>, prefix: Option<String>) -> Result<Self, ConfigError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let prefix = match prefix {
            Some(p) if p.chars().any(char::is_whitespace) => {
                return Err(ConfigError::InvalidPrefix(p));
            }
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PREFIX.to_string(),
        };

        Ok(Self { token, prefix })
    }
}
