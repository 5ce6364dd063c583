use std::env;

use crate::errors::SlackError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` when `SLACK_BOT_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self, SlackError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` when `SLACK_BOT_TOKEN` is unset or empty.
    pub fn from_lookup(
        get: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, SlackError> {
        let slack_bot_token = get("SLACK_BOT_TOKEN")
            .map_err(|e| SlackError::ConfigError(format!("SLACK_BOT_TOKEN: {e}")))?;

        if slack_bot_token.trim().is_empty() {
            return Err(SlackError::ConfigError(
                "SLACK_BOT_TOKEN: must not be empty".to_string(),
            ));
        }

        Ok(Self { slack_bot_token })
    }
}
