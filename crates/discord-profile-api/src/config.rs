use std::env;

use discord_profile::DiscordClient;

/// Service configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub discord_bot_token: Option<String>,
    pub discord_api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            discord_bot_token: None,
            discord_api_base_url: DiscordClient::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let discord_api_base_url =
            lookup("DISCORD_API_BASE_URL").unwrap_or(defaults.discord_api_base_url);

        Self {
            port,
            discord_bot_token,
            discord_api_base_url,
        }
    }

    /// Client for the configured token, if there is one
    pub fn discord_client(&self) -> Option<DiscordClient> {
        self.discord_bot_token
            .as_deref()
            .map(|token| DiscordClient::with_base_url(token, &self.discord_api_base_url))
    }
}
