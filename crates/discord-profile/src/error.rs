//! Error types for the Discord profile client

use std::fmt;

/// Errors that can occur when looking up a Discord user
#[derive(Debug)]
pub enum DiscordError {
    /// Request could not complete (connect, timeout, body decode)
    Http(reqwest::Error),
    /// Discord answered with a non-success status
    Api { status: u16, body: Option<String> },
}

impl fmt::Display for DiscordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Request failed: {}", e),
            Self::Api { status, .. } => write!(f, "Discord API error: {}", status),
        }
    }
}

impl std::error::Error for DiscordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for DiscordError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Result type for Discord client operations
pub type Result<T> = std::result::Result<T, DiscordError>;
