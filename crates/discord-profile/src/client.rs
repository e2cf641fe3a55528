//! Discord REST client

use tracing::{debug, warn};

use crate::error::{DiscordError, Result};
use crate::types::{DiscordUser, ExtendedProfile, ProfileResult, UserProfile};

/// Looks up users with a bot token and normalizes the result
///
/// One request per call: no caching, retries or rate-limit handling.
#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl DiscordClient {
    /// Base URL of the Discord REST API v10
    pub const DEFAULT_BASE_URL: &'static str = "https://discord.com/api/v10";

    /// Create a client for the public Discord API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, Self::DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API base URL
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw user record
    pub async fn fetch_user(&self, user_id: &str) -> Result<DiscordUser> {
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(user_id));
        debug!(user_id, url = %url, "Fetching Discord user");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            warn!(user_id, status = %status, "Discord API returned error status");
            return Err(DiscordError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Look up a user and normalize it, folding every failure into an error record
    pub async fn resolve(&self, user_id: &str) -> ProfileResult {
        let result = self
            .fetch_user(user_id)
            .await
            .map(|user| UserProfile::from_user(user_id, &user));

        if let Err(ref e) = result {
            debug!(user_id, error = %e, "Profile lookup failed");
        }

        result.into()
    }

    /// Look up a user and build the extended profile
    pub async fn resolve_extended(&self, user_id: &str) -> Result<ExtendedProfile> {
        let user = self.fetch_user(user_id).await?;
        Ok(ExtendedProfile::from_user(user_id, &user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use serde_json::json;

    const TOKEN: &str = "test-token";

    /// Stand-in for `GET /users/{id}`
    async fn mock_user(Path(id): Path<String>, headers: HeaderMap) -> Response {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bot {}", TOKEN));
        if !authorized {
            return (
                StatusCode::UNAUTHORIZED,
                r#"{"message": "401: Unauthorized", "code": 0}"#,
            )
                .into_response();
        }

        match id.as_str() {
            "100" => Json(json!({
                "id": "100",
                "username": "wumpus",
                "global_name": "Wumpus",
                "avatar": "abc123",
                "discriminator": "0"
            }))
            .into_response(),
            "200" => Json(json!({
                "id": "200",
                "username": "legacy",
                "discriminator": "7"
            }))
            .into_response(),
            "300" => Json(json!({
                "id": "300",
                "username": "migrated",
                "global_name": null,
                "avatar": null,
                "discriminator": "0"
            }))
            .into_response(),
            "600" => Json(json!({
                "id": "600",
                "username": "wumpus",
                "avatar": "abc123",
                "discriminator": "0",
                "accent_color": null,
                "banner_color": "#1d1e21",
                "public_flags": "unexpected"
            }))
            .into_response(),
            "500" => "this is not json".into_response(),
            _ => (
                StatusCode::NOT_FOUND,
                r#"{"message": "Unknown User", "code": 10013}"#,
            )
                .into_response(),
        }
    }

    async fn spawn_upstream() -> String {
        let router = Router::new().route("/users/{id}", get(mock_user));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn test_client() -> DiscordClient {
        DiscordClient::with_base_url(TOKEN, &spawn_upstream().await)
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = DiscordClient::with_base_url(TOKEN, "http://localhost:9000/api/");
        assert_eq!(client.base_url(), "http://localhost:9000/api");
        assert_eq!(
            DiscordClient::new(TOKEN).base_url(),
            "https://discord.com/api/v10"
        );
    }

    #[tokio::test]
    async fn test_resolve_custom_avatar() {
        let client = test_client().await;

        match client.resolve("100").await {
            ProfileResult::Found(profile) => {
                assert_eq!(profile.name, "wumpus");
                assert_eq!(profile.displayname, "Wumpus");
                assert_eq!(
                    profile.avatar,
                    "https://cdn.discordapp.com/avatars/100/abc123.png?size=1024"
                );
                assert_eq!(profile.id, "100");
            }
            ProfileResult::Failed(e) => panic!("unexpected failure: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_resolve_default_avatar_from_discriminator() {
        let client = test_client().await;

        let ProfileResult::Found(profile) = client.resolve("200").await else {
            panic!("expected profile");
        };
        assert_eq!(profile.avatar, "https://cdn.discordapp.com/embed/avatars/2.png");
        assert_eq!(profile.displayname, "legacy");
        assert_eq!(profile.discriminator, "7");
    }

    #[tokio::test]
    async fn test_resolve_migrated_account() {
        let client = test_client().await;

        let ProfileResult::Found(profile) = client.resolve("300").await else {
            panic!("expected profile");
        };
        assert_eq!(profile.avatar, "https://cdn.discordapp.com/embed/avatars/0.png");
        assert_eq!(profile.displayname, "migrated");
    }

    #[tokio::test]
    async fn test_resolve_with_string_banner_color() {
        let client = test_client().await;

        let ProfileResult::Found(profile) = client.resolve("600").await else {
            panic!("expected profile");
        };
        assert_eq!(
            profile.avatar,
            "https://cdn.discordapp.com/avatars/600/abc123.png?size=1024"
        );

        let extended = client.resolve_extended("600").await.unwrap();
        assert_eq!(extended.banner_color.as_deref(), Some("#1d1e21"));
        assert!(extended.accent_color.is_none());
        assert!(extended.public_flags.is_none());
    }

    #[tokio::test]
    async fn test_resolve_unknown_user() {
        let client = test_client().await;

        let result = client.resolve("404").await;
        assert!(!result.is_success());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["error"], "Discord API error: 404");
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("Unknown User"));
    }

    #[tokio::test]
    async fn test_resolve_bad_token() {
        let upstream = spawn_upstream().await;
        let client = DiscordClient::with_base_url("wrong", &upstream);

        let err = client.fetch_user("100").await.unwrap_err();
        assert!(matches!(err, DiscordError::Api { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_body() {
        let client = test_client().await;

        let ProfileResult::Failed(err) = client.resolve("500").await else {
            panic!("expected failure");
        };
        assert!(err.error.starts_with("Request failed: "));
        assert!(err.message.is_none());
    }

    #[tokio::test]
    async fn test_resolve_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = DiscordClient::with_base_url(TOKEN, &format!("http://{}", addr));
        let result = client.resolve("100").await;

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["error"].as_str().unwrap().starts_with("Request failed: "));
        assert_eq!(json["success"], false);
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn test_resolve_extended() {
        let client = test_client().await;

        let profile = client.resolve_extended("100").await.unwrap();
        assert_eq!(
            profile.avatar_static,
            "https://cdn.discordapp.com/avatars/100/abc123.png?size=1024"
        );
        assert!(profile.avatar_animated.is_none());
        assert_eq!(profile.premium_type.as_deref(), Some("None"));
        assert!(profile.registered_at.is_some());

        let err = client.resolve_extended("404").await.unwrap_err();
        assert!(matches!(err, DiscordError::Api { status: 404, .. }));
    }
}
