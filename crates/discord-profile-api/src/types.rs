//! Request and response types for the HTTP front

use discord_profile::ExtendedProfile;
use serde::Serialize;
use std::collections::BTreeMap;

/// User id used in the self-describing index
pub const EXAMPLE_USER_ID: &str = "470573716711931905";

/// Query string of the lookup routes
#[derive(Debug, Default)]
pub struct UserQuery {
    pub userid: Option<String>,
}

impl UserQuery {
    /// Build from decoded query pairs; the first `userid` wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let userid = pairs
            .into_iter()
            .find(|(key, _)| key == "userid")
            .map(|(_, value)| value);
        Self { userid }
    }

    /// The requested user id, if present and non-empty
    pub fn user_id(&self) -> Option<&str> {
        self.userid.as_deref().filter(|id| !id.is_empty())
    }
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub success: bool,
}

/// Token configuration report
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub configured: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub success: bool,
}

/// Self-describing index served on `GET /api`
#[derive(Debug, Serialize)]
pub struct ApiIndexResponse {
    pub message: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub example_usage: ExampleUsage,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ExampleUsage {
    pub description: &'static str,
    pub url: String,
    pub sample_response: ExtendedProfile,
}

impl ApiIndexResponse {
    /// Index whose example URL points at `base_url`
    pub fn new(base_url: &str) -> Self {
        let endpoints = BTreeMap::from([
            ("GET /?userid=USER_ID", "Normalized Discord user profile"),
            ("GET /api?userid=USER_ID", "Extended Discord user profile"),
            ("GET /api/discord?userid=USER_ID", "Extended Discord user profile"),
            ("GET /health", "API health check"),
            ("GET /status", "Bot token configuration status"),
        ]);

        Self {
            message: "Discord API - look up a Discord user's profile by id.",
            endpoints,
            example_usage: ExampleUsage {
                description: "Example GET request for a user's extended profile:",
                url: format!("{}/api/discord?userid={}", base_url, EXAMPLE_USER_ID),
                sample_response: sample_profile(),
            },
            success: true,
        }
    }
}

fn sample_profile() -> ExtendedProfile {
    let cdn = discord_profile::CDN_BASE_URL;
    ExtendedProfile {
        name: "anime.228".to_string(),
        displayname: "Animesh".to_string(),
        avatar_static: format!(
            "{}/avatars/{}/a_3e5f56c15503b79ae3e1fa6cafc7bbbd.png?size=1024",
            cdn, EXAMPLE_USER_ID
        ),
        avatar_animated: Some(format!(
            "{}/avatars/{}/a_3e5f56c15503b79ae3e1fa6cafc7bbbd.gif?size=1024",
            cdn, EXAMPLE_USER_ID
        )),
        discriminator: Some("0".to_string()),
        id: Some(EXAMPLE_USER_ID.to_string()),
        registered_at: Some("2018-07-15T11:45:12.000Z".to_string()),
        banner_color: Some("#ff00ff".to_string()),
        accent_color: Some("#00ff00".to_string()),
        bio: Some("Hello! I am a Discord user.".to_string()),
        public_flags: Some(65536),
        is_bot: Some(false),
        is_system: Some(false),
        locale: Some("ru".to_string()),
        premium_type: Some("Nitro".to_string()),
        success: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_user_query() {
        let query = UserQuery::from_pairs(pairs(&[("format", "json"), ("userid", "42")]));
        assert_eq!(query.user_id(), Some("42"));

        let empty = UserQuery::from_pairs(pairs(&[("userid", "")]));
        assert_eq!(empty.user_id(), None);

        assert_eq!(UserQuery::default().user_id(), None);
    }

    #[test]
    fn test_user_query_first_value_wins() {
        let query = UserQuery::from_pairs(pairs(&[("userid", "1"), ("userid", "2")]));
        assert_eq!(query.user_id(), Some("1"));
    }

    #[test]
    fn test_api_index_example_url() {
        let index = ApiIndexResponse::new("https://profiles.example.com");
        assert_eq!(
            index.example_usage.url,
            "https://profiles.example.com/api/discord?userid=470573716711931905"
        );
        assert!(index.endpoints.contains_key("GET /health"));

        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json["example_usage"]["sample_response"]["premium_type"], "Nitro");
        assert!(json["example_usage"]["sample_response"]
            .get("banner_static")
            .is_none());
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_string(&HealthResponse {
            status: "API is running",
            success: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"API is running","success":true}"#);
    }
}
