use chrono::SecondsFormat;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::cdn::{banner_urls, user_avatar_urls};
use crate::error::DiscordError;
use crate::snowflake::registered_at;

/// User object returned by `GET /users/{id}`
///
/// Every field is optional so that partial records still normalize. Fields
/// outside the core profile decode leniently: a value of an unexpected type
/// becomes `None` instead of failing the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordUser {
    pub id: Option<String>,
    pub username: Option<String>,
    pub global_name: Option<String>,
    pub discriminator: Option<String>,
    /// Avatar asset hash
    pub avatar: Option<String>,
    /// Banner asset hash
    #[serde(default, deserialize_with = "lenient")]
    pub banner: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub banner_color: Option<ProfileColor>,
    #[serde(default, deserialize_with = "lenient")]
    pub accent_color: Option<ProfileColor>,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub public_flags: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub bot: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub system: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub mfa_enabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub locale: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub premium_type: Option<u8>,
}

/// Decode any JSON value, keeping it only if it has the expected type
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value::<Option<T>>(value).ok().flatten())
}

/// Profile colour as sent by Discord: an RGB integer (`accent_color`) or an
/// already formatted `#rrggbb` string (`banner_color`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProfileColor {
    Rgb(u32),
    Hex(String),
}

impl ProfileColor {
    /// `#rrggbb` form; strings pass through unchanged
    pub fn to_hex(&self) -> String {
        match self {
            Self::Rgb(color) => hex_color(*color),
            Self::Hex(hex) => hex.clone(),
        }
    }
}

impl DiscordUser {
    /// `global_name` when set and non-empty, otherwise the username
    pub fn display_name(&self) -> String {
        self.global_name
            .as_deref()
            .filter(|g| !g.is_empty())
            .or(self.username.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Normalized profile served on successful lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub displayname: String,
    pub avatar: String,
    pub discriminator: String,
    pub id: String,
    pub success: bool,
}

impl UserProfile {
    /// Normalize a raw user record. `user_id` is the id that was looked up
    /// and addresses the avatar on the CDN.
    pub fn from_user(user_id: &str, user: &DiscordUser) -> Self {
        let (avatar, _) = user_avatar_urls(
            user_id,
            user.avatar.as_deref(),
            user.discriminator.as_deref(),
        );

        Self {
            name: user.username.clone().unwrap_or_default(),
            displayname: user.display_name(),
            avatar,
            discriminator: user.discriminator.clone().unwrap_or_default(),
            id: user.id.clone().unwrap_or_default(),
            success: true,
        }
    }
}

/// Failed lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    /// Raw upstream body, when Discord answered with an error status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub success: bool,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            success: false,
        }
    }
}

impl From<DiscordError> for ErrorResult {
    fn from(err: DiscordError) -> Self {
        let error = err.to_string();
        match err {
            DiscordError::Api { body, .. } => Self {
                error,
                message: body,
                success: false,
            },
            DiscordError::Http(_) => Self::new(error),
        }
    }
}

/// Outcome of a profile lookup; `success` tells consumers which shape they got
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProfileResult {
    Found(UserProfile),
    Failed(ErrorResult),
}

impl ProfileResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<crate::Result<UserProfile>> for ProfileResult {
    fn from(result: crate::Result<UserProfile>) -> Self {
        match result {
            Ok(profile) => Self::Found(profile),
            Err(e) => Self::Failed(e.into()),
        }
    }
}

/// Profile with banner, colours, flags and account age
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedProfile {
    pub name: String,
    pub displayname: String,
    pub avatar_static: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_animated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_static: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_animated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtendedProfile {
    pub fn from_user(user_id: &str, user: &DiscordUser) -> Self {
        let (avatar_static, avatar_animated) = user_avatar_urls(
            user_id,
            user.avatar.as_deref(),
            user.discriminator.as_deref(),
        );
        let (banner_static, banner_animated) = match banner_urls(user_id, user.banner.as_deref()) {
            Some((url, animated)) => (Some(url), animated),
            None => (None, None),
        };

        Self {
            name: user.username.clone().unwrap_or_default(),
            displayname: user.display_name(),
            avatar_static,
            avatar_animated,
            discriminator: user.discriminator.clone(),
            id: user.id.clone(),
            registered_at: registered_at(user_id)
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            banner_static,
            banner_animated,
            banner_color: user.banner_color.as_ref().map(ProfileColor::to_hex),
            accent_color: user.accent_color.as_ref().map(ProfileColor::to_hex),
            bio: user.bio.clone(),
            public_flags: user.public_flags,
            is_bot: user.bot,
            is_system: user.system,
            mfa_enabled: user.mfa_enabled,
            locale: user.locale.clone(),
            premium_type: Some(premium_type_name(user.premium_type).to_string()),
            success: true,
            error: None,
        }
    }

    /// Empty profile carrying an error message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Format an integer RGB colour as `#rrggbb`
pub fn hex_color(color: u32) -> String {
    format!("#{:06x}", color)
}

/// Human-readable Nitro tier
pub fn premium_type_name(premium_type: Option<u8>) -> &'static str {
    match premium_type {
        Some(1) => "Nitro Classic",
        Some(2) => "Nitro",
        Some(3) => "Nitro Basic",
        _ => "None",
    }
}
