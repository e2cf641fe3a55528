//! Discord User Profile Client
//!
//! Looks up a Discord user through the REST API (`GET /users/{id}`) with a bot
//! token and normalizes the raw record into a flat profile with fully
//! qualified CDN URLs.
//!
//! # Example
//!
//! ```no_run
//! use discord_profile::{DiscordClient, ProfileResult};
//!
//! # async fn example() {
//! let client = DiscordClient::new("bot-token");
//!
//! match client.resolve("470573716711931905").await {
//!     ProfileResult::Found(profile) => println!("{} -> {}", profile.name, profile.avatar),
//!     ProfileResult::Failed(err) => eprintln!("{}", err.error),
//! }
//! # }
//! ```

mod cdn;
mod client;
mod error;
mod snowflake;
mod types;

pub use cdn::{
    banner_urls, default_avatar_index, default_avatar_url, user_avatar_urls, CDN_BASE_URL,
};
pub use client::DiscordClient;
pub use error::{DiscordError, Result};
pub use snowflake::{registered_at, DISCORD_EPOCH_MS};
pub use types::{
    hex_color, premium_type_name, DiscordUser, ErrorResult, ExtendedProfile, ProfileColor,
    ProfileResult, UserProfile,
};
