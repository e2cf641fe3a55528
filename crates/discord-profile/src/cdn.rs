//! Discord CDN URL construction

/// Base URL of Discord's media CDN
pub const CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// Number of built-in placeholder avatars
const DEFAULT_AVATAR_COUNT: i64 = 5;

/// Requested image size for custom avatars and banners
const IMAGE_SIZE: u32 = 1024;

/// Hashes with this prefix also exist as GIFs
const ANIMATED_PREFIX: &str = "a_";

/// Index of the placeholder avatar for a legacy discriminator.
///
/// Empty or non-numeric discriminators map to `0`, same as migrated
/// accounts whose discriminator is `"0"`. Negative values wrap into range
/// (`-7` selects index 3).
pub fn default_avatar_index(discriminator: Option<&str>) -> u64 {
    let value = discriminator
        .and_then(|d| d.trim().parse::<i64>().ok())
        .unwrap_or(0);
    value.rem_euclid(DEFAULT_AVATAR_COUNT) as u64
}

/// URL of the placeholder avatar for a discriminator
pub fn default_avatar_url(discriminator: Option<&str>) -> String {
    format!(
        "{}/embed/avatars/{}.png",
        CDN_BASE_URL,
        default_avatar_index(discriminator)
    )
}

/// Static and (for `a_` hashes) animated URLs of a user's avatar.
///
/// Falls back to the placeholder avatar when the user has no custom one.
pub fn user_avatar_urls(
    user_id: &str,
    avatar_hash: Option<&str>,
    discriminator: Option<&str>,
) -> (String, Option<String>) {
    match avatar_hash.filter(|h| !h.is_empty()) {
        Some(hash) => asset_urls("avatars", user_id, hash),
        None => (default_avatar_url(discriminator), None),
    }
}

/// Static and animated banner URLs, if the user has a banner
pub fn banner_urls(user_id: &str, banner_hash: Option<&str>) -> Option<(String, Option<String>)> {
    banner_hash
        .filter(|h| !h.is_empty())
        .map(|hash| asset_urls("banners", user_id, hash))
}

fn asset_urls(kind: &str, user_id: &str, hash: &str) -> (String, Option<String>) {
    let url = |ext: &str| {
        format!(
            "{}/{}/{}/{}.{}?size={}",
            CDN_BASE_URL, kind, user_id, hash, ext, IMAGE_SIZE
        )
    };

    let animated = hash.starts_with(ANIMATED_PREFIX).then(|| url("gif"));
    (url("png"), animated)
}
