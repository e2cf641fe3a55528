use chrono::{DateTime, Utc};

/// Discord epoch (2015-01-01T00:00:00Z) in Unix milliseconds
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Account creation time encoded in the top 42 bits of a snowflake
pub fn registered_at(snowflake: &str) -> Option<DateTime<Utc>> {
    let id = snowflake.parse::<u64>().ok()?;
    let millis = i64::try_from(id >> 22).ok()? + DISCORD_EPOCH_MS;
    DateTime::from_timestamp_millis(millis)
}
