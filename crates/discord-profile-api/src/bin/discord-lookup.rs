//! Ad-hoc Discord user lookup
//!
//! Prints the normalized profile of one user as JSON.

use clap::Parser;
use discord_profile::{DiscordClient, ExtendedProfile, ProfileResult};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "discord-lookup")]
#[command(about = "Look up a Discord user's public profile", long_about = None)]
struct Args {
    /// Discord user id (snowflake)
    user_id: String,

    /// Bot token used to authenticate against the Discord API
    #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
    token: String,

    /// Discord REST API base URL
    #[arg(long, env = "DISCORD_API_BASE_URL", default_value = DiscordClient::DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Print the extended profile (banner, colours, account age)
    #[arg(long)]
    extended: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("discord_lookup=info,discord_profile=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = DiscordClient::with_base_url(args.token, &args.api_base_url);

    info!(user_id = %args.user_id, "Looking up Discord user");

    let (json, success) = if args.extended {
        let profile = client
            .resolve_extended(&args.user_id)
            .await
            .unwrap_or_else(|e| ExtendedProfile::failure(e.to_string()));
        let success = profile.success;
        (serde_json::to_string_pretty(&profile), success)
    } else {
        let result = client.resolve(&args.user_id).await;
        let success = matches!(result, ProfileResult::Found(_));
        (serde_json::to_string_pretty(&result), success)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize result: {}", e);
            return ExitCode::FAILURE;
        }
    }

    debug!(success, "Lookup finished");
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
