use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use likebot_discord_runtime::{run_discord_runtime, DiscordRuntimeConfig};

#[derive(Debug, Parser)]
#[command(
    name = "likebot",
    about = "Discord bot bridging /like requests to the like provider",
    version
)]
struct Cli {
    /// Discord bot token.
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    discord_token: String,
    /// Base URL of the like provider API.
    #[arg(long, env = "LIKE_API_BASE")]
    api_base: String,
    /// Credential passed to the provider as a query parameter.
    #[arg(long, env = "LIKE_API_KEY", hide_env_values = true)]
    api_key: String,
    /// Bound on each outbound provider call, in milliseconds.
    #[arg(long, env = "LIKE_REQUEST_TIMEOUT_MS", default_value_t = 10_000)]
    request_timeout_ms: u64,
    /// Path of the persisted channel allowlist document.
    #[arg(long, env = "LIKE_CHANNELS_PATH", default_value = "like_channels.json")]
    config_path: PathBuf,
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    run_discord_runtime(DiscordRuntimeConfig {
        discord_token: cli.discord_token,
        api_base: cli.api_base,
        api_key: cli.api_key,
        request_timeout_ms: cli.request_timeout_ms,
        config_path: cli.config_path,
    })
    .await
}
