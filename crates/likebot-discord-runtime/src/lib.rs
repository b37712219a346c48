//! Discord surface for the like bot: slash-command registration, argument
//! extraction, and embed rendering around the like-request pipeline.

mod discord_runtime;

pub use discord_runtime::{run_discord_runtime, DiscordRuntimeConfig};
