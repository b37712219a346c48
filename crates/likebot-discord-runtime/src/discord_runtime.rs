//! Discord bridge runtime wiring slash commands to the like pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use serenity::all::{
    ChannelId, Command, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse, EventHandler, GatewayIntents,
    Interaction, Permissions, Ready,
};
use serenity::async_trait;
use serenity::Client;

use likebot_access::{check_channel_access, LikeChannelStore};
use likebot_like::{
    normalize_like_args, run_like_request, LikeApiClient, LikeOutcome, LikeRequestContext,
    RawLikeArgs,
};

mod render_helpers;
#[cfg(test)]
mod tests;

use render_helpers::{outcome_embed, toggle_notice};

const LIKE_COMMAND_NAME: &str = "like";
const SET_LIKE_CHANNEL_COMMAND_NAME: &str = "setlikechannel";

#[derive(Debug, Clone)]
/// Runtime configuration for the Discord bridge.
pub struct DiscordRuntimeConfig {
    pub discord_token: String,
    pub api_base: String,
    pub api_key: String,
    pub request_timeout_ms: u64,
    pub config_path: PathBuf,
}

/// Runs the Discord bridge until the gateway connection ends or the process
/// receives ctrl-c.
pub async fn run_discord_runtime(config: DiscordRuntimeConfig) -> Result<()> {
    let store = LikeChannelStore::load(&config.config_path)?;
    let api_client = LikeApiClient::new(
        config.api_base.clone(),
        config.api_key.clone(),
        config.request_timeout_ms,
    )?;
    let handler = LikeCommandHandler {
        store: Arc::new(store),
        api_client,
    };

    let mut client = Client::builder(&config.discord_token, GatewayIntents::GUILDS)
        .event_handler(handler)
        .await
        .context("failed to create discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received; closing discord gateway");
            shard_manager.shutdown_all().await;
        }
    });

    client.start().await.context("discord client terminated")
}

struct LikeCommandHandler {
    store: Arc<LikeChannelStore>,
    api_client: LikeApiClient,
}

#[async_trait]
impl EventHandler for LikeCommandHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "discord gateway connected");
        let commands = vec![
            like_command_definition(),
            set_like_channel_command_definition(),
        ];
        if let Err(error) = Command::set_global_commands(&ctx.http, commands).await {
            tracing::error!(%error, "failed to register slash commands");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        let result = match command.data.name.as_str() {
            LIKE_COMMAND_NAME => self.handle_like(&ctx, &command).await,
            SET_LIKE_CHANNEL_COMMAND_NAME => self.handle_set_like_channel(&ctx, &command).await,
            other => {
                tracing::debug!(command = other, "ignoring unknown command");
                Ok(())
            }
        };
        if let Err(error) = result {
            tracing::error!(command = %command.data.name, %error, "command handling failed");
            let followup = CreateInteractionResponseFollowup::new()
                .content("Something went wrong while handling the command.")
                .ephemeral(true);
            if let Err(error) = command.create_followup(&ctx.http, followup).await {
                tracing::debug!(%error, "failed to deliver failure notice");
            }
        }
    }
}

impl LikeCommandHandler {
    async fn handle_like(&self, ctx: &Context, command: &CommandInteraction) -> Result<()> {
        let context = LikeRequestContext {
            guild_id: command.guild_id.map(|id| id.to_string()),
            channel_id: command.channel_id.to_string(),
        };
        let args = RawLikeArgs {
            region: string_option(command, "region"),
            uid: string_option(command, "uid"),
        };

        // Gate and argument failures answer immediately and privately; only
        // a dispatchable request is worth deferring for.
        let decision =
            check_channel_access(&self.store, context.guild_id.as_deref(), &context.channel_id);
        if !decision.allowed() {
            return respond_ephemeral_outcome(ctx, command, &LikeOutcome::ChannelNotAllowed).await;
        }
        if normalize_like_args(&args).is_none() {
            return respond_ephemeral_outcome(ctx, command, &LikeOutcome::MissingArgument).await;
        }

        // Slash-invoked results stay visible only to the requester.
        command
            .defer_ephemeral(&ctx.http)
            .await
            .context("failed to defer like response")?;

        let outcome = run_like_request(&self.store, &self.api_client, &context, &args).await;
        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().embed(outcome_embed(&outcome)),
            )
            .await
            .context("failed to deliver like outcome")?;
        Ok(())
    }

    async fn handle_set_like_channel(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> Result<()> {
        let Some(guild_id) = command.guild_id else {
            return respond_ephemeral_text(ctx, command, "This command must be used in a server.")
                .await;
        };
        if !invoker_is_administrator(command) {
            return respond_ephemeral_text(
                ctx,
                command,
                "You need the Administrator permission to change like channels.",
            )
            .await;
        }
        let Some(channel_id) = channel_option(command, "channel") else {
            return respond_ephemeral_text(ctx, command, "Please pick a channel to toggle.").await;
        };

        let toggle = self
            .store
            .toggle_channel(&guild_id.to_string(), &channel_id.to_string())?;
        tracing::info!(
            guild_id = %guild_id,
            channel_id = %channel_id,
            toggle = toggle.as_str(),
            "like channel allowlist updated"
        );
        respond_ephemeral_text(ctx, command, &toggle_notice(toggle, channel_id.get())).await
    }
}

fn like_command_definition() -> CreateCommand {
    CreateCommand::new(LIKE_COMMAND_NAME)
        .description("Send likes to a player")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "region",
                "Region code (e.g. bd, eu, us, br)",
            )
            .required(false),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "uid", "Player UID")
                .required(false),
        )
}

fn set_like_channel_command_definition() -> CreateCommand {
    CreateCommand::new(SET_LIKE_CHANNEL_COMMAND_NAME)
        .description("Allow or block use of /like in a channel")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel to toggle access for /like",
            )
            .required(true),
        )
}

fn string_option(command: &CommandInteraction, name: &str) -> Option<String> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
        .map(str::to_string)
}

fn channel_option(command: &CommandInteraction, name: &str) -> Option<ChannelId> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_channel_id())
}

fn invoker_is_administrator(command: &CommandInteraction) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .map(|permissions| permissions.administrator())
        .unwrap_or(false)
}

async fn respond_ephemeral_outcome(
    ctx: &Context,
    command: &CommandInteraction,
    outcome: &LikeOutcome,
) -> Result<()> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(outcome_embed(outcome))
            .ephemeral(true),
    );
    command
        .create_response(&ctx.http, response)
        .await
        .context("failed to send interaction response")
}

async fn respond_ephemeral_text(
    ctx: &Context,
    command: &CommandInteraction,
    text: &str,
) -> Result<()> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(text)
            .ephemeral(true),
    );
    command
        .create_response(&ctx.http, response)
        .await
        .context("failed to send interaction response")
}
