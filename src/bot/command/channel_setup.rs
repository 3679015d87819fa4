//! Setup commands choosing where each kind of notification is posted.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage, Mention,
    Permissions,
};

use crate::{
    bot::command::{channel_option, require_guild, role_option},
    data::guild_config::GuildConfigRepository,
    error::AppError,
    state::AppState,
};

pub const UPLOAD_NAME: &str = "channeluploadsetup";
pub const UPDATE_NAME: &str = "channelupdatesetup";
pub const REQUEST_NAME: &str = "channelrequestsetup";

fn setup_command(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description(description)
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(CommandOptionType::Channel, "channel", "Text channel")
                .channel_types(vec![ChannelType::Text])
                .required(true),
        )
}

pub fn register_upload() -> CreateCommand {
    setup_command(UPLOAD_NAME, "Set the channel for new file (Added) notifications")
}

pub fn register_update() -> CreateCommand {
    setup_command(UPDATE_NAME, "Set the channel for file update notifications")
}

pub fn register_request() -> CreateCommand {
    setup_command(
        REQUEST_NAME,
        "Set the channel for not-found requests, with an optional role mention",
    )
    .add_option(CreateCommandOption::new(
        CommandOptionType::Role,
        "role",
        "Role to mention on requests",
    ))
}

pub async fn run_upload(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;
    let channel_id = channel_option(command, "channel")?;

    GuildConfigRepository::new(&state.db)
        .set_upload_channel(guild_id.get(), channel_id.get())
        .await?;

    tracing::info!("Guild {} set upload channel {}", guild_id, channel_id);

    reply(
        ctx,
        command,
        format!("✅ **Added** channel set to {}", Mention::from(channel_id)),
    )
    .await
}

pub async fn run_update(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;
    let channel_id = channel_option(command, "channel")?;

    GuildConfigRepository::new(&state.db)
        .set_update_channel(guild_id.get(), channel_id.get())
        .await?;

    tracing::info!("Guild {} set update channel {}", guild_id, channel_id);

    reply(
        ctx,
        command,
        format!("✅ **Updated** channel set to {}", Mention::from(channel_id)),
    )
    .await
}

/// Sets the request channel. Leaving out the role clears a previous mention.
pub async fn run_request(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;
    let channel_id = channel_option(command, "channel")?;
    let role_id = role_option(command, "role");

    GuildConfigRepository::new(&state.db)
        .set_request_channel(guild_id.get(), channel_id.get(), role_id.map(|id| id.get()))
        .await?;

    tracing::info!(
        "Guild {} set request channel {} (role: {:?})",
        guild_id,
        channel_id,
        role_id
    );

    let role_text = match role_id {
        Some(role_id) => format!("mentioning {}", Mention::from(role_id)),
        None => "without a mention".to_string(),
    };

    reply(
        ctx,
        command,
        format!(
            "✅ **Request (Not Found)** channel set to {} {}",
            Mention::from(channel_id),
            role_text
        ),
    )
    .await
}

async fn reply(ctx: &Context, command: &CommandInteraction, content: String) -> Result<(), AppError> {
    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content));

    command.create_response(&ctx.http, response).await?;

    Ok(())
}
