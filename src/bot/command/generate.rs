//! `/gen`: look up a manifest by AppID and hand the file to the requester.

use std::time::Instant;

use serenity::all::{
    ChannelId, CommandInteraction, CommandOptionType, Context, CreateAttachment, CreateCommand,
    CreateCommandOption, CreateInteractionResponseFollowup, CreateMessage, EditInteractionResponse,
    GuildId, Mention, RoleId, UserId,
};

use crate::{
    bot::command::string_option,
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::drive_file::FileRecord,
    service::{
        manifest::{validate_appid, ManifestService},
        notification::embed,
    },
    state::AppState,
};

pub const NAME: &str = "gen";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Fetch a manifest (.zip) from Google Drive by Steam AppID")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "appid", "Steam AppID, e.g. 730")
                .required(true),
        )
}

/// Runs `/gen`.
///
/// The AppID is validated before the interaction is deferred so invalid input gets an
/// immediate ephemeral error. A found manifest is announced publicly and the file is
/// sent to the requester only. A missing manifest is posted to the guild's request
/// channel, if one is configured.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    if let Some(guild_id) = command.guild_id {
        GuildConfigRepository::new(&state.db)
            .ensure(guild_id.get())
            .await?;
    }

    let appid = validate_appid(string_option(command, "appid")?)?;

    command.defer(&ctx.http).await?;
    let started = Instant::now();

    let service = ManifestService::new(&state.drive, &state.steam);

    let Some(found) = service.lookup(&appid).await? else {
        tracing::info!("No manifest for AppID {} requested by {}", appid, command.user.id);

        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new()
                    .content(format!("❌ No manifest found for AppID `{}`.", appid)),
            )
            .await?;

        if let Some(guild_id) = command.guild_id {
            post_request(state, ctx, &service, guild_id, &appid, command.user.id).await?;
        }

        return Ok(());
    };

    let manifest_embed =
        embed::manifest_embed(&found.info, &found.record, started.elapsed(), command.user.id);
    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(manifest_embed))
        .await?;

    send_file(ctx, command, &service, &found.record).await;

    Ok(())
}

/// Sends the manifest file as an ephemeral follow-up.
///
/// The public embed has already gone out, so failures here are reported to the
/// requester and logged rather than failing the command.
async fn send_file(
    ctx: &Context,
    command: &CommandInteraction,
    service: &ManifestService<'_>,
    record: &FileRecord,
) {
    let followup = match service.download(record).await {
        Ok(bytes) => CreateInteractionResponseFollowup::new()
            .content("📥 Manifest file ready to download:")
            .add_file(CreateAttachment::bytes(bytes, record.key.clone())),
        Err(e) => {
            tracing::warn!("Failed to download {} from Drive: {}", record.key, e);

            CreateInteractionResponseFollowup::new()
                .content("⚠️ Failed to download the file, please try again later.")
        }
    };

    if let Err(e) = command
        .create_followup(&ctx.http, followup.ephemeral(true))
        .await
    {
        tracing::warn!("Failed to send {} to {}: {}", record.key, command.user.id, e);
    }
}

/// Posts a "not found" request to the guild's request channel, mentioning the request
/// role when one is set. Guilds without a request channel are skipped.
async fn post_request(
    state: &AppState,
    ctx: &Context,
    service: &ManifestService<'_>,
    guild_id: GuildId,
    appid: &str,
    requester: UserId,
) -> Result<(), AppError> {
    let Some(config) = GuildConfigRepository::new(&state.db)
        .get_by_guild_id(guild_id.get())
        .await?
    else {
        return Ok(());
    };

    let Some(channel_id) = config.request_channel_id else {
        return Ok(());
    };

    let info = service.app_info(appid).await;
    let mut message = CreateMessage::new().embed(embed::not_found_embed(&info, requester));
    if let Some(role_id) = config.request_role_id {
        message = message.content(Mention::from(RoleId::new(role_id)).to_string());
    }

    if let Err(e) = ChannelId::new(channel_id)
        .send_message(&ctx.http, message)
        .await
    {
        tracing::warn!(
            "Failed to post request for AppID {} to channel {}: {}",
            appid,
            channel_id,
            e
        );
    }

    Ok(())
}
