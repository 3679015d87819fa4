use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction,
};

use crate::{
    bot::command::{channel_setup, generate, notif},
    error::AppError,
    state::AppState,
};

/// Dispatches slash commands to their handlers and reports failures to the user.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Received /{} from user {} in guild {:?}",
        command.data.name,
        command.user.id,
        command.guild_id
    );

    let result = match command.data.name.as_str() {
        generate::NAME => generate::run(state, &ctx, &command).await,
        notif::NAME => notif::run(state, &ctx, &command).await,
        channel_setup::UPLOAD_NAME => channel_setup::run_upload(state, &ctx, &command).await,
        channel_setup::UPDATE_NAME => channel_setup::run_update(state, &ctx, &command).await,
        channel_setup::REQUEST_NAME => channel_setup::run_request(state, &ctx, &command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        report_error(&ctx, &command, e).await;
    }
}

/// Tells the user a command failed.
///
/// Commands that already deferred cannot create a response, their deferred reply is
/// edited instead.
async fn report_error(ctx: &Context, command: &CommandInteraction, err: AppError) {
    let message = user_message(&err);

    match &err {
        AppError::BadRequest(_) | AppError::NotFound(_) => {
            tracing::debug!("/{} rejected: {}", command.data.name, err)
        }
        _ => tracing::error!("/{} failed: {}", command.data.name, err),
    }

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(&message)
            .ephemeral(true),
    );

    if command.create_response(&ctx.http, response).await.is_err() {
        let edit = EditInteractionResponse::new().content(message);

        if let Err(e) = command.edit_response(&ctx.http, edit).await {
            tracing::error!("Failed to report error for /{}: {}", command.data.name, e);
        }
    }
}

/// Text shown to the user for a failed command. Internal details stay in the logs.
fn user_message(err: &AppError) -> String {
    match err {
        AppError::BadRequest(msg) | AppError::NotFound(msg) => format!("❌ {}", msg),
        AppError::DriveErr(_) => {
            "❌ Google Drive could not be reached, try again later.".to_string()
        }
        _ => "❌ Something went wrong while running this command.".to_string(),
    }
}
