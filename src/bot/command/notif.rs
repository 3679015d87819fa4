//! `/notif`: switch Drive change notifications on or off.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse, Permissions,
};

use crate::{
    bot::command::string_option,
    error::{watch::WatchError, AppError},
    state::AppState,
};

pub const NAME: &str = "notif";

const USAGE: &str = "Use `/notif on` or `/notif off`.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifMode {
    On,
    Off,
}

impl NotifMode {
    /// Parses `on` / `off`, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Turn Drive monitoring (added/updated) on or off")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "mode", "on or off")
                .required(true)
                .add_string_choice("on", "on")
                .add_string_choice("off", "off"),
        )
}

/// Runs `/notif`.
///
/// Deferred because switching on fetches the whole folder listing, and taking the
/// watcher lock waits for a running cycle to finish.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(mode) = NotifMode::parse(string_option(command, "mode")?) else {
        return Err(AppError::BadRequest(USAGE.to_string()));
    };

    command.defer(&ctx.http).await?;

    let content = {
        let mut watcher = state.watch.lock().await;

        match mode {
            NotifMode::On => match watcher
                .enable(&state.db, &state.drive, state.fetch_timeout)
                .await
            {
                Ok(status) => format!(
                    "🔔 Drive notifications: **ON** (tracking {} files)",
                    status.tracked_files
                ),
                Err(WatchError::Fetch(e)) => {
                    tracing::warn!("Failed to enable notifications: {}", e);
                    "⚠️ Google Drive could not be reached, notifications stay **OFF**.".to_string()
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    "🔔 Drive notifications: **ON**, but the setting could not be saved yet. It will be retried.".to_string()
                }
            },
            NotifMode::Off => match watcher.disable(&state.db).await {
                Ok(_) => "🔕 Drive notifications: **OFF**".to_string(),
                Err(e) => {
                    tracing::error!("{}", e);
                    "🔕 Drive notifications: **OFF**, but the setting could not be saved yet. It will be retried.".to_string()
                }
            },
        }
    };

    tracing::info!("/notif {:?} by user {}", mode, command.user.id);

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}
