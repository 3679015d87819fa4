//! Slash command definitions and option helpers.

pub mod channel_setup;
pub mod generate;
pub mod notif;

use serenity::all::{
    ChannelId, CommandDataOptionValue, CommandInteraction, CreateCommand, GuildId, RoleId,
};

use crate::error::AppError;

/// Every global slash command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    vec![
        generate::register(),
        notif::register(),
        channel_setup::register_upload(),
        channel_setup::register_update(),
        channel_setup::register_request(),
    ]
}

fn option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a CommandDataOptionValue> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

/// Reads a required string option.
pub fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Result<&'a str, AppError> {
    option(command, name)
        .and_then(CommandDataOptionValue::as_str)
        .ok_or_else(|| missing_option(name))
}

/// Reads a required channel option.
pub fn channel_option(command: &CommandInteraction, name: &str) -> Result<ChannelId, AppError> {
    option(command, name)
        .and_then(CommandDataOptionValue::as_channel_id)
        .ok_or_else(|| missing_option(name))
}

/// Reads an optional role option.
pub fn role_option(command: &CommandInteraction, name: &str) -> Option<RoleId> {
    option(command, name).and_then(CommandDataOptionValue::as_role_id)
}

/// Guild the command was used in. Setup commands cannot be used in DMs.
pub fn require_guild(command: &CommandInteraction) -> Result<GuildId, AppError> {
    command
        .guild_id
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server.".to_string()))
}

fn missing_option(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing required option `{}`.", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_command_once() {
        let names: Vec<String> = all()
            .into_iter()
            .map(|command| {
                let json = serde_json::to_value(command).unwrap();
                json["name"].as_str().unwrap().to_string()
            })
            .collect();

        assert_eq!(
            names,
            vec![
                generate::NAME,
                notif::NAME,
                channel_setup::UPLOAD_NAME,
                channel_setup::UPDATE_NAME,
                channel_setup::REQUEST_NAME,
            ]
        );
    }

    /// Expected: the request role is optional while every other option is required
    #[test]
    fn marks_required_options() {
        let request = serde_json::to_value(channel_setup::register_request()).unwrap();
        let options = request["options"].as_array().unwrap();

        assert_eq!(options[0]["name"], "channel");
        assert_eq!(options[0]["required"], true);
        assert_eq!(options[1]["name"], "role");
        assert_ne!(options[1]["required"], true);

        let generate_cmd = serde_json::to_value(generate::register()).unwrap();
        assert_eq!(generate_cmd["options"][0]["name"], "appid");
        assert_eq!(generate_cmd["options"][0]["required"], true);
    }
}
