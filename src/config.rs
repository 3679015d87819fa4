use std::{net::SocketAddr, time::Duration};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://manifestboard.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Every minute, on the minute. Six fields, seconds first.
const DEFAULT_POLL_SCHEDULE: &str = "0 * * * * *";
const DEFAULT_DRIVE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DRIVE_DOWNLOAD_TIMEOUT_SECS: u64 = 120;
const DEFAULT_STEAM_TIMEOUT_SECS: u64 = 15;

pub struct Config {
    pub discord_token: String,

    pub folder_id: String,
    pub gdrive_api_key: String,

    pub database_url: String,
    pub bind_addr: SocketAddr,

    pub poll_schedule: String,
    pub drive_timeout: Duration,
    pub drive_download_timeout: Duration,
    pub steam_timeout: Duration,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a variable
    /// or `None` if it is unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing required variable or unparsable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let bind_addr = optional("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", &bind_addr, e))?;

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            folder_id: required("FOLDER_ID")?,
            gdrive_api_key: required("GDRIVE_API_KEY")?,
            database_url: optional("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr,
            poll_schedule: optional("POLL_SCHEDULE", DEFAULT_POLL_SCHEDULE),
            drive_timeout: seconds(&lookup, "DRIVE_TIMEOUT_SECS", DEFAULT_DRIVE_TIMEOUT_SECS)?,
            drive_download_timeout: seconds(
                &lookup,
                "DRIVE_DOWNLOAD_TIMEOUT_SECS",
                DEFAULT_DRIVE_DOWNLOAD_TIMEOUT_SECS,
            )?,
            steam_timeout: seconds(&lookup, "STEAM_TIMEOUT_SECS", DEFAULT_STEAM_TIMEOUT_SECS)?,
        })
    }
}

/// Reads a positive number of seconds.
fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(Duration::from_secs(default));
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid(name, &value, "must be greater than zero")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(invalid(name, &value, e)),
    }
}

fn invalid(name: &str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
