//! Discord embeds for change announcements and `/gen` replies.

use std::time::Duration;

use serenity::all::{CreateEmbed, CreateEmbedFooter, Mention, UserId};

use crate::model::{drive_file::FileRecord, steam::SteamAppInfo};

pub const ADDED_COLOR: u32 = 0x2ecc71;
pub const UPDATED_COLOR: u32 = 0xe67e22;
pub const MANIFEST_COLOR: u32 = 0x9b59b6;
pub const NOT_FOUND_COLOR: u32 = 0xe74c3c;

const FOOTER_TEXT: &str = "Generated by TechStation Manifest";

/// Announcement for a file that appeared in the folder.
pub fn added_embed(info: &SteamAppInfo, record: &FileRecord) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🆕 New Game Added")
        .description(format!("**{}** (`{}`) has been added.", info.name, info.appid))
        .color(ADDED_COLOR)
        .field("📦 File Size", format!("{} KB", record.size_kb()), true)
        .field("🔗 Links", links(info), true);

    with_thumbnail(embed, info)
}

/// Announcement for a file whose content changed.
pub fn updated_embed(info: &SteamAppInfo, old: &FileRecord, new: &FileRecord) -> CreateEmbed {
    let size = if old.size_bytes == new.size_bytes {
        format!("{} KB", new.size_kb())
    } else {
        format!("{} KB → {} KB", old.size_kb(), new.size_kb())
    };

    let embed = CreateEmbed::new()
        .title("♻️ Game Updated")
        .description(format!("**{}** (`{}`) has been updated.", info.name, info.appid))
        .color(UPDATED_COLOR)
        .field("📦 File Size", size, true)
        .field("🔗 Links", links(info), true);

    with_thumbnail(embed, info)
}

/// Public reply to a successful `/gen`.
///
/// # Arguments
/// - `info` - Steam metadata for the requested app
/// - `record` - Manifest file found in the folder
/// - `elapsed` - Time spent on the lookup, shown to the requester
/// - `requester` - User who ran the command
pub fn manifest_embed(
    info: &SteamAppInfo,
    record: &FileRecord,
    elapsed: Duration,
    requester: UserId,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("✅ Manifest Retrieved")
        .color(MANIFEST_COLOR)
        .field("🎮 Game", &info.name, true)
        .field("🆔 AppID", &info.appid, true)
        .field("📦 File Size", format!("{} KB", record.size_kb()), true)
        .field("📅 Release Date", &info.release_date, true)
        .field("⏱️ Time", format!("{:.2}s", elapsed.as_secs_f64()), true)
        .field("👤 Requester", Mention::from(requester).to_string(), true)
        .field("🔗 Links", links(info), false)
        .field(
            "📥 Download",
            "Only the requester can download the file (see below).",
            false,
        );

    if !info.description.is_empty() {
        embed = embed.field("ℹ️ Info", &info.description, false);
    }
    if let Some(image) = &info.header_image {
        embed = embed.image(image);
    }

    embed.footer(CreateEmbedFooter::new(FOOTER_TEXT))
}

/// Request-channel post for a `/gen` that found no manifest.
pub fn not_found_embed(info: &SteamAppInfo, requester: UserId) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("❌ Game Requested (Not Found)")
        .description(format!(
            "User {} requested AppID **{}**",
            Mention::from(requester),
            info.appid
        ))
        .color(NOT_FOUND_COLOR)
        .field("Steam Store", format!("[Open]({})", info.store_url()), true)
        .field("SteamDB", format!("[Open]({})", info.steamdb_url()), true);

    with_thumbnail(embed, info)
}

fn links(info: &SteamAppInfo) -> String {
    format!("[Steam]({}) | [SteamDB]({})", info.store_url(), info.steamdb_url())
}

fn with_thumbnail(embed: CreateEmbed, info: &SteamAppInfo) -> CreateEmbed {
    match &info.header_image {
        Some(image) => embed.thumbnail(image),
        None => embed,
    }
}
