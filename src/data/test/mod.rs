mod announced_file;
mod drive_watch;
mod guild_config;
