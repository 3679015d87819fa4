//! Database repository layer.
//!
//! Repositories hold a borrowed connection, use SeaORM entity models internally and
//! return domain models so the service layer never sees entity types.

pub mod announced_file;
pub mod drive_watch;
pub mod guild_config;

#[cfg(test)]
mod test;
