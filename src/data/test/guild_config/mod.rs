use crate::{data::guild_config::GuildConfigRepository, error::AppError};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod ensure;
mod get_all;
mod get_by_guild_id;
mod set_channel;
