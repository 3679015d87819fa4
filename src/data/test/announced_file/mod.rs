use crate::data::announced_file::AnnouncedFileRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_all_keys;
mod insert_many;
