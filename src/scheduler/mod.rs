pub mod drive_watch;
