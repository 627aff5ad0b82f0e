pub mod config;
pub mod db;
pub mod init;
pub mod item;
pub mod link;
pub mod sessions;
pub mod timer;
