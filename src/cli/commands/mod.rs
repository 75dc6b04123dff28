pub mod backup;
pub mod checkin;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod roster;
pub mod show;
