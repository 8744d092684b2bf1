pub mod backup;
pub mod calendar;
pub mod client;
pub mod config;
pub mod event;
pub mod export;
pub mod init;
pub mod log;
