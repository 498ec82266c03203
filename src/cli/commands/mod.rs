pub mod config;
pub mod day;
pub mod employee;
pub mod init;
pub mod log;
pub mod punch;
pub mod range;
pub mod show;
