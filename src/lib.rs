pub mod app;
pub mod config;
pub mod error;
pub mod init_config;
pub mod scheduler;
pub mod simulation;
