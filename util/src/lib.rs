pub mod config;
pub mod notifications;
