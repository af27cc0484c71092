pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod report;
pub mod time_log;
pub mod view;
