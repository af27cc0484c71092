pub mod db;
pub mod time_logs;
