pub mod config;
pub mod error;
pub mod models;
pub mod period;
pub mod report;
