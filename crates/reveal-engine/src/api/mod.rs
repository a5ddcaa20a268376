pub mod config;
pub mod controls;
pub mod error;
pub mod types;
