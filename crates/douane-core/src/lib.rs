pub mod config;
pub mod constants;
pub mod error;
pub mod sections;
pub mod tokens;
pub mod types;
