//! Infrastructure layer - Configuration and process-wide reporting

pub mod assertion;
pub mod config;

pub use config::Config;
