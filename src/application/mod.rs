//! Application layer - Use cases and orchestration

pub mod init;
pub mod inspect;
pub mod manage_config;
pub mod relate;

pub use inspect::{InspectService, TagReport};
pub use manage_config::ConfigService;
pub use relate::{RelateService, Relation};
