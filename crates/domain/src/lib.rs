//! Hostinfo Domain Layer
pub mod caller_record;
pub mod config;
pub mod errors;

pub use caller_record::CallerRecord;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
