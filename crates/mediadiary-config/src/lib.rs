pub mod config;
pub mod paths;

pub use config::{Config, LoggingConfig, ValidationConfig};
pub use paths::PathManager;
