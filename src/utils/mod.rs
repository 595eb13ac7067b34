//! Utility modules for meter configuration

pub mod config;

pub use config::{four_path_config, two_path_config, validate_config, ValidationResult};
