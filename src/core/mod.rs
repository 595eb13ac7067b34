//! Core types and constants for the flow metering system

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
