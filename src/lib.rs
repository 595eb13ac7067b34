//! Multipath Ultrasonic Flow Meter
//!
//! Computes volumetric flow rate in a pipe from ultrasonic transit-time
//! measurements along multiple acoustic paths, using the transit-time
//! differential method with Gauss-Jacobi quadrature integration.

pub mod core;
pub mod integration;
pub mod simulation;
pub mod utils;
pub mod velocity;

// Re-export commonly used types
pub use crate::core::{
    AcousticPath, FlowMeterConfig, FlowResult, PathMeasurement, SPEED_OF_SOUND_WATER,
};
pub use crate::integration::{calculate_flow_rate, process, FlowCalcResult, FlowError};
pub use crate::simulation::{simulate_measurements, simulate_measurements_with_sound_speed};
pub use crate::utils::config::{four_path_config, two_path_config, validate_config, ValidationResult};
pub use crate::velocity::calculate_path_velocity;
