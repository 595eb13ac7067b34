//! Multipath flow integration and result lifecycle

use crate::core::{FlowMeterConfig, FlowResult, PathMeasurement};
use crate::velocity::calculate_path_velocity;
use nalgebra::DVector;
use std::fmt;

/// Result type for flow calculations
pub type FlowCalcResult<T> = Result<T, FlowError>;

/// Configuration errors signaled by the integration operations
///
/// These are fatal to the invocation: no partial result is returned. A
/// degenerate measurement on an individual path is not an error; it yields a
/// zero velocity for that path instead (see
/// [`calculate_path_velocity`](crate::velocity::calculate_path_velocity)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Configuration holds no acoustic paths
    EmptyConfiguration,
    /// Measurement count does not match the configured path count
    MeasurementCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::EmptyConfiguration => {
                write!(f, "Configuration holds no acoustic paths")
            }
            FlowError::MeasurementCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Expected {} measurements (one per path), got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for FlowError {}

/// Calculate total volumetric flow rate from multiple path measurements
///
/// Uses Gauss-Jacobi quadrature integration with weighted sum:
/// Q = A * Σ(w_i * v_i), with A = π * (D/2)²
///
/// Per-path velocities are computed and accumulated in configuration order so
/// that floating-point results are reproducible across runs. `measurements`
/// must be parallel to `config.paths`; a length mismatch is a configuration
/// error, not a recoverable condition.
pub fn calculate_flow_rate(
    config: &FlowMeterConfig,
    measurements: &[PathMeasurement],
) -> FlowCalcResult<FlowResult> {
    let num_paths = config.num_paths();
    if num_paths == 0 {
        return Err(FlowError::EmptyConfiguration);
    }
    if measurements.len() != num_paths {
        return Err(FlowError::MeasurementCountMismatch {
            expected: num_paths,
            actual: measurements.len(),
        });
    }

    // Velocity sample per path, in configuration order
    let velocities = DVector::from_iterator(
        num_paths,
        config
            .paths
            .iter()
            .zip(measurements)
            .map(|(path, measurement)| calculate_path_velocity(path, measurement)),
    );
    let weights = DVector::from_iterator(num_paths, config.paths.iter().map(|p| p.weight));

    let weighted_velocity_sum = weights.dot(&velocities);
    let volumetric_flow = config.cross_sectional_area() * weighted_velocity_sum;

    Ok(FlowResult {
        path_velocities: velocities.iter().copied().collect(),
        volumetric_flow,
    })
}

/// Main processing entry point for the flow meter
///
/// Validates the configuration/measurement pairing and delegates to
/// [`calculate_flow_rate`]. On success the returned [`FlowResult`] is owned by
/// the caller and released when dropped; on error nothing is returned and no
/// partial allocation survives.
pub fn process(
    config: &FlowMeterConfig,
    measurements: &[PathMeasurement],
) -> FlowCalcResult<FlowResult> {
    calculate_flow_rate(config, measurements)
}
