//! Core data types for the flow metering system

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A single acoustic path crossing the pipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcousticPath {
    /// Position on pipe diameter (normalized: -1 to 1)
    pub position: f64,
    /// Angle from pipe axis in radians
    pub angle: f64,
    /// Acoustic path length in meters
    pub length: f64,
    /// Gauss-Jacobi weighting coefficient
    pub weight: f64,
}

/// Flow meter configuration: pipe geometry plus the ordered set of acoustic paths
///
/// Path order is significant: measurements and result velocities are matched
/// to paths by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowMeterConfig {
    /// Pipe diameter in meters
    pub pipe_diameter: f64,
    /// Acoustic path configurations, in measurement order
    pub paths: Vec<AcousticPath>,
}

impl FlowMeterConfig {
    /// Number of acoustic paths in this configuration
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Pipe cross-sectional area (m²): A = π * (D/2)²
    pub fn cross_sectional_area(&self) -> f64 {
        let radius = self.pipe_diameter / 2.0;
        PI * radius * radius
    }
}

/// Transit-time pair measured along one acoustic path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathMeasurement {
    /// Upstream transit time in seconds (against flow)
    pub t_upstream: f64,
    /// Downstream transit time in seconds (with flow)
    pub t_downstream: f64,
}

/// Flow calculation result, owned by the caller
///
/// `path_velocities[i]` corresponds to `paths[i]` of the configuration the
/// result was computed from. The value is released when dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    /// Velocity calculated for each path (m/s)
    pub path_velocities: Vec<f64>,
    /// Total volumetric flow rate (m³/s)
    pub volumetric_flow: f64,
}
