//! Standard meter geometries and configuration validation
//!
//! The integration core only guards against division by zero; everything else
//! about a configuration (angle ranges, path lengths, weight normalization) is
//! the supplier's responsibility. The presets here satisfy those conventions,
//! and `validate_config` checks them for hand-built configurations.

use crate::core::{AcousticPath, FlowMeterConfig};
use std::f64::consts::PI;

/// Tolerance for the weights-sum-to-one convention
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Build a 2-path flow meter configuration
///
/// Typical 45-degree diagonal paths for quick measurement: two chords at
/// ±0.25 D with equal weights.
pub fn two_path_config(pipe_diameter: f64) -> FlowMeterConfig {
    let angle = PI / 4.0;
    let length = pipe_diameter / angle.sin();

    FlowMeterConfig {
        pipe_diameter,
        paths: vec![
            AcousticPath {
                position: 0.25,
                angle,
                length,
                weight: 0.5,
            },
            AcousticPath {
                position: -0.25,
                angle,
                length,
                weight: 0.5,
            },
        ],
    }
}

/// Build a 4-path flow meter configuration
///
/// Mix of 60-degree outer chords (±0.35 D) and 45-degree inner chords
/// (±0.15 D) for improved accuracy across the velocity profile.
pub fn four_path_config(pipe_diameter: f64) -> FlowMeterConfig {
    let outer_angle = PI / 3.0;
    let inner_angle = PI / 4.0;
    let outer_length = pipe_diameter / outer_angle.sin();
    let inner_length = pipe_diameter / inner_angle.sin();

    FlowMeterConfig {
        pipe_diameter,
        paths: vec![
            AcousticPath {
                position: 0.35,
                angle: outer_angle,
                length: outer_length,
                weight: 0.25,
            },
            AcousticPath {
                position: -0.35,
                angle: outer_angle,
                length: outer_length,
                weight: 0.25,
            },
            AcousticPath {
                position: 0.15,
                angle: inner_angle,
                length: inner_length,
                weight: 0.25,
            },
            AcousticPath {
                position: -0.15,
                angle: inner_angle,
                length: inner_length,
                weight: 0.25,
            },
        ],
    }
}

/// Configuration validation outcome
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the configuration is physically usable
    pub is_valid: bool,
    /// Human-readable description of each problem found
    pub problems: Vec<String>,
}

/// Validate a flow meter configuration against the geometry conventions
///
/// Checks pipe diameter, per-path angle and length, and the weight sum. A
/// failing configuration will still be accepted by the integration core (which
/// only guards divisions), but its readings are physically meaningless.
pub fn validate_config(config: &FlowMeterConfig) -> ValidationResult {
    let mut problems = Vec::new();

    if config.pipe_diameter <= 0.0 {
        problems.push(format!(
            "Pipe diameter must be positive, got {} m",
            config.pipe_diameter
        ));
    }

    if config.paths.is_empty() {
        problems.push("Configuration holds no acoustic paths".to_string());
    }

    for (i, path) in config.paths.iter().enumerate() {
        if path.angle <= 0.0 || path.angle >= PI {
            problems.push(format!(
                "Path {}: angle {:.4} rad outside (0, π)",
                i + 1,
                path.angle
            ));
        } else if path.angle.sin() == 0.0 {
            problems.push(format!(
                "Path {}: angle {:.4} rad is parallel to the pipe axis",
                i + 1,
                path.angle
            ));
        }

        if path.length <= 0.0 {
            problems.push(format!(
                "Path {}: length must be positive, got {} m",
                i + 1,
                path.length
            ));
        }

        if path.position < -1.0 || path.position > 1.0 {
            problems.push(format!(
                "Path {}: position {:.2} outside normalized range [-1, 1]",
                i + 1,
                path.position
            ));
        }
    }

    if !config.paths.is_empty() {
        let weight_sum: f64 = config.paths.iter().map(|p| p.weight).sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            problems.push(format!(
                "Path weights sum to {:.6}, expected 1.0",
                weight_sum
            ));
        }
    }

    ValidationResult {
        is_valid: problems.is_empty(),
        problems,
    }
}
