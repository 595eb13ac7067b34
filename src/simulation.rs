//! Synthetic measurement generation for testing and development
//!
//! Produces the transit-time pairs a real transducer set would report for a
//! known, uniform flow velocity. Useful for exercising the full processing
//! chain without sensor hardware.

use crate::core::{FlowMeterConfig, PathMeasurement, SPEED_OF_SOUND_WATER};

/// Simulate transit-time measurements for a uniform flow in water
///
/// See [`simulate_measurements_with_sound_speed`] for the timing model.
pub fn simulate_measurements(
    config: &FlowMeterConfig,
    true_flow_velocity: f64,
) -> Vec<PathMeasurement> {
    simulate_measurements_with_sound_speed(config, true_flow_velocity, SPEED_OF_SOUND_WATER)
}

/// Simulate transit-time measurements for a uniform flow at a given sound speed
///
/// The flow component along the acoustic path is v * sin(θ); the upstream
/// signal propagates against it and the downstream signal with it, giving
/// t_up = L / (c - v * sin(θ)) and t_down = L / (c + v * sin(θ)).
/// The transit-time differential formula inverts this timing model exactly,
/// so processing the synthetic measurements recovers `true_flow_velocity` on
/// every path.
///
/// One measurement is produced per configured path, in configuration order.
pub fn simulate_measurements_with_sound_speed(
    config: &FlowMeterConfig,
    true_flow_velocity: f64,
    sound_speed: f64,
) -> Vec<PathMeasurement> {
    config
        .paths
        .iter()
        .map(|path| {
            let flow_component = true_flow_velocity * path.angle.sin();

            PathMeasurement {
                t_upstream: path.length / (sound_speed - flow_component),
                t_downstream: path.length / (sound_speed + flow_component),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::process;
    use crate::utils::config::{four_path_config, two_path_config};

    #[test]
    fn test_simulated_measurements_recover_true_velocity() {
        let config = two_path_config(0.1);
        let true_velocity = 2.0;

        let measurements = simulate_measurements(&config, true_velocity);
        assert_eq!(measurements.len(), 2);

        let result = process(&config, &measurements).unwrap();
        println!(
            "Recovered: v = {:.6} m/s, Q = {:.8} m³/s",
            result.path_velocities[0], result.volumetric_flow
        );

        for velocity in &result.path_velocities {
            assert!((velocity - true_velocity).abs() < 1e-9 * true_velocity);
        }

        let expected_flow = config.cross_sectional_area() * true_velocity;
        assert!((result.volumetric_flow - expected_flow).abs() < 1e-9 * expected_flow);
    }

    #[test]
    fn test_four_path_simulation_matches_uniform_profile() {
        // Mixed 60/45-degree chords must all sample the same uniform velocity
        let config = four_path_config(0.3);
        let true_velocity = 1.25;

        let measurements = simulate_measurements(&config, true_velocity);
        let result = process(&config, &measurements).unwrap();

        for velocity in &result.path_velocities {
            assert!((velocity - true_velocity).abs() < 1e-9 * true_velocity);
        }

        let expected_flow = config.cross_sectional_area() * true_velocity;
        assert!((result.volumetric_flow - expected_flow).abs() < 1e-9 * expected_flow);
    }

    #[test]
    fn test_zero_flow_gives_equal_transit_times() {
        let config = two_path_config(0.1);
        let measurements = simulate_measurements(&config, 0.0);

        for m in &measurements {
            assert_eq!(m.t_upstream, m.t_downstream);
        }

        let result = process(&config, &measurements).unwrap();
        assert_eq!(result.volumetric_flow, 0.0);
    }

    #[test]
    fn test_reversed_flow_negates_the_reading() {
        let config = two_path_config(0.1);

        let forward = simulate_measurements(&config, 1.5);
        let reversed = simulate_measurements(&config, -1.5);

        // Reversing the flow swaps the roles of the two signals
        for (f, r) in forward.iter().zip(&reversed) {
            assert_eq!(f.t_upstream, r.t_downstream);
            assert_eq!(f.t_downstream, r.t_upstream);
        }

        let forward_result = process(&config, &forward).unwrap();
        let reversed_result = process(&config, &reversed).unwrap();
        assert!(forward_result.volumetric_flow > 0.0);
        assert!(
            (forward_result.volumetric_flow + reversed_result.volumetric_flow).abs() < 1e-15
        );
    }

    #[test]
    fn test_explicit_sound_speed() {
        let config = two_path_config(0.1);

        // A slower medium stretches both transit times
        let water = simulate_measurements_with_sound_speed(&config, 1.0, 1480.0);
        let oil = simulate_measurements_with_sound_speed(&config, 1.0, 1300.0);

        assert!(oil[0].t_upstream > water[0].t_upstream);
        assert!(oil[0].t_downstream > water[0].t_downstream);
    }
}
