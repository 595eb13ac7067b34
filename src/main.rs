use flowmeter::{
    four_path_config, process, simulate_measurements, two_path_config, validate_config,
    FlowMeterConfig, FlowResult, PathMeasurement,
};
use serde::Deserialize;
use std::f64::consts::PI;

/// JSON input document: a meter configuration plus one measurement cycle
#[derive(Debug, Deserialize)]
struct MeasurementRun {
    config: FlowMeterConfig,
    measurements: Vec<PathMeasurement>,
}

/// Print flow meter configuration details
fn print_config(config: &FlowMeterConfig) {
    println!("Flow Meter Configuration:");
    println!("  Pipe diameter: {:.3} m", config.pipe_diameter);
    println!("  Number of paths: {}", config.num_paths());
    println!("  Pipe area: {:.6} m²", config.cross_sectional_area());
    println!("\nAcoustic Paths:");

    for (i, path) in config.paths.iter().enumerate() {
        println!("  Path {}:", i + 1);
        println!("    Position: {:.2} D", path.position);
        println!(
            "    Angle: {:.2}° ({:.4} rad)",
            path.angle * 180.0 / PI,
            path.angle
        );
        println!("    Path length: {:.4} m", path.length);
        println!("    Weight: {:.3}", path.weight);
    }
}

/// Print one measurement cycle with the per-path time differentials
fn print_measurements(measurements: &[PathMeasurement]) {
    for (i, m) in measurements.iter().enumerate() {
        let delta_t = m.t_upstream - m.t_downstream;
        println!(
            "  Path {}: t_upstream = {:.8} s, t_downstream = {:.8} s, Δt = {:.2e} s",
            i + 1,
            m.t_upstream,
            m.t_downstream,
            delta_t
        );
    }
}

/// Print flow calculation results
fn print_results(result: &FlowResult) {
    println!("\nFlow Calculation Results:");

    for (i, velocity) in result.path_velocities.iter().enumerate() {
        println!("  Path {} velocity: {:.4} m/s", i + 1, velocity);
    }

    println!("\nVolumetric Flow Rate:");
    println!("  {:.6} m³/s", result.volumetric_flow);
    println!("  {:.4} L/min", result.volumetric_flow * 60000.0);
    println!("  {:.2} L/s", result.volumetric_flow * 1000.0);
}

/// Run one demonstration pass: simulate a measurement cycle and process it
fn run_demo_config(
    config: &FlowMeterConfig,
    true_flow_velocity: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    print_config(config);

    let measurements = simulate_measurements(config, true_flow_velocity);
    println!(
        "\nSimulated Measurements (True flow velocity: {:.2} m/s):",
        true_flow_velocity
    );
    print_measurements(&measurements);

    let result = process(config, &measurements)?;
    print_results(&result);

    Ok(())
}

/// Demonstration with the standard 2-path and 4-path meter geometries
fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Ultrasonic Multipath Flow Meter ===\n");

    let pipe_diameter = 0.1; // 100 mm
    let true_flow_velocity = 2.0; // m/s

    println!("### 2-PATH CONFIGURATION ###\n");
    run_demo_config(&two_path_config(pipe_diameter), true_flow_velocity)?;

    println!("\n\n### 4-PATH CONFIGURATION ###\n");
    run_demo_config(&four_path_config(pipe_diameter), true_flow_velocity)?;

    println!("\n=== End of Demonstration ===");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    // No arguments: run the built-in demonstration
    if args.len() == 1 {
        return run_demo();
    }

    if args.len() != 2 {
        eprintln!(
            "Usage: {} [measurement_run.json]",
            args.first().map_or("flowmeter", |s| s.as_str())
        );
        eprintln!("With no arguments, runs the built-in 2-path/4-path demonstration.");
        return Err("Invalid arguments".into());
    }

    let json_data = std::fs::read_to_string(&args[1])?;
    let run: MeasurementRun = serde_json::from_str(&json_data)?;

    let validation = validate_config(&run.config);
    if !validation.is_valid {
        for problem in &validation.problems {
            eprintln!("WARNING: {}", problem);
        }
    }

    print_config(&run.config);
    println!("\nMeasurements:");
    print_measurements(&run.measurements);

    match process(&run.config, &run.measurements) {
        Ok(result) => {
            print_results(&result);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error during flow calculation: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_run_from_json() {
        let json_data = r#"
        {
          "config": {
            "pipe_diameter": 0.1,
            "paths": [
              {
                "position": 0.0,
                "angle": 0.7853981633974483,
                "length": 0.1414213562373095,
                "weight": 1.0
              }
            ]
          },
          "measurements": [
            {
              "t_upstream": 9.564636e-5,
              "t_downstream": 9.546375e-5
            }
          ]
        }
        "#;

        let run: MeasurementRun = serde_json::from_str(json_data).unwrap();
        assert_eq!(run.config.num_paths(), 1);
        assert_eq!(run.measurements.len(), 1);

        let result = process(&run.config, &run.measurements).unwrap();
        println!(
            "JSON run: v = {:.4} m/s, Q = {:.6} m³/s",
            result.path_velocities[0], result.volumetric_flow
        );

        // Transit times correspond to 2 m/s in a 0.1 m pipe
        assert!((result.path_velocities[0] - 2.0).abs() < 0.02);
        let expected_flow = 2.0 * PI * 0.05 * 0.05;
        assert!((result.volumetric_flow - expected_flow).abs() < 0.01 * expected_flow);
    }

    #[test]
    fn test_demo_runs_clean() {
        run_demo().unwrap();
    }
}
