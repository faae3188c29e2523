//! # Mechcalc CLI Application
//!
//! Command line front end for the actuator traversal and cantilever
//! deflection calculators. Every subcommand builds a `calc_core` input,
//! runs the pure calculation and prints a text report, JSON or CSV.
//!
//! Run without a subcommand for interactive prompts.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use calc_core::calculations::actuator::{self, ActuatorInput, ActuatorResult};
use calc_core::calculations::cantilever::{self, CantileverInput, CantileverResult};
use calc_core::equations::{formulas_summary, generate_equations_markdown};
use calc_core::errors::parse_field;
use calc_core::units::{Gigapascals, MetersPerSecond, MillimetersPerSecond, Pascals};
use calc_core::{CalcError, CalcResult, CalcSettings, CalculationItem};

#[derive(Parser, Debug)]
#[command(name = "calc_cli")]
#[command(about = "Mechcalc CLI - actuator traversal and cantilever deflection estimates", long_about = None)]
struct Cli {
    /// JSON settings file (sample count, acceleration model)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate how long an actuator takes to travel its stroke
    Actuator(ActuatorArgs),
    /// Deflection of a cantilever beam under a uniform load
    Beam(BeamArgs),
    /// Run a calculation described by a JSON file
    Run {
        /// Path to a JSON calculation ({"type": "Actuator", ...} or {"type": "Cantilever", ...})
        file: PathBuf,
    },
    /// Print the formula reference (markdown)
    Equations,
}

#[derive(Args, Debug)]
struct ActuatorArgs {
    /// Stroke length (mm)
    #[arg(long, default_value_t = 250.0, allow_negative_numbers = true)]
    stroke_mm: f64,

    /// Maximum speed (m/s)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    speed_m_s: f64,

    /// Motor power (W)
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    power_w: f64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct BeamArgs {
    /// Distributed load (N/m)
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    load_n_m: f64,

    /// Beam length (m)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    length_m: f64,

    /// Modulus of elasticity (GPa)
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    modulus_gpa: f64,

    /// Moment of inertia (m^4)
    #[arg(long, default_value_t = 0.0001, allow_negative_numbers = true)]
    inertia_m4: f64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Print the full result as JSON
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Print the sampled curve(s) as CSV
    #[arg(long)]
    csv: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!(code = e.error_code(), "calculation failed");
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout stays clean for JSON and CSV.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> CalcResult<()> {
    let settings = match &cli.settings {
        Some(path) => CalcSettings::load(path)?,
        None => CalcSettings::default(),
    };

    match cli.command {
        Some(Commands::Actuator(args)) => cmd_actuator(&args, &settings),
        Some(Commands::Beam(args)) => cmd_beam(&args, &settings),
        Some(Commands::Run { file }) => cmd_run(&file, &settings),
        Some(Commands::Equations) => {
            print!("{}", generate_equations_markdown());
            Ok(())
        }
        None => cmd_interactive(&settings),
    }
}

// ============================================================================
// Subcommands
// ============================================================================

fn actuator_input(args: &ActuatorArgs) -> ActuatorInput {
    ActuatorInput::new("CLI", args.stroke_mm, MetersPerSecond(args.speed_m_s), args.power_w)
}

fn beam_input(args: &BeamArgs) -> CantileverInput {
    CantileverInput::new(
        "CLI",
        args.load_n_m,
        args.length_m,
        Gigapascals(args.modulus_gpa),
        args.inertia_m4,
    )
}

fn cmd_actuator(args: &ActuatorArgs, settings: &CalcSettings) -> CalcResult<()> {
    let input = actuator_input(args);
    let result = actuator::calculate(&input, settings)?;

    if args.output.json {
        print_json(&result)
    } else if args.output.csv {
        print!("{}", actuator_csv(&result));
        Ok(())
    } else {
        print!("{}", actuator_report(&input, &result, settings));
        Ok(())
    }
}

fn cmd_beam(args: &BeamArgs, settings: &CalcSettings) -> CalcResult<()> {
    let input = beam_input(args);
    let result = cantilever::calculate(&input, settings)?;

    if args.output.json {
        print_json(&result)
    } else if args.output.csv {
        print!("{}", beam_csv(&result));
        Ok(())
    } else {
        print!("{}", beam_report(&input, &result));
        Ok(())
    }
}

fn cmd_run(file: &Path, settings: &CalcSettings) -> CalcResult<()> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        CalcError::file_error("read", file.display().to_string(), e.to_string())
    })?;

    let item: CalculationItem = serde_json::from_str(&contents)?;
    let outcome = item.calculate(settings)?;
    print_json(&outcome)
}

fn cmd_interactive(settings: &CalcSettings) -> CalcResult<()> {
    println!("Mechcalc CLI - Mechanical Estimate Calculator");
    println!("=============================================");
    println!();
    println!("  [1] Actuator traversal time");
    println!("  [2] Cantilever beam deflection");
    println!();

    let choice = prompt_line("Select calculator [1]: ");
    println!();

    match choice.trim() {
        "" | "1" => {
            let args = ActuatorArgs {
                stroke_mm: prompt_f64("Stroke length (mm) [250]: ", 250.0),
                speed_m_s: prompt_f64("Maximum speed (m/s) [1.0]: ", 1.0),
                power_w: prompt_f64("Motor power (W) [50]: ", 50.0),
                output: OutputArgs::default(),
            };
            println!();
            cmd_actuator(&args, settings)
        }
        "2" => {
            let args = BeamArgs {
                load_n_m: prompt_f64("Distributed load (N/m) [100]: ", 100.0),
                length_m: prompt_f64("Length (m) [5]: ", 5.0),
                modulus_gpa: prompt_f64("Modulus of elasticity (GPa) [200]: ", 200.0),
                inertia_m4: prompt_f64("Moment of inertia (m^4) [0.0001]: ", 0.0001),
                output: OutputArgs::default(),
            };
            println!();
            cmd_beam(&args, settings)
        }
        other => Err(CalcError::parse("calculator", other)),
    }
}

// ============================================================================
// Prompts
// ============================================================================

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input
}

/// Read a number, falling back to `default` on empty or unreadable input.
fn prompt_f64(prompt: &str, default: f64) -> f64 {
    let input = prompt_line(prompt);
    if input.trim().is_empty() {
        return default;
    }

    match parse_field(prompt.trim_end_matches(|c: char| c == ' ' || c == ':'), &input) {
        Ok(value) => value,
        Err(e) => {
            println!("  {}; using {}", e, default);
            default
        }
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

const RULE: &str = "═══════════════════════════════════════";

fn actuator_report(input: &ActuatorInput, result: &ActuatorResult, settings: &CalcSettings) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n  ACTUATOR TRAVERSAL RESULTS\n{}\n\n", RULE, RULE));
    out.push_str("Input:\n");
    out.push_str(&format!("  Stroke:       {:.1} mm\n", input.stroke_length_mm));
    out.push_str(&format!(
        "  Max speed:    {:.2} m/s ({:.0} mm/s)\n",
        MetersPerSecond::from(MillimetersPerSecond(input.max_speed_mm_s)).value(),
        input.max_speed_mm_s
    ));
    out.push_str(&format!("  Motor power:  {:.1} W\n\n", input.motor_power_w));

    out.push_str("Motion:\n");
    out.push_str(&format!(
        "  Acceleration: {:.0} mm/s² ({})\n",
        result.acceleration_mm_s2,
        settings.acceleration_model.describe()
    ));
    out.push_str(&format!("  Profile:      {}\n", result.profile.display_name()));
    out.push_str(&format!("  Accel phase:  {:.3} s\n", result.accel_time_s));
    out.push_str(&format!("  Cruise phase: {:.3} s\n", result.cruise_time_s));
    out.push_str(&format!("  Peak speed:   {:.0} mm/s\n\n", result.peak_speed_mm_s));

    out.push_str(&format!("{}\n  {}\n{}\n\n", RULE, result.traversal_time_message(), RULE));
    out.push_str("Formulas used:\n");
    out.push_str(&formulas_summary(&result.equations_used));
    out
}

fn beam_report(input: &CantileverInput, result: &CantileverResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n  CANTILEVER BEAM RESULTS\n{}\n\n", RULE, RULE));
    out.push_str("Input:\n");
    out.push_str(&format!("  Load:     {} N/m\n", input.distributed_load_n_m));
    out.push_str(&format!("  Length:   {} m\n", input.length_m));
    out.push_str(&format!(
        "  E:        {} GPa\n",
        Gigapascals::from(Pascals(input.elastic_modulus_pa)).value()
    ));
    out.push_str(&format!("  I:        {:e} m^4\n\n", input.moment_of_inertia_m4));

    out.push_str("Support:\n");
    out.push_str(&format!("  Reaction:         {:.1} N\n", result.support_reaction_n));
    out.push_str(&format!("  Fixed-end moment: {:.1} N·m\n\n", result.fixed_end_moment_nm));

    out.push_str(&format!("{}\n  {}\n{}\n\n", RULE, result.tip_deflection_message(), RULE));

    if let Some(ratio) = result.curve_to_tip_ratio() {
        out.push_str(&format!(
            "Note: the deflection curve ends at {:.6} m ({:.3}x the tip formula).\n\n",
            result.curve_tip_deflection_m, ratio
        ));
    }

    out.push_str("Formulas used:\n");
    out.push_str(&formulas_summary(&result.equations_used));
    out
}

fn actuator_csv(result: &ActuatorResult) -> String {
    let mut csv = String::from("time_s,position_mm,speed_mm_s\n");
    for (&(t, d), &(_, v)) in result.position_samples.iter().zip(&result.speed_samples) {
        csv.push_str(&format!("{},{},{}\n", t, d, v));
    }
    csv
}

fn beam_csv(result: &CantileverResult) -> String {
    let mut csv = String::from("x_m,deflection_m\n");
    for &(x, y) in &result.deflection_curve {
        csv.push_str(&format!("{},{}\n", x, y));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actuator_defaults() {
        let cli = Cli::try_parse_from(["calc_cli", "actuator"]).unwrap();
        match cli.command {
            Some(Commands::Actuator(args)) => {
                assert_eq!(args.stroke_mm, 250.0);
                assert_eq!(args.speed_m_s, 1.0);
                assert_eq!(args.power_w, 50.0);
                assert!(!args.output.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_beam_flags() {
        let cli = Cli::try_parse_from([
            "calc_cli", "beam", "--load-n-m", "250", "--modulus-gpa", "70", "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Beam(args)) => {
                assert_eq!(args.load_n_m, 250.0);
                assert_eq!(args.modulus_gpa, 70.0);
                assert_eq!(args.inertia_m4, 0.0001);
                assert!(args.output.json);

                let input = beam_input(&args);
                assert_eq!(input.elastic_modulus_pa, 70.0e9);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_json_and_csv_conflict() {
        assert!(Cli::try_parse_from(["calc_cli", "beam", "--json", "--csv"]).is_err());
    }

    #[test]
    fn test_global_settings_and_no_subcommand() {
        let cli = Cli::try_parse_from(["calc_cli", "--settings", "s.json"]).unwrap();
        assert_eq!(cli.settings, Some(PathBuf::from("s.json")));
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["calc_cli", "run", "item.json", "--settings", "s.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run { .. })));
        assert!(cli.settings.is_some());
    }

    #[test]
    fn test_negative_power_reaches_calculation() {
        let cli = Cli::try_parse_from(["calc_cli", "actuator", "--power-w", "-5"]).unwrap();
        let Some(Commands::Actuator(args)) = cli.command else {
            panic!("expected actuator command");
        };
        let err = cmd_actuator(&args, &CalcSettings::default()).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_zero_modulus_is_error() {
        let cli = Cli::try_parse_from(["calc_cli", "beam", "--modulus-gpa", "0"]).unwrap();
        let Some(Commands::Beam(args)) = cli.command else {
            panic!("expected beam command");
        };
        assert_eq!(
            cmd_beam(&args, &CalcSettings::default()).unwrap_err().error_code(),
            "DOMAIN_ERROR"
        );
    }

    #[test]
    fn test_actuator_report() {
        let args = ActuatorArgs {
            stroke_mm: 250.0,
            speed_m_s: 1.0,
            power_w: 50.0,
            output: OutputArgs::default(),
        };
        let settings = CalcSettings::default();
        let input = actuator_input(&args);
        let result = actuator::calculate(&input, &settings).unwrap();

        let report = actuator_report(&input, &result, &settings);
        assert!(report.contains("Traversal Time: 2.00 seconds"));
        assert!(report.contains("Profile:      Triangular"));
        assert!(report.contains("Max speed:    1.00 m/s (1000 mm/s)"));
        assert!(report.contains("Triangular Traversal Time"));
    }

    #[test]
    fn test_beam_report_flags_curve_mismatch() {
        let args = BeamArgs {
            load_n_m: 100.0,
            length_m: 5.0,
            modulus_gpa: 200.0,
            inertia_m4: 0.0001,
            output: OutputArgs::default(),
        };
        let input = beam_input(&args);
        let result = cantilever::calculate(&input, &CalcSettings::default()).unwrap();

        let report = beam_report(&input, &result);
        assert!(report.contains("The deflection at the end of the beam is 0.000391 meters."));
        assert!(report.contains("Note: the deflection curve ends at 0.000208 m"));
        assert!(report.contains("Reaction:         500.0 N"));
    }

    #[test]
    fn test_csv_output() {
        let settings = CalcSettings {
            sample_count: 3,
            ..CalcSettings::default()
        };
        let input = ActuatorInput::new("t", 250.0, MetersPerSecond(1.0), 50.0);
        let result = actuator::calculate(&input, &settings).unwrap();

        let csv = actuator_csv(&result);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "time_s,position_mm,speed_mm_s");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "0,-750,0");

        let beam = CantileverInput::new("b", 0.0, 2.0, Gigapascals(200.0), 0.0001);
        let beam_result = cantilever::calculate(&beam, &settings).unwrap();
        assert_eq!(beam_csv(&beam_result), "x_m,deflection_m\n0,0\n1,0\n2,0\n");
    }
}
