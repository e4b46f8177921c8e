//! CLI argument parsing and configuration.

use std::path::PathBuf;

use crate::error::AppError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub output_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub prefill_path: Option<PathBuf>,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliConfig),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Regform - Registration form with CSV export");
    eprintln!();
    eprintln!("Usage: regform [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output-dir <DIR>  Directory for registration_details.csv (default: .)");
    eprintln!("  -c, --config <FILE>     Config file (default: ./regform/config.json,");
    eprintln!("                          then the user config dir)");
    eprintln!("  --prefill <FILE>        Fill the form from a JSON record");
    eprintln!("  -h, --help              Show this help message");
    eprintln!("  -V, --version           Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  regform                          # Empty form, export to current dir");
    eprintln!("  regform -o ~/exports             # Export somewhere else");
    eprintln!("  regform --prefill jane.json      # Start with saved values");
}

/// Parse CLI arguments, handling --help and --version directly
pub fn parse_args() -> Result<CliConfig, AppError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_arg_list(&args)? {
        CliCommand::Run(config) => Ok(config),
        CliCommand::Help => {
            print_usage();
            std::process::exit(0);
        }
        CliCommand::Version => {
            println!("regform {}", VERSION);
            std::process::exit(0);
        }
    }
}

/// Parse an argument list (without the program name)
pub fn parse_arg_list(args: &[String]) -> Result<CliCommand, AppError> {
    let mut config = CliConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "-o" | "--output-dir" => {
                config.output_dir = Some(take_value(args, &mut i, arg)?);
            }
            "-c" | "--config" => {
                config.config_path = Some(take_value(args, &mut i, arg)?);
            }
            "--prefill" => {
                config.prefill_path = Some(take_value(args, &mut i, arg)?);
            }
            _ => {
                return Err(AppError::args(format!("Unknown argument: {}", arg)));
            }
        }
        i += 1;
    }

    Ok(CliCommand::Run(config))
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<PathBuf, AppError> {
    *i += 1;
    match args.get(*i) {
        Some(value) if !value.starts_with('-') => Ok(PathBuf::from(value)),
        _ => Err(AppError::args(format!("Missing value for {}", flag))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(
            parse_arg_list(&[]).unwrap(),
            CliCommand::Run(CliConfig::default())
        );
    }

    #[test]
    fn test_all_options() {
        let parsed = parse_arg_list(&args(&[
            "-o", "out", "--config", "cfg.json", "--prefill", "jane.json",
        ]))
        .unwrap();

        assert_eq!(
            parsed,
            CliCommand::Run(CliConfig {
                output_dir: Some(PathBuf::from("out")),
                config_path: Some(PathBuf::from("cfg.json")),
                prefill_path: Some(PathBuf::from("jane.json")),
            })
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_arg_list(&args(&["-h"])).unwrap(), CliCommand::Help);
        assert_eq!(parse_arg_list(&args(&["--version"])).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_missing_value() {
        let err = parse_arg_list(&args(&["--output-dir"])).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for --output-dir");

        let err = parse_arg_list(&args(&["-c", "-o"])).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for -c");
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_arg_list(&args(&["--frobnicate"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument: --frobnicate");
    }
}
