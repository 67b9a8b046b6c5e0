//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    /// Explicit skills.json catalog path (otherwise resolved by priority)
    pub catalog_path: Option<PathBuf>,
    /// Incoming form data JSON carried through to the next screen
    pub form_data_path: Option<PathBuf>,
    /// Where to write the navigation payload on completion (stdout if unset)
    pub out_path: Option<PathBuf>,
    /// Log file for tracing output (logging disabled if unset)
    pub log_path: Option<PathBuf>,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("skills-tui - Interactive hard-skills questionnaire for the terminal");
    eprintln!();
    eprintln!("Usage: skills-tui [skills.json] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [skills.json]  Path to a skill catalog file");
    eprintln!("                 If omitted, looks for ./skills.json, then");
    eprintln!("                 <config>/skills-tui/skills.json, then the built-in catalog");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --form-data <path>  JSON payload from earlier screens, passed through");
    eprintln!("  -o, --out <path>    Write the completed payload here (default: stdout)");
    eprintln!("  --log-file <path>   Write tracing logs to this file");
    eprintln!("  -h, --help          Show this help message");
    eprintln!("  -V, --version       Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  skills-tui                                # Built-in catalog");
    eprintln!("  skills-tui team-skills.json               # Custom catalog");
    eprintln!("  skills-tui --form-data intro.json -o out.json");
}

/// Parse CLI arguments from the process environment
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_from(&args)? {
        Parsed::Config(config) => Ok(config),
        Parsed::Help => {
            print_usage();
            std::process::exit(0);
        }
        Parsed::Version => {
            println!("skills-tui {}", VERSION);
            std::process::exit(0);
        }
    }
}

/// Parse outcome: a config, or an informational flag that short-circuits
#[derive(Debug, PartialEq)]
pub enum Parsed {
    Config(CliConfig),
    Help,
    Version,
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Missing value for {}", flag),
    )
}

/// Parse a flat argument list (no program name)
pub fn parse_from(args: &[String]) -> io::Result<Parsed> {
    let mut config = CliConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => return Ok(Parsed::Help),
            "-V" | "--version" => return Ok(Parsed::Version),
            "--form-data" | "-o" | "--out" | "--log-file" => {
                i += 1;
                if i >= args.len() {
                    print_usage();
                    return Err(missing_value(arg));
                }
                let value = PathBuf::from(&args[i]);
                match arg {
                    "--form-data" => config.form_data_path = Some(value),
                    "-o" | "--out" => config.out_path = Some(value),
                    "--log-file" => config.log_path = Some(value),
                    _ => unreachable!(),
                }
                i += 1;
            }
            _ if !arg.starts_with('-') => {
                config.catalog_path = Some(PathBuf::from(arg));
                i += 1;
            }
            _ => {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", arg),
                ));
            }
        }
    }

    Ok(Parsed::Config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_empty_defaults() {
        let parsed = parse_from(&[]).unwrap();
        assert_eq!(parsed, Parsed::Config(CliConfig::default()));
    }

    #[test]
    fn test_parse_catalog_positional() {
        let Parsed::Config(config) = parse_from(&args(&["team.json"])).unwrap() else {
            panic!("expected config");
        };
        assert_eq!(config.catalog_path, Some(PathBuf::from("team.json")));
    }

    #[test]
    fn test_parse_all_options() {
        let Parsed::Config(config) = parse_from(&args(&[
            "team.json",
            "--form-data",
            "intro.json",
            "-o",
            "result.json",
            "--log-file",
            "run.log",
        ]))
        .unwrap() else {
            panic!("expected config");
        };
        assert_eq!(config.catalog_path, Some(PathBuf::from("team.json")));
        assert_eq!(config.form_data_path, Some(PathBuf::from("intro.json")));
        assert_eq!(config.out_path, Some(PathBuf::from("result.json")));
        assert_eq!(config.log_path, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_from(&args(&["--help"])).unwrap(), Parsed::Help);
        assert_eq!(parse_from(&args(&["-V"])).unwrap(), Parsed::Version);
    }

    #[test]
    fn test_parse_missing_value() {
        let result = parse_from(&args(&["--form-data"]));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_unknown_flag() {
        let result = parse_from(&args(&["--frobnicate"]));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }
}
