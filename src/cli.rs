//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect ladybug folder configuration and data types.
#[derive(Parser, Debug)]
#[command(name = "ladybug", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file. Defaults to the bundled config.json.
    #[arg(short, long, env = "LADYBUG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Do not report resolved folder paths while loading.
    #[arg(short, long, global = true)]
    pub mute: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the log level based on verbosity flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the configuration and display the resolved folders.
    #[command(name = "config-show")]
    ConfigShow,

    /// Load the configuration and report whether it parsed cleanly.
    #[command(name = "config-validate")]
    ConfigValidate,

    /// Build a generic data type and display it.
    #[command(name = "datatype-show")]
    DatatypeShow(DatatypeArgs),
}

/// Arguments for the datatype-show subcommand.
#[derive(Args, Debug)]
pub struct DatatypeArgs {
    /// Name of the data type.
    #[arg(long)]
    pub name: String,

    /// Primary unit of the data type.
    #[arg(long)]
    pub unit: String,

    /// Abbreviation (defaults to the name).
    #[arg(long)]
    pub abbreviation: Option<String>,

    /// Lower limit of valid values.
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Upper limit of valid values.
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Values are averages or accumulations rather than instantaneous readings.
    #[arg(long, default_value = "false")]
    pub not_point_in_time: bool,

    /// Values accumulate over time.
    #[arg(long, default_value = "false")]
    pub cumulative: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datatype_show() {
        let cli = Cli::try_parse_from([
            "ladybug",
            "datatype-show",
            "--name",
            "Temperature",
            "--unit",
            "C",
            "--min",
            "-273.15",
        ])
        .unwrap();

        match cli.command {
            Commands::DatatypeShow(args) => {
                assert_eq!(args.name, "Temperature");
                assert_eq!(args.min, Some(-273.15));
                assert!(!args.cumulative);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["ladybug", "-vv", "--mute", "config-show"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
        assert!(cli.mute);
    }
}
