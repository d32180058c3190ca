//! Ladybug - folder configuration and data type descriptors for weather tooling.
//!
//! [`config::Folders`] locates the folder holding EPW weather files from a
//! JSON config file, falling back to `<home>/ladybug`. [`datatype`] describes
//! the physical quantities found in those files.

pub mod cli;
pub mod config;
pub mod datatype;
pub mod error;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{Cli, Commands, DatatypeArgs};
use crate::config::LoadStatus;
use crate::datatype::GenericType;

/// Runs the CLI with the provided arguments.
pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.log_level())?;

    match cli.command {
        Commands::ConfigShow => show_config(&cli),
        Commands::ConfigValidate => validate_config(&cli),
        Commands::DatatypeShow(ref args) => show_datatype(args),
    }
}

/// Initializes the tracing subscriber for structured logging.
fn setup_logging(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .json()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}

/// Loads the shared folders and displays them.
fn show_config(cli: &Cli) -> Result<()> {
    let shared = config::init(cli.config.as_deref(), cli.mute)
        .context("Failed to load folder configuration")?;
    let folders = shared
        .read()
        .map_err(|_| anyhow::anyhow!("Folder configuration lock poisoned"))?;

    let yaml = serde_yaml::to_string(&*folders)?;
    println!("{}", yaml);
    Ok(())
}

/// Loads the configuration and reports how the load went.
fn validate_config(cli: &Cli) -> Result<()> {
    let folders = config::Folders::new(cli.config.as_deref(), cli.mute)
        .context("Failed to load folder configuration")?;

    let report = check_folders(&folders)?;
    println!("{}", report);
    Ok(())
}

/// Rejects a load that fell back to defaults, otherwise describes it.
fn check_folders(folders: &config::Folders) -> Result<String> {
    let path = folders
        .config_file()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    if let LoadStatus::Degraded { message } = folders.load_status() {
        anyhow::bail!(
            "Configuration could not be parsed; defaults are in use.\n  └─ {}",
            message
        );
    }

    info!(path = %path, "Configuration loaded cleanly");
    Ok(format!(
        "Configuration is valid.\nDefault data folder: {}",
        folders.default_data_folder().display()
    ))
}

/// Builds a generic data type from CLI arguments and displays it.
fn show_datatype(args: &DatatypeArgs) -> Result<()> {
    let data_type = build_datatype(args)?;
    let yaml = serde_yaml::to_string(&data_type)?;
    println!("{}", yaml);
    Ok(())
}

fn build_datatype(args: &DatatypeArgs) -> Result<GenericType> {
    let mut builder = GenericType::builder(&args.name, &args.unit)
        .point_in_time(!args.not_point_in_time)
        .cumulative(args.cumulative);

    if let Some(abbreviation) = &args.abbreviation {
        builder = builder.abbreviation(abbreviation);
    }
    if let Some(min) = args.min {
        builder = builder.min(min);
    }
    if let Some(max) = args.max {
        builder = builder.max(max);
    }

    let data_type = builder
        .build()
        .with_context(|| format!("Invalid data type '{}'", args.name))?;

    Ok(data_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FolderOptions, Folders};
    use crate::datatype::DataType;
    use crate::error::DataTypeError;

    fn datatype_args(name: &str, unit: &str) -> DatatypeArgs {
        DatatypeArgs {
            name: name.to_string(),
            unit: unit.to_string(),
            abbreviation: None,
            min: None,
            max: None,
            not_point_in_time: false,
            cumulative: false,
        }
    }

    fn load(content: &str, home: &tempfile::TempDir) -> Folders {
        let file = home.path().join("config.json");
        std::fs::write(&file, content).unwrap();
        Folders::with_options(FolderOptions {
            config_file: Some(file),
            mute: true,
            home_dir: Some(home.path().to_path_buf()),
        })
        .unwrap()
    }

    #[test]
    fn test_check_folders_accepts_clean_load() {
        let home = tempfile::tempdir().unwrap();
        let folders = load(r#"{"defaultDataFolder": "/srv/epw"}"#, &home);

        let report = check_folders(&folders).unwrap();

        assert!(report.contains("Configuration is valid."));
        assert!(report.contains("/srv/epw"));
    }

    #[test]
    fn test_check_folders_rejects_degraded_load() {
        let home = tempfile::tempdir().unwrap();
        let folders = load("{ not json", &home);

        let err = check_folders(&folders).unwrap_err();

        assert!(err.to_string().contains("defaults are in use"));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_build_datatype_from_args() {
        let args = DatatypeArgs {
            abbreviation: Some("DBT".to_string()),
            min: Some(-273.15),
            ..datatype_args("Dry Bulb Temperature", "C")
        };

        let data_type = build_datatype(&args).unwrap();

        assert_eq!(data_type.abbreviation(), "DBT");
        assert_eq!(data_type.min(), -273.15);
        assert_eq!(data_type.max(), f64::INFINITY);
        assert!(data_type.point_in_time());

        let yaml = serde_yaml::to_string(&data_type).unwrap();
        assert!(yaml.contains("name: Dry Bulb Temperature"));
    }

    #[test]
    fn test_build_datatype_rejects_cumulative_point_in_time() {
        let args = DatatypeArgs {
            cumulative: true,
            ..datatype_args("Temperature", "C")
        };

        let err = build_datatype(&args).unwrap_err();

        assert!(err.to_string().contains("Invalid data type 'Temperature'"));
        assert_eq!(
            err.downcast_ref::<DataTypeError>(),
            Some(&DataTypeError::CumulativePointInTime)
        );
    }

    #[test]
    fn test_build_datatype_cumulative_when_not_point_in_time() {
        let args = DatatypeArgs {
            cumulative: true,
            not_point_in_time: true,
            ..datatype_args("Rain", "mm")
        };

        let data_type = build_datatype(&args).unwrap();

        assert!(data_type.cumulative());
        assert!(!data_type.point_in_time());
    }
}
