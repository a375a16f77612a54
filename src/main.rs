//! geofilename - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use geofilename::{
    cli::{encode_fields, parse_files, resolve_convention, Args, Command},
    config::Config,
    conventions::ConventionRegistry,
    error::{exit_codes, Error, Result},
    output::{
        convention_json, filename_json, outcome_json, print_convention, print_error,
        print_filename, print_info, print_json, print_parse_stats, ParseStats,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::TomlParse(_)
                | Error::Convention(_)
                | Error::UnknownConvention(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Parse { .. } => ExitCode::from(exit_codes::PARSE_ERROR as u8),
                Error::MissingField { .. }
                | Error::FieldLength { .. }
                | Error::InvalidValue { .. }
                | Error::UnknownField(_) => ExitCode::from(exit_codes::ENCODE_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = if args.config.exists() {
        tracing::info!("Loading configuration from {}", args.config.display());
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using built-in conventions only",
            args.config.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    let registry = config.registry()?;
    let default = config.options.default_convention.as_deref();
    let json = config.options.json;

    match &args.command {
        Command::List => list(&registry, json),
        Command::Parse { filenames, .. } => {
            let convention = resolve_convention(&registry, args.convention(), default)?;
            let outcomes = parse_files(&registry, convention.as_ref(), filenames);
            let stats = ParseStats::from_outcomes(&outcomes);

            if json {
                let values = outcomes
                    .iter()
                    .map(outcome_json)
                    .collect::<Result<Vec<_>>>()?;
                print_json(&serde_json::Value::Array(values))?;
            } else {
                for outcome in &outcomes {
                    match &outcome.result {
                        Ok(filename) => print_filename(filename)?,
                        Err(e) => print_error(&e.to_string()),
                    }
                }
                if stats.total() > 1 {
                    print_parse_stats(&stats);
                }
            }

            Ok(if stats.failed == 0 {
                exit_codes::SUCCESS
            } else if stats.parsed == 0 {
                exit_codes::PARSE_ERROR
            } else {
                exit_codes::SOME_FILES_FAILED
            })
        }
        Command::Encode { fields, .. } => {
            let convention = resolve_convention(&registry, args.convention(), default)?
                .ok_or_else(|| {
                    Error::Config(
                        "No naming convention given. Use --convention or set options.default_convention"
                            .to_string(),
                    )
                })?;
            let filename = encode_fields(convention, fields)?;

            if json {
                print_json(&filename_json(&filename)?)?;
            } else {
                println!("{}", filename);
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn list(registry: &ConventionRegistry, json: bool) -> Result<i32> {
    if json {
        let values = registry.iter().map(|c| convention_json(c)).collect();
        print_json(&serde_json::Value::Array(values))?;
    } else {
        print_info(&format!(
            "Registered naming conventions: {}",
            registry.names().join(", ")
        ));
        for convention in registry.iter() {
            print_convention(convention);
        }
    }
    Ok(exit_codes::SUCCESS)
}
