//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Geo dataset filename encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "geofilename",
    version,
    about = "Encode and parse geo dataset filenames",
    long_about = "Build and decode filenames that follow field-based naming conventions.\n\n\
                  Built-in conventions: sgrt, bmon, eodr, yeoda. More can be defined in the \
                  configuration file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, global = true, default_value = "geofilename.toml", env = "GEOFILENAME_CONFIG")]
    pub config: PathBuf,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered naming conventions and their fields.
    List,

    /// Decode one or more filenames.
    Parse {
        /// Filenames or paths to decode.
        #[arg(required = true, num_args = 1..)]
        filenames: Vec<String>,

        /// Naming convention to use. Detected from the filename if omitted.
        #[arg(short = 'n', long)]
        convention: Option<String>,
    },

    /// Build a filename from field values.
    Encode {
        /// Naming convention to use.
        #[arg(short = 'n', long)]
        convention: Option<String>,

        /// Field value as key=value. Can be repeated.
        #[arg(short, long = "field", value_parser = parse_key_value)]
        fields: Vec<(String, String)>,
    },
}

/// Split a `key=value` argument.
pub fn parse_key_value(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", input))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", input));
    }

    Ok((key.to_string(), value.to_string()))
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        // Boolean flags (only override if set to non-default)
        if self.json {
            config.options.json = true;
        }
    }

    /// Convention named on the command line, if any.
    pub fn convention(&self) -> Option<&str> {
        match &self.command {
            Command::Parse { convention, .. } | Command::Encode { convention, .. } => {
                convention.as_deref()
            }
            Command::List => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("var_name=SSM").unwrap(),
            ("var_name".to_string(), "SSM".to_string())
        );
        assert_eq!(
            parse_key_value("band=").unwrap(),
            ("band".to_string(), String::new())
        );
        assert!(parse_key_value("var_name").is_err());
        assert!(parse_key_value("=SSM").is_err());
    }

    #[test]
    fn test_parse_command() {
        let args = Args::try_parse_from([
            "geofilename",
            "parse",
            "a.tif",
            "b.tif",
            "--convention",
            "yeoda",
            "--json",
        ])
        .unwrap();

        assert!(args.json);
        assert_eq!(args.convention(), Some("yeoda"));
        match args.command {
            Command::Parse { filenames, .. } => assert_eq!(filenames, ["a.tif", "b.tif"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_encode_command() {
        let args = Args::try_parse_from([
            "geofilename",
            "--config",
            "custom.toml",
            "encode",
            "-n",
            "bmon",
            "-f",
            "var_name=BMON_SM",
            "--field",
            "version=v2",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("custom.toml"));
        match args.command {
            Command::Encode { convention, fields } => {
                assert_eq!(convention.as_deref(), Some("bmon"));
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[1], ("version".to_string(), "v2".to_string()));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_merge_json_flag() {
        let args = Args::try_parse_from(["geofilename", "list", "--json"]).unwrap();
        let mut config = Config::default();
        args.merge_into_config(&mut config);
        assert!(config.options.json);
    }
}
