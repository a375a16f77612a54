//! Command-line interface: argument parsing and command handlers.

pub mod args;
pub mod commands;

pub use args::{parse_key_value, Args, Command};
pub use commands::{encode_fields, parse_files, resolve_convention, ParseOutcome};
