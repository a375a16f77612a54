//! Output module for console and JSON output.
//!
//! Provides:
//! - Colored console output
//! - JSON rendering
//! - Statistics reporting

pub mod console;
pub mod json;
pub mod stats;

pub use console::{print_convention, print_error, print_filename, print_info};
pub use json::{convention_json, filename_json, outcome_json, print_json};
pub use stats::{print_parse_stats, ParseStats};
