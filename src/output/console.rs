//! Console output utilities.

use console::style;

use crate::error::Result;
use crate::naming::{Convention, SmartFilename};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a convention with its field table.
pub fn print_convention(convention: &Convention) {
    println!();
    println!(
        "{} (extension: {}, pad: '{}', delimiter: '{}', min length: {})",
        style(convention.name()).bold(),
        convention.extension().unwrap_or("none"),
        convention.pad(),
        convention.delimiter(),
        convention.min_length()
    );

    for field in convention.fields() {
        let length = match field.length {
            Some(length) => length.to_string(),
            None => "var".to_string(),
        };
        let mut flags = Vec::new();
        if field.optional {
            flags.push("optional");
        }
        if field.omit_when_absent {
            flags.push("omit when absent");
        }
        if !field.delimiter_before {
            flags.push("joined");
        }
        println!(
            "  {:<16} {:>4}  {}",
            field.name,
            length,
            style(flags.join(", ")).dim()
        );
    }

    for property in convention.derived() {
        println!("  {:<16} {}", property.name, style("derived").dim());
    }
}

/// Print the decoded fields and derived properties of a filename.
pub fn print_filename(filename: &SmartFilename) -> Result<()> {
    println!();
    println!(
        "{} [{}]",
        style(filename.encoded()).bold(),
        filename.convention().name()
    );

    for (name, value) in filename.fields() {
        if let Some(value) = value {
            println!("  {:<16} {}", name, value);
        }
    }

    for (name, value) in filename.properties()? {
        if let Some(value) = value {
            println!("  {:<16} {}", name, style(value).cyan());
        }
    }

    Ok(())
}
