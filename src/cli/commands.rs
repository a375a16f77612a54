//! Command handlers shared by the binary and tests.

use std::sync::Arc;

use crate::conventions::ConventionRegistry;
use crate::error::Result;
use crate::naming::{Convention, FieldMap, SmartFilename};

/// Result of decoding one input.
#[derive(Debug)]
pub struct ParseOutcome {
    pub input: String,
    pub result: Result<SmartFilename>,
}

/// Pick the convention named on the command line, else the configured
/// default. `None` means auto-detection.
pub fn resolve_convention(
    registry: &ConventionRegistry,
    explicit: Option<&str>,
    default: Option<&str>,
) -> Result<Option<Arc<Convention>>> {
    explicit
        .or(default)
        .map(|name| registry.require(name))
        .transpose()
}

/// Decode every input, with `convention` or by auto-detection.
pub fn parse_files(
    registry: &ConventionRegistry,
    convention: Option<&Arc<Convention>>,
    inputs: &[String],
) -> Vec<ParseOutcome> {
    inputs
        .iter()
        .map(|input| {
            let result = match convention {
                Some(convention) => SmartFilename::parse(Arc::clone(convention), input),
                None => registry.parse_any(input),
            };
            if let Err(e) = &result {
                tracing::debug!("Failed to parse {}: {}", input, e);
            }
            ParseOutcome {
                input: input.clone(),
                result,
            }
        })
        .collect()
}

/// Build a filename from `key=value` pairs. Values go through the field's
/// decoder first; empty values leave the field absent.
pub fn encode_fields(
    convention: Arc<Convention>,
    fields: &[(String, String)],
) -> Result<SmartFilename> {
    let mut values = FieldMap::new();
    for (name, text) in fields {
        if text.is_empty() {
            continue;
        }
        let value = convention.decode_value(name, text)?;
        values.insert(name.clone(), value);
    }

    tracing::info!("Encoding {} field(s) with {}", values.len(), convention.name());
    SmartFilename::new(convention, values)
}
