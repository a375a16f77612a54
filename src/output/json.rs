//! JSON rendering of conventions and parsed filenames.

use serde_json::{json, Map, Value};

use crate::cli::ParseOutcome;
use crate::error::Result;
use crate::naming::{Convention, SmartFilename};

pub fn convention_json(convention: &Convention) -> Value {
    let fields: Vec<Value> = convention
        .fields()
        .iter()
        .map(|field| {
            json!({
                "name": field.name,
                "length": field.length,
                "delimiter_before": field.delimiter_before,
                "optional": field.optional,
                "omit_when_absent": field.omit_when_absent,
            })
        })
        .collect();
    let derived: Vec<&str> = convention.derived().iter().map(|p| p.name.as_str()).collect();

    json!({
        "name": convention.name(),
        "pad": convention.pad().to_string(),
        "delimiter": convention.delimiter().to_string(),
        "extension": convention.extension(),
        "min_length": convention.min_length(),
        "fields": fields,
        "derived": derived,
    })
}

/// Fields and derived properties; absent values are `null`.
pub fn filename_json(filename: &SmartFilename) -> Result<Value> {
    let mut fields = Map::new();
    for (name, value) in filename.fields() {
        fields.insert(name.to_string(), serde_json::to_value(value)?);
    }

    let mut properties = Map::new();
    for (name, value) in filename.properties()? {
        properties.insert(name, serde_json::to_value(value)?);
    }

    Ok(json!({
        "filename": filename.encoded(),
        "convention": filename.convention().name(),
        "fields": fields,
        "properties": properties,
    }))
}

pub fn outcome_json(outcome: &ParseOutcome) -> Result<Value> {
    Ok(match &outcome.result {
        Ok(filename) => {
            let mut value = filename_json(filename)?;
            value["input"] = json!(outcome.input);
            value
        }
        Err(e) => json!({
            "input": outcome.input,
            "error": e.to_string(),
        }),
    })
}

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::{eodr, ConventionRegistry};
    use crate::error::Error;
    use std::sync::Arc;

    #[test]
    fn test_filename_json() {
        let registry = ConventionRegistry::with_builtins().unwrap();
        let name = registry
            .parse_any("BMON_DM_ENSEMBLE_500m_20160101120000_v1.nc")
            .unwrap();
        let value = filename_json(&name).unwrap();

        assert_eq!(value["convention"], "bmon");
        assert_eq!(value["fields"]["sres"], "500m");
        assert_eq!(value["fields"]["timestamp"], "2016-01-01T12:00:00");
        assert!(value["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_filename_json_with_properties() {
        let conv = Arc::new(eodr::convention().unwrap());
        let name =
            SmartFilename::parse(conv, "SMOS--------_20190101T000000_---------------_1.vrt")
                .unwrap();
        let value = filename_json(&name).unwrap();

        assert_eq!(value["fields"]["id"], "SMOS");
        assert!(value["fields"]["dt_2"].is_null());
        assert_eq!(value["properties"]["dt"], "2019-01-01T00:00:00");
    }

    #[test]
    fn test_outcome_json_error() {
        let outcome = ParseOutcome {
            input: "x.tif".to_string(),
            result: Err(Error::parse("x.tif", "too short")),
        };
        let value = outcome_json(&outcome).unwrap();
        assert_eq!(value["input"], "x.tif");
        assert!(value["error"].as_str().unwrap().contains("too short"));
    }

    #[test]
    fn test_convention_json() {
        let registry = ConventionRegistry::with_builtins().unwrap();
        let value = convention_json(&registry.require("yeoda").unwrap());
        assert_eq!(value["name"], "yeoda");
        assert_eq!(value["extension"], ".tif");
        assert_eq!(value["fields"][9]["name"], "creator");
        assert_eq!(value["fields"][9]["omit_when_absent"], true);
        assert_eq!(value["derived"][0], "time");
    }
}
