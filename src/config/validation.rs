//! Configuration validation logic.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::loader::{Config, ConventionConfig};
use crate::error::{Error, Result};

/// Characters that would break paths or shell usage when used as separators.
const RESERVED_SEPARATORS: &[char] = &['/', '\\', '.', '\0'];

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid name pattern"))
}

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(name) = &config.options.default_convention {
        validate_name("default_convention", name)?;
    }
    validate_separator("options.pad", config.options.pad)?;
    validate_separator("options.delimiter", config.options.delimiter)?;

    for convention in &config.conventions {
        validate_convention(convention)?;
    }

    Ok(())
}

/// Validate a convention, field or property name.
pub fn validate_name(field: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Name must not be empty".to_string(),
        });
    }

    if !name_pattern().is_match(name) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Name '{}' is invalid. Use lowercase letters, digits and underscores, starting with a letter.",
                name
            ),
        });
    }

    Ok(())
}

fn validate_separator(field: &str, c: char) -> Result<()> {
    if RESERVED_SEPARATORS.contains(&c) || c.is_control() || c.is_whitespace() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("'{}' cannot be used here", c.escape_debug()),
        });
    }
    Ok(())
}

fn validate_convention(convention: &ConventionConfig) -> Result<()> {
    let prefix = format!("conventions.{}", convention.name);
    validate_name("conventions.name", &convention.name)?;

    if let Some(pad) = convention.pad {
        validate_separator(&format!("{}.pad", prefix), pad)?;
    }
    if let Some(delimiter) = convention.delimiter {
        validate_separator(&format!("{}.delimiter", prefix), delimiter)?;
    }

    if let Some(extension) = &convention.extension {
        if !extension.starts_with('.') || extension.len() < 2 || extension[1..].contains(['/', '\\']) {
            return Err(Error::ConfigValidation {
                field: format!("{}.extension", prefix),
                message: format!("Extension '{}' must look like '.tif'", extension),
            });
        }
    }

    if convention.fields.is_empty() {
        return Err(Error::ConfigValidation {
            field: format!("{}.fields", prefix),
            message: "At least one field is required".to_string(),
        });
    }

    for field in &convention.fields {
        validate_name(&format!("{}.fields.name", prefix), &field.name)?;
    }

    for derived in &convention.derived {
        validate_name(&format!("{}.derived.name", prefix), &derived.name)?;

        if let Some(unknown) = derived
            .fields
            .iter()
            .find(|name| !convention.fields.iter().any(|f| &f.name == *name))
        {
            return Err(Error::ConfigValidation {
                field: format!("{}.derived.{}", prefix, derived.name),
                message: format!("Unknown field '{}'", unknown),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::{DerivedConfig, DerivedKind, FieldConfig};
    use crate::naming::Codec;

    fn field(name: &str) -> FieldConfig {
        FieldConfig {
            name: name.to_string(),
            length: None,
            delimiter_before: true,
            optional: false,
            omit_when_absent: false,
            codec: Codec::Text,
        }
    }

    fn convention() -> ConventionConfig {
        ConventionConfig {
            name: "period".to_string(),
            pad: None,
            delimiter: None,
            extension: Some(".nc".to_string()),
            fields: vec![field("start"), field("end")],
            derived: vec![DerivedConfig {
                name: "mid".to_string(),
                kind: DerivedKind::Midpoint,
                fields: vec!["start".to_string(), "end".to_string()],
                separator: String::new(),
            }],
        }
    }

    fn config_with(convention: ConventionConfig) -> Config {
        Config {
            conventions: vec![convention],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_names() {
        assert!(validate_name("name", "sgrt").is_ok());
        assert!(validate_name("name", "dtime_1").is_ok());
        assert!(validate_name("name", "var_name").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", "1abc").is_err());
        assert!(validate_name("name", "Var").is_err());
        assert!(validate_name("name", "var-name").is_err());
    }

    #[test]
    fn test_valid_convention() {
        assert!(validate_config(&config_with(convention())).is_ok());
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_bad_extension() {
        let mut conv = convention();
        conv.extension = Some("nc".to_string());
        assert!(validate_config(&config_with(conv)).is_err());
    }

    #[test]
    fn test_no_fields() {
        let mut conv = convention();
        conv.fields.clear();
        conv.derived.clear();
        assert!(validate_config(&config_with(conv)).is_err());
    }

    #[test]
    fn test_derived_unknown_field() {
        let mut conv = convention();
        conv.derived[0].fields[1] = "stop".to_string();
        assert!(matches!(
            validate_config(&config_with(conv)),
            Err(Error::ConfigValidation { message, .. }) if message.contains("stop")
        ));
    }

    #[test]
    fn test_reserved_delimiter() {
        let mut conv = convention();
        conv.delimiter = Some('/');
        assert!(validate_config(&config_with(conv)).is_err());

        let mut config = Config::default();
        config.options.pad = ' ';
        assert!(validate_config(&config).is_err());
    }
}
