//! Configuration structures and loading logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::validation::validate_config;
use crate::conventions::ConventionRegistry;
use crate::error::{Error, Result};
use crate::naming::{
    Codec, Convention, DerivedProperty, FieldSpec, DEFAULT_DELIMITER, DEFAULT_PAD,
};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    /// User-defined naming conventions, registered after the built-ins.
    #[serde(default)]
    pub conventions: Vec<ConventionConfig>,
}

/// General options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Convention used by `parse` and `encode` when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_convention: Option<String>,

    /// Pad character for conventions that do not set their own.
    #[serde(default = "default_pad")]
    pub pad: char,

    /// Delimiter for conventions that do not set their own.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Print results as JSON.
    #[serde(default)]
    pub json: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            default_convention: None,
            pad: DEFAULT_PAD,
            delimiter: DEFAULT_DELIMITER,
            json: false,
        }
    }
}

/// One `[[conventions]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConventionConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad: Option<char>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,

    /// Extension including the leading dot, e.g. `.tif`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldConfig>,

    #[serde(default)]
    pub derived: Vec<DerivedConfig>,
}

/// One `[[conventions.fields]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,

    /// Fixed width; omit for a variable-length field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    #[serde(default = "default_true")]
    pub delimiter_before: bool,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub omit_when_absent: bool,

    #[serde(default = "default_codec")]
    pub codec: Codec,
}

/// Kind of a configured derived property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivedKind {
    /// Midpoint of two date fields.
    Midpoint,
    /// Field texts joined by `separator`.
    Concat,
}

/// One `[[conventions.derived]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedConfig {
    pub name: String,
    pub kind: DerivedKind,
    pub fields: Vec<String>,

    #[serde(default)]
    pub separator: String,
}

fn default_pad() -> char {
    DEFAULT_PAD
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_true() -> bool {
    true
}

fn default_codec() -> Codec {
    Codec::Text
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Built-in conventions plus the configured ones.
    pub fn registry(&self) -> Result<ConventionRegistry> {
        validate_config(self)?;

        let mut registry = ConventionRegistry::with_builtins()?;
        for convention in &self.conventions {
            registry.register(convention.to_convention(&self.options)?)?;
        }

        if let Some(name) = &self.options.default_convention {
            registry.require(name)?;
        }

        Ok(registry)
    }
}

impl ConventionConfig {
    /// Build the convention, falling back to `options` for pad and delimiter.
    pub fn to_convention(&self, options: &OptionsConfig) -> Result<Convention> {
        let mut builder = Convention::builder(&self.name)
            .pad(self.pad.unwrap_or(options.pad))
            .delimiter(self.delimiter.unwrap_or(options.delimiter));

        if let Some(extension) = &self.extension {
            builder = builder.extension(extension);
        }

        for field in &self.fields {
            builder = builder.field(field.to_field_spec());
        }

        for derived in &self.derived {
            builder = builder.derived(derived.to_property()?);
        }

        builder.build()
    }
}

impl FieldConfig {
    pub fn to_field_spec(&self) -> FieldSpec {
        let mut field = match self.length {
            Some(length) => FieldSpec::fixed(&self.name, length),
            None => FieldSpec::variable(&self.name),
        }
        .delimiter_before(self.delimiter_before)
        .codec(self.codec.clone());

        if self.omit_when_absent {
            field = field.omit_when_absent();
        } else if self.optional {
            field = field.optional();
        }

        field
    }
}

impl DerivedConfig {
    pub fn to_property(&self) -> Result<DerivedProperty> {
        match self.kind {
            DerivedKind::Midpoint => match self.fields.as_slice() {
                [start, end] => Ok(DerivedProperty::midpoint(&self.name, start, end)),
                _ => Err(Error::ConfigValidation {
                    field: format!("derived.{}", self.name),
                    message: format!(
                        "midpoint needs exactly two fields (got {})",
                        self.fields.len()
                    ),
                }),
            },
            DerivedKind::Concat => {
                if self.fields.is_empty() {
                    return Err(Error::ConfigValidation {
                        field: format!("derived.{}", self.name),
                        message: "concat needs at least one field".to_string(),
                    });
                }
                let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
                Ok(DerivedProperty::concat(&self.name, &fields, &self.separator))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{FieldValue, SmartFilename};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[options]
default_convention = "period"

[[conventions]]
name = "period"
extension = ".nc"

[[conventions.fields]]
name = "pflag"
length = 1

[[conventions.fields]]
name = "start_date"
length = 8
codec = { type = "date", format = "%Y%m%d" }

[[conventions.fields]]
name = "end_date"
length = 8
optional = true
codec = { type = "date" }

[[conventions.fields]]
name = "var_name"

[[conventions.derived]]
name = "mean_date"
kind = "midpoint"
fields = ["start_date", "end_date"]
"#;

    #[test]
    fn test_parse_sample() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.options.default_convention.as_deref(), Some("period"));
        assert_eq!(config.options.pad, '-');
        assert_eq!(config.conventions.len(), 1);

        let fields = &config.conventions[0].fields;
        assert_eq!(fields[0].length, Some(1));
        assert!(fields[0].delimiter_before);
        assert_eq!(fields[1].codec, Codec::date("%Y%m%d"));
        assert!(fields[2].optional);
        assert_eq!(fields[3].codec, Codec::Text);
    }

    #[test]
    fn test_registry_includes_configured_convention() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(registry.names(), ["sgrt", "bmon", "eodr", "yeoda", "period"]);

        let convention = registry.require("period").unwrap();
        let name = SmartFilename::parse(Arc::clone(&convention), "M_20200101_20200103_SSM.nc")
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        assert_eq!(
            name.property("mean_date").unwrap(),
            Some(FieldValue::Date(expected))
        );
    }

    #[test]
    fn test_unknown_default_convention() {
        let mut config = Config::default();
        config.options.default_convention = Some("missing".to_string());
        assert!(matches!(
            config.registry(),
            Err(Error::UnknownConvention(_))
        ));
    }

    #[test]
    fn test_duplicate_builtin_name() {
        let mut config: Config = toml::from_str(SAMPLE).unwrap();
        config.conventions[0].name = "sgrt".to_string();
        assert!(matches!(config.registry(), Err(Error::Config(_))));
    }

    #[test]
    fn test_midpoint_needs_two_fields() {
        let derived = DerivedConfig {
            name: "mid".to_string(),
            kind: DerivedKind::Midpoint,
            fields: vec!["a".to_string()],
            separator: String::new(),
        };
        assert!(matches!(
            derived.to_property(),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_options_pad_used_as_default() {
        let mut config: Config = toml::from_str(SAMPLE).unwrap();
        config.options.pad = '0';
        let convention = config.conventions[0]
            .to_convention(&config.options)
            .unwrap();
        assert_eq!(convention.pad(), '0');
        assert_eq!(convention.delimiter(), '_');
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("geofilename.toml");

        let config: Config = toml::from_str(SAMPLE).unwrap();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.options.default_convention.as_deref(), Some("period"));
        assert_eq!(loaded.conventions[0].fields.len(), 4);
        assert_eq!(loaded.conventions[0].derived[0].kind, DerivedKind::Midpoint);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
