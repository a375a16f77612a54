//! Convention lookup by name.

use std::sync::Arc;

use crate::conventions::builtin;
use crate::error::{Error, Result};
use crate::fs::{file_name, split_extension};
use crate::naming::{Convention, SmartFilename};

/// Registered conventions, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ConventionRegistry {
    conventions: Vec<Arc<Convention>>,
}

impl ConventionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in conventions.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for convention in builtin()? {
            registry.register(convention)?;
        }
        Ok(registry)
    }

    /// Add a convention. Names must be unique.
    pub fn register(&mut self, convention: Convention) -> Result<()> {
        if self.get(convention.name()).is_some() {
            return Err(Error::Config(format!(
                "Naming convention '{}' is already registered",
                convention.name()
            )));
        }
        tracing::debug!("Registered naming convention: {}", convention.name());
        self.conventions.push(Arc::new(convention));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<Convention>> {
        self.conventions
            .iter()
            .find(|c| c.name() == name)
            .cloned()
    }

    /// Like [`ConventionRegistry::get`], failing for unknown names.
    pub fn require(&self, name: &str) -> Result<Arc<Convention>> {
        self.get(name)
            .ok_or_else(|| Error::UnknownConvention(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.conventions.iter().map(|c| c.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Convention>> {
        self.conventions.iter()
    }

    /// Parse with the first convention that accepts the input.
    ///
    /// Conventions declaring a different extension than the input carries are
    /// skipped.
    pub fn parse_any(&self, input: &str) -> Result<SmartFilename> {
        let (_, extension) = split_extension(file_name(input));

        for convention in &self.conventions {
            if let (Some(expected), Some(actual)) = (convention.extension(), extension) {
                if expected != actual {
                    continue;
                }
            }

            match SmartFilename::parse(Arc::clone(convention), input) {
                Ok(filename) => return Ok(filename),
                Err(e) => tracing::debug!("{} does not match: {}", convention.name(), e),
            }
        }

        Err(Error::parse(input, "no registered naming convention matches"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::FieldSpec;

    #[test]
    fn test_builtins_registered() {
        let registry = ConventionRegistry::with_builtins().unwrap();
        assert_eq!(registry.names(), ["sgrt", "bmon", "eodr", "yeoda"]);
        assert!(registry.get("sgrt").is_some());
        assert!(matches!(
            registry.require("nope"),
            Err(Error::UnknownConvention(_))
        ));
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = ConventionRegistry::with_builtins().unwrap();
        let duplicate = Convention::builder("bmon")
            .field(FieldSpec::variable("a"))
            .build()
            .unwrap();
        assert!(matches!(
            registry.register(duplicate),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_parse_any_detects_convention() {
        let registry = ConventionRegistry::with_builtins().unwrap();

        let name = registry
            .parse_any("M20170725_165004--_SIG0-----_S1BIWGRDH1VVA_146_A0104_EU500M_E048N012T6.tif")
            .unwrap();
        assert_eq!(name.convention().name(), "sgrt");

        let name = registry
            .parse_any("/data/BMON_DM_ENSEMBLE_500m_20160101120000_v1.nc")
            .unwrap();
        assert_eq!(name.convention().name(), "bmon");

        let name = registry
            .parse_any("SIG0_20170725T165004__VV_A146_E048N012T6_EU500M_V04R01_S1BIWG1.tif")
            .unwrap();
        assert_eq!(name.convention().name(), "yeoda");
    }

    #[test]
    fn test_parse_any_no_match() {
        let registry = ConventionRegistry::with_builtins().unwrap();
        assert!(registry.parse_any("notes.txt").unwrap_err().is_parse());
        assert!(registry.parse_any("holiday-photo.tif").unwrap_err().is_parse());
        assert!(registry.parse_any("photos/IMG_0001.tif").unwrap_err().is_parse());
    }
}
