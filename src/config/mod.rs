//! Configuration module for geofilename.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Building user-defined naming conventions
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{
    Config, ConventionConfig, DerivedConfig, DerivedKind, FieldConfig, OptionsConfig,
};
pub use validation::{validate_config, validate_name};
