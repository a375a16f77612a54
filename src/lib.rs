//! geofilename - field-based filename encoding and decoding for geo datasets
//!
//! A naming convention is an ordered table of [`FieldSpec`]s plus a pad
//! character, a delimiter and an optional extension. The same table drives
//! both directions: values are encoded into a filename and filenames are
//! decoded back into typed values.
//!
//! # Features
//!
//! - Fixed-width and variable-length fields with per-field codecs
//! - Derived properties computed from decoded fields on every access
//! - Built-in SGRT, BMon, eoDR and yeoda conventions
//! - User-defined conventions from a TOML configuration file
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use geofilename::{Codec, Convention, FieldSpec, SmartFilename};
//!
//! let convention = Arc::new(
//!     Convention::builder("example")
//!         .field(FieldSpec::fixed("code", 3))
//!         .field(FieldSpec::fixed("date", 8).codec(Codec::date("%Y%m%d")))
//!         .build()?,
//! );
//!
//! let name = SmartFilename::parse(convention, "ABC_20200101")?;
//! assert_eq!(name.get_str("code")?, "ABC");
//! # Ok::<(), geofilename::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod conventions;
pub mod error;
pub mod fs;
pub mod naming;
pub mod output;

// Re-exports for convenience
pub use config::Config;
pub use conventions::ConventionRegistry;
pub use error::{Error, Result};
pub use naming::{
    Codec, Convention, DerivedProperty, FieldMap, FieldSpec, FieldValue, FieldView,
    SmartFilename,
};
