//! Field-based filename engine.
//!
//! This module handles:
//! - Field descriptors and their codecs
//! - Naming conventions (ordered field tables)
//! - Encoding values to filenames and parsing them back
//! - Derived properties computed from decoded fields

pub mod codec;
pub mod convention;
pub mod derived;
pub mod engine;
pub mod field;
pub mod filename;
pub mod value;

pub use codec::{Codec, CodecResult, Decoder, Encoder};
pub use convention::{Convention, ConventionBuilder, FieldMap, DEFAULT_DELIMITER, DEFAULT_PAD};
pub use derived::{DerivedProperty, FieldView};
pub use field::FieldSpec;
pub use filename::SmartFilename;
pub use value::FieldValue;
