//! Filesystem module.
//!
//! Provides:
//! - Splitting paths into directory, file name and extension
//! - Sanity checks for text written into filenames

pub mod naming;
pub mod paths;

pub use naming::check_field_text;
pub use paths::{file_name, split_extension, strip_extension};
