//! Built-in naming conventions and lookup by name.
//!
//! Each convention is plain data: a FieldSpec table built by its module's
//! `convention()` function.

pub mod bmon;
pub mod eodr;
pub mod registry;
pub mod sgrt;
pub mod yeoda;

pub use registry::ConventionRegistry;

use crate::error::Result;
use crate::naming::Convention;

/// All built-in conventions, strictest first.
pub fn builtin() -> Result<Vec<Convention>> {
    Ok(vec![
        sgrt::convention()?,
        bmon::convention()?,
        eodr::convention()?,
        yeoda::convention()?,
    ])
}
