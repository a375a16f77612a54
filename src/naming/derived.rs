//! Derived properties: named pure functions over decoded fields.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::naming::convention::Convention;
use crate::naming::value::FieldValue;

/// Read-only view of a filename's current field values.
#[derive(Clone, Copy)]
pub struct FieldView<'a> {
    convention: &'a Convention,
    values: &'a [Option<FieldValue>],
}

impl<'a> FieldView<'a> {
    pub(crate) fn new(convention: &'a Convention, values: &'a [Option<FieldValue>]) -> Self {
        Self { convention, values }
    }

    /// Value of a field, `None` when absent.
    pub fn get(&self, name: &str) -> Result<Option<&'a FieldValue>> {
        let index = self
            .convention
            .field_index(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))?;
        Ok(self.values[index].as_ref())
    }
}

/// Signature of a property function.
pub type DeriveFn = Arc<dyn Fn(&FieldView<'_>) -> Result<Option<FieldValue>> + Send + Sync>;

/// A named value computed from other fields. Not stored, recomputed on access.
#[derive(Clone)]
pub struct DerivedProperty {
    pub name: String,
    function: DeriveFn,
}

impl DerivedProperty {
    pub fn new<F>(name: &str, function: F) -> Self
    where
        F: Fn(&FieldView<'_>) -> Result<Option<FieldValue>> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            function: Arc::new(function),
        }
    }

    /// Midpoint between two date or date-time fields.
    ///
    /// Yields `start` alone when `end` is absent, and nothing when `start` is
    /// absent. Two plain dates give a date; anything else gives a date-time.
    pub fn midpoint(name: &str, start: &str, end: &str) -> Self {
        let (start, end) = (start.to_string(), end.to_string());
        Self::new(name, move |view| {
            let Some(first) = view.get(&start)? else {
                return Ok(None);
            };
            let Some(second) = view.get(&end)? else {
                return Ok(Some(first.clone()));
            };
            midpoint_of(&start, first, second).map(Some)
        })
    }

    /// Join the text form of several fields. Absent when any input is absent.
    pub fn concat(name: &str, fields: &[&str], separator: &str) -> Self {
        let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        let separator = separator.to_string();
        Self::new(name, move |view| {
            let mut parts = Vec::with_capacity(fields.len());
            for field in &fields {
                match view.get(field)? {
                    Some(value) => parts.push(value.to_string()),
                    None => return Ok(None),
                }
            }
            Ok(Some(FieldValue::Text(parts.join(&separator))))
        })
    }

    pub fn evaluate(&self, view: &FieldView<'_>) -> Result<Option<FieldValue>> {
        (self.function)(view)
    }
}

fn midpoint_of(field: &str, first: &FieldValue, second: &FieldValue) -> Result<FieldValue> {
    if let (FieldValue::Date(a), FieldValue::Date(b)) = (first, second) {
        let half = (*b - *a) / 2;
        return Ok(FieldValue::Date(*a + half));
    }

    match (first.as_datetime(), second.as_datetime()) {
        (Some(a), Some(b)) => Ok(FieldValue::DateTime(a + (b - a) / 2)),
        _ => Err(Error::InvalidValue {
            field: field.to_string(),
            message: format!(
                "cannot take the midpoint of a {} and a {}",
                first.kind(),
                second.kind()
            ),
        }),
    }
}

impl fmt::Debug for DerivedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedProperty")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
