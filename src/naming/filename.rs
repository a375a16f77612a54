//! Filename instances bound to one convention.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::naming::convention::{Convention, FieldMap};
use crate::naming::derived::FieldView;
use crate::naming::engine;
use crate::naming::value::FieldValue;

/// Decoded field values of one filename plus their encoded form.
///
/// Built either from values ([`SmartFilename::new`]) or by parsing
/// ([`SmartFilename::parse`]); both end up in the same representation. The
/// encoded string is re-derived on every update, so an instance is always
/// encodable.
#[derive(Debug, Clone)]
pub struct SmartFilename {
    convention: Arc<Convention>,
    values: Vec<Option<FieldValue>>,
    encoded: String,
}

impl SmartFilename {
    /// Build from explicit values.
    pub fn new(convention: Arc<Convention>, values: FieldMap) -> Result<Self> {
        let values = convention.slots_from_map(&values)?;
        let encoded = engine::encode(&convention, &values)?;
        Ok(Self {
            convention,
            values,
            encoded,
        })
    }

    /// Parse an existing filename; directories and extension are allowed.
    pub fn parse(convention: Arc<Convention>, input: &str) -> Result<Self> {
        let values = engine::decode(&convention, input)?;
        let encoded = engine::encode(&convention, &values)?;
        Ok(Self {
            convention,
            values,
            encoded,
        })
    }

    pub fn convention(&self) -> &Convention {
        &self.convention
    }

    /// Encoded filename, extension included.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    fn index(&self, name: &str) -> Result<usize> {
        self.convention
            .field_index(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    /// Decoded value of a field, `None` when absent.
    pub fn get(&self, name: &str) -> Result<Option<&FieldValue>> {
        let index = self.index(name)?;
        Ok(self.values[index].as_ref())
    }

    /// Encoded text of a field without padding, empty when absent.
    pub fn get_str(&self, name: &str) -> Result<String> {
        let index = self.index(name)?;
        let field = &self.convention.fields()[index];
        match &self.values[index] {
            Some(value) => field.encode_value(value).map_err(|message| Error::InvalidValue {
                field: name.to_string(),
                message,
            }),
            None => Ok(String::new()),
        }
    }

    /// Replace a field value. Text is decoded with the field's codec and
    /// empty text clears the field. The instance is left unchanged on error.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let index = self.index(name)?;
        let value = self.convention.normalize_value(index, value.into())?;
        self.update(index, value)
    }

    /// Remove a field value. Fails with `MissingField` for required fields.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let index = self.index(name)?;
        self.update(index, None)
    }

    fn update(&mut self, index: usize, value: Option<FieldValue>) -> Result<()> {
        let mut values = self.values.clone();
        values[index] = value;
        self.encoded = engine::encode(&self.convention, &values)?;
        self.values = values;
        Ok(())
    }

    /// Evaluate a derived property against the current values.
    pub fn property(&self, name: &str) -> Result<Option<FieldValue>> {
        self.convention.evaluate_slots(name, &self.values)
    }

    /// Read-only view used by derived properties.
    pub fn view(&self) -> FieldView<'_> {
        FieldView::new(&self.convention, &self.values)
    }

    /// Fields in convention order with their values.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.convention
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name.as_str(), value.as_ref()))
    }

    /// All derived properties with their current values.
    pub fn properties(&self) -> Result<Vec<(String, Option<FieldValue>)>> {
        let view = self.view();
        self.convention
            .derived()
            .iter()
            .map(|p| Ok((p.name.clone(), p.evaluate(&view)?)))
            .collect()
    }

    /// Present values keyed by field name.
    pub fn to_map(&self) -> FieldMap {
        self.fields()
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.clone())))
            .collect()
    }
}

impl fmt::Display for SmartFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded)
    }
}
