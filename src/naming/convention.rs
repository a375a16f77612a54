//! Naming conventions: a FieldSpec table plus pad, delimiter and extension.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::naming::derived::{DerivedProperty, FieldView};
use crate::naming::engine;
use crate::naming::field::FieldSpec;
use crate::naming::value::FieldValue;

/// Default padding character.
pub const DEFAULT_PAD: char = '-';

/// Default delimiter character.
pub const DEFAULT_DELIMITER: char = '_';

/// Mapping from field name to decoded value.
pub type FieldMap = HashMap<String, FieldValue>;

/// One filename dialect. Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Convention {
    name: String,
    fields: Vec<FieldSpec>,
    derived: Vec<DerivedProperty>,
    pad: char,
    delimiter: char,
    extension: Option<String>,
}

/// Builder for [`Convention`]. Validation happens in [`ConventionBuilder::build`].
#[derive(Debug)]
pub struct ConventionBuilder {
    name: String,
    fields: Vec<FieldSpec>,
    derived: Vec<DerivedProperty>,
    pad: char,
    delimiter: char,
    extension: Option<String>,
}

impl ConventionBuilder {
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn derived(mut self, property: DerivedProperty) -> Self {
        self.derived.push(property);
        self
    }

    pub fn pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Extension including the leading dot, e.g. `".tif"`.
    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = Some(extension.to_string());
        self
    }

    pub fn build(self) -> Result<Convention> {
        let convention = Convention {
            name: self.name,
            fields: self.fields,
            derived: self.derived,
            pad: self.pad,
            delimiter: self.delimiter,
            extension: self.extension,
        };
        convention.check()?;
        Ok(convention)
    }
}

impl Convention {
    pub fn builder(name: &str) -> ConventionBuilder {
        ConventionBuilder {
            name: name.to_string(),
            fields: Vec::new(),
            derived: Vec::new(),
            pad: DEFAULT_PAD,
            delimiter: DEFAULT_DELIMITER,
            extension: None,
        }
    }

    fn check(&self) -> Result<()> {
        let fail = |message: String| Err(Error::Convention(format!("{}: {}", self.name, message)));

        if self.fields.is_empty() {
            return fail("no fields defined".to_string());
        }

        if self.pad == self.delimiter {
            return fail(format!(
                "pad and delimiter must differ (both '{}')",
                self.pad
            ));
        }

        let mut names = HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return fail(format!("duplicate field '{}'", field.name));
            }
            if field.length == Some(0) {
                return fail(format!("field '{}' has zero length", field.name));
            }
        }

        for property in &self.derived {
            if names.contains(property.name.as_str()) {
                return fail(format!(
                    "derived property '{}' shadows a field",
                    property.name
                ));
            }
            if !names.insert(property.name.as_str()) {
                return fail(format!("duplicate derived property '{}'", property.name));
            }
        }

        // Fields joined to a variable field must all be fixed, otherwise the
        // variable field has no boundary to split on.
        for (i, field) in self.fields.iter().enumerate() {
            if field.is_fixed() {
                continue;
            }
            let joined = self.fields[i + 1..]
                .iter()
                .take_while(|f| !f.delimiter_before);
            for next in joined {
                if !next.is_fixed() {
                    return fail(format!(
                        "variable fields '{}' and '{}' are joined without a delimiter",
                        field.name, next.name
                    ));
                }
            }
        }

        let mut seen_omittable = false;
        for field in &self.fields {
            if field.omit_when_absent {
                seen_omittable = true;
            } else if seen_omittable {
                return fail(format!(
                    "field '{}' follows an omittable field",
                    field.name
                ));
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn derived(&self) -> &[DerivedProperty] {
        &self.derived
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn property(&self, name: &str) -> Option<&DerivedProperty> {
        self.derived.iter().find(|p| p.name == name)
    }

    /// Shortest stem (no extension) a decodable filename can have. Fixed
    /// fields always take their full width, padded when absent; omittable
    /// trailing fields take nothing.
    pub fn min_length(&self) -> usize {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| !field.omit_when_absent)
            .map(|(i, field)| {
                let delimiter = usize::from(i > 0 && field.delimiter_before);
                let body = match (field.length, field.optional) {
                    (Some(length), _) => length,
                    (None, false) => 1,
                    (None, true) => 0,
                };
                delimiter + body
            })
            .sum()
    }

    /// Encode a field mapping into a filename, extension included.
    pub fn encode(&self, values: &FieldMap) -> Result<String> {
        let slots = self.slots_from_map(values)?;
        engine::encode(self, &slots)
    }

    /// Decode a filename (path and extension allowed) into a field mapping.
    /// Absent optional fields are left out of the map.
    pub fn decode(&self, input: &str) -> Result<FieldMap> {
        let slots = engine::decode(self, input)?;
        Ok(self
            .fields
            .iter()
            .zip(slots)
            .filter_map(|(field, value)| value.map(|v| (field.name.clone(), v)))
            .collect())
    }

    /// Decode raw text for one field through its decoder, e.g. a CLI argument.
    pub fn decode_value(&self, name: &str, text: &str) -> Result<FieldValue> {
        let field = self
            .field(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))?;
        field
            .decode_text(text)
            .map_err(|message| Error::InvalidValue {
                field: name.to_string(),
                message,
            })
    }

    /// Evaluate a derived property against a field mapping.
    pub fn evaluate(&self, name: &str, values: &FieldMap) -> Result<Option<FieldValue>> {
        let slots = self.slots_from_map(values)?;
        self.evaluate_slots(name, &slots)
    }

    pub(crate) fn evaluate_slots(
        &self,
        name: &str,
        slots: &[Option<FieldValue>],
    ) -> Result<Option<FieldValue>> {
        let property = self
            .property(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))?;
        property.evaluate(&FieldView::new(self, slots))
    }

    /// Lay a mapping out in field order. Unknown names are rejected.
    pub(crate) fn slots_from_map(&self, values: &FieldMap) -> Result<Vec<Option<FieldValue>>> {
        if let Some(unknown) = values.keys().find(|k| self.field_index(k).is_none()) {
            return Err(Error::UnknownField(unknown.clone()));
        }

        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| match values.get(&field.name) {
                Some(value) => self.normalize_value(index, value.clone()),
                None => Ok(None),
            })
            .collect()
    }

    /// Run a caller-supplied value through the field's decoder so that built
    /// and parsed instances hold the same representation.
    pub(crate) fn normalize_value(
        &self,
        index: usize,
        value: FieldValue,
    ) -> Result<Option<FieldValue>> {
        let field = &self.fields[index];
        field.normalize(value).map_err(|message| Error::InvalidValue {
            field: field.name.clone(),
            message,
        })
    }
}
