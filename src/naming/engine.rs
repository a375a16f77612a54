//! Filename engine: the two inverse transformations over a convention.
//!
//! Values are handled as slots, one `Option<FieldValue>` per field in
//! convention order. [`Convention::encode`] and [`Convention::decode`] wrap
//! these with name-keyed maps.

use std::iter;

use crate::error::{Error, Result};
use crate::fs::{check_field_text, file_name, strip_extension};
use crate::naming::convention::Convention;
use crate::naming::value::FieldValue;

/// Encode slot values into a filename, extension included.
///
/// Fixed-length fields are right-padded with the pad character; overlength
/// text is rejected rather than truncated.
pub fn encode(convention: &Convention, slots: &[Option<FieldValue>]) -> Result<String> {
    let pad = convention.pad();
    let delimiter = convention.delimiter();
    let mut filename = String::new();
    let mut omitted: Option<&str> = None;

    for (i, (field, value)) in convention.fields().iter().zip(slots).enumerate() {
        let text = match value {
            Some(value) => {
                if let Some(previous) = omitted {
                    return Err(Error::InvalidValue {
                        field: field.name.clone(),
                        message: format!("cannot follow omitted field '{}'", previous),
                    });
                }
                let text = field
                    .encode_value(value)
                    .map_err(|message| Error::InvalidValue {
                        field: field.name.clone(),
                        message,
                    })?;
                if text.is_empty() && !field.optional {
                    return Err(Error::InvalidValue {
                        field: field.name.clone(),
                        message: "required field encodes to empty text".to_string(),
                    });
                }
                check_field_text(&field.name, &text)?;
                text
            }
            None if !field.optional => {
                return Err(Error::MissingField {
                    field: field.name.clone(),
                });
            }
            None if field.omit_when_absent => {
                omitted.get_or_insert(&field.name);
                continue;
            }
            None => String::new(),
        };

        if !field.is_fixed() && text.contains(delimiter) {
            return Err(Error::InvalidValue {
                field: field.name.clone(),
                message: format!("variable-length text '{}' contains '{}'", text, delimiter),
            });
        }

        if i > 0 && field.delimiter_before {
            filename.push(delimiter);
        }

        match field.length {
            Some(length) => {
                let count = text.chars().count();
                if count > length {
                    return Err(Error::FieldLength {
                        field: field.name.clone(),
                        length: count,
                        max: length,
                    });
                }
                filename.push_str(&text);
                filename.extend(iter::repeat(pad).take(length - count));
            }
            None => filename.push_str(&text),
        }
    }

    if let Some(extension) = convention.extension() {
        filename.push_str(extension);
    }

    tracing::debug!("Encoded {} filename: {}", convention.name(), filename);
    Ok(filename)
}

/// Decode a filename into slot values.
///
/// Directory components are dropped and the convention's extension is
/// stripped when present. No partial result is returned on failure.
pub fn decode(convention: &Convention, input: &str) -> Result<Vec<Option<FieldValue>>> {
    let stem = strip_extension(file_name(input), convention.extension());
    let chars: Vec<char> = stem.chars().collect();
    let fields = convention.fields();
    let pad = convention.pad();
    let delimiter = convention.delimiter();

    let min_length = convention.min_length();
    if chars.len() < min_length {
        return Err(Error::parse(
            input,
            format!(
                "shorter than the minimum length {} (got {})",
                min_length,
                chars.len()
            ),
        ));
    }

    let mut slots = Vec::with_capacity(fields.len());
    let mut cursor = 0;

    for (i, field) in fields.iter().enumerate() {
        // Only omittable trailing fields may be missing along with their
        // delimiter; every other field keeps its delimiter even when empty.
        if cursor == chars.len() && field.omit_when_absent {
            slots.push(None);
            continue;
        }

        if i > 0 && field.delimiter_before {
            if cursor == chars.len() {
                return Err(Error::parse(
                    input,
                    format!(
                        "ends where '{}' is expected before field '{}'",
                        delimiter, field.name
                    ),
                ));
            }
            if chars[cursor] != delimiter {
                return Err(Error::parse(
                    input,
                    format!(
                        "expected '{}' before field '{}' at position {}",
                        delimiter, field.name, cursor
                    ),
                ));
            }
            cursor += 1;
        }

        let end = match field.length {
            Some(length) => {
                if cursor + length > chars.len() {
                    return Err(Error::parse(
                        input,
                        format!(
                            "too short for field '{}' ({} characters needed at position {})",
                            field.name, length, cursor
                        ),
                    ));
                }
                cursor + length
            }
            None => {
                let next_delimiter = chars[cursor..]
                    .iter()
                    .position(|c| *c == delimiter)
                    .map_or(chars.len(), |offset| cursor + offset);
                // Room for fixed fields joined directly after this one.
                let reserved: usize = fields[i + 1..]
                    .iter()
                    .take_while(|f| !f.delimiter_before)
                    .filter_map(|f| f.length)
                    .sum();
                if next_delimiter < cursor + reserved {
                    return Err(Error::parse(
                        input,
                        format!(
                            "no room for the fields joined to '{}' at position {}",
                            field.name, cursor
                        ),
                    ));
                }
                next_delimiter - reserved
            }
        };

        let segment: String = chars[cursor..end].iter().collect();
        cursor = end;

        let text = if field.is_fixed() {
            segment.trim_end_matches(pad)
        } else {
            segment.as_str()
        };

        if text.is_empty() {
            if !field.optional {
                return Err(Error::parse(
                    input,
                    format!("required field '{}' is empty", field.name),
                ));
            }
            slots.push(None);
            continue;
        }

        check_field_text(&field.name, text).map_err(|e| Error::parse(input, e.to_string()))?;

        let value = field.decode_text(text).map_err(|message| {
            Error::parse(input, format!("field '{}': {}", field.name, message))
        })?;
        slots.push(Some(value));
    }

    if cursor < chars.len() {
        let rest: String = chars[cursor..].iter().collect();
        return Err(Error::parse(
            input,
            format!("unexpected trailing content '{}'", rest),
        ));
    }

    tracing::debug!("Decoded {} filename: {}", convention.name(), input);
    Ok(slots)
}
