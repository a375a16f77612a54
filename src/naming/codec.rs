//! Built-in field codecs.
//!
//! A codec is a matching encoder/decoder pair. Text passed to a typed codec is
//! written as is, so callers can always supply the already-encoded form.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::naming::value::{FieldValue, DATETIME_FORMAT, DATE_FORMAT};

/// Result of a single encoder or decoder call. The error is a plain message;
/// the engine attaches the field name and input.
pub type CodecResult<T> = std::result::Result<T, String>;

/// Turns a field value into its filename text.
pub type Encoder = Arc<dyn Fn(&FieldValue) -> CodecResult<String> + Send + Sync>;

/// Turns filename text (padding already stripped) into a field value.
pub type Decoder = Arc<dyn Fn(&str) -> CodecResult<FieldValue> + Send + Sync>;

/// Declarative codec description, usable from configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Codec {
    /// Plain text, no conversion.
    Text,
    /// Decimal integer, optionally zero-padded to `width` digits.
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<usize>,
    },
    /// Calendar date in a chrono format string.
    Date {
        #[serde(default = "default_date_format")]
        format: String,
    },
    /// Date and time in a chrono format string.
    #[serde(rename = "datetime")]
    DateTime {
        #[serde(default = "default_datetime_format")]
        format: String,
    },
    /// Integer when the text is all digits, plain text otherwise. Integers are
    /// zero-padded to `width` digits.
    IntegerOrText {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<usize>,
    },
    /// `%Y%m%dT%H%M%S` when the text contains a `T`, `%Y%m%d` otherwise.
    #[serde(rename = "date_or_datetime")]
    DateOrDateTime,
}

fn default_date_format() -> String {
    DATE_FORMAT.to_string()
}

fn default_datetime_format() -> String {
    DATETIME_FORMAT.to_string()
}

impl Codec {
    pub fn date(format: &str) -> Self {
        Codec::Date {
            format: format.to_string(),
        }
    }

    pub fn datetime(format: &str) -> Self {
        Codec::DateTime {
            format: format.to_string(),
        }
    }

    pub fn integer(width: usize) -> Self {
        Codec::Integer { width: Some(width) }
    }

    pub fn integer_or_text(width: usize) -> Self {
        Codec::IntegerOrText { width: Some(width) }
    }

    /// Build the encoder function. `Text` needs none.
    pub fn encoder(&self) -> Option<Encoder> {
        match self.clone() {
            Codec::Text => None,
            Codec::Integer { width } | Codec::IntegerOrText { width } => {
                Some(Arc::new(move |value: &FieldValue| match value {
                    FieldValue::Integer(n) => Ok(format_integer(*n, width)),
                    FieldValue::Text(s) => Ok(s.clone()),
                    other => Err(format!("expected an integer, got a {}", other.kind())),
                }))
            }
            Codec::Date { format } => Some(Arc::new(move |value: &FieldValue| match value {
                FieldValue::Date(d) => Ok(d.format(&format).to_string()),
                FieldValue::DateTime(dt) => Ok(dt.format(&format).to_string()),
                FieldValue::Text(s) => Ok(s.clone()),
                other => Err(format!("expected a date, got a {}", other.kind())),
            })),
            Codec::DateTime { format } => Some(Arc::new(move |value: &FieldValue| {
                match value {
                    FieldValue::DateTime(dt) => Ok(dt.format(&format).to_string()),
                    FieldValue::Date(_) => value
                        .as_datetime()
                        .map(|dt| dt.format(&format).to_string())
                        .ok_or_else(|| "date out of range".to_string()),
                    FieldValue::Text(s) => Ok(s.clone()),
                    other => Err(format!("expected a datetime, got a {}", other.kind())),
                }
            })),
            Codec::DateOrDateTime => Some(Arc::new(|value: &FieldValue| match value {
                FieldValue::Date(_) | FieldValue::DateTime(_) | FieldValue::Text(_) => {
                    Ok(value.to_string())
                }
                other => Err(format!("expected a date or datetime, got a {}", other.kind())),
            })),
        }
    }

    /// Build the decoder function. `Text` needs none.
    pub fn decoder(&self) -> Option<Decoder> {
        match self.clone() {
            Codec::Text => None,
            Codec::Integer { .. } => Some(Arc::new(|text: &str| {
                text.parse::<i64>()
                    .map(FieldValue::Integer)
                    .map_err(|e| format!("'{}' is not an integer: {}", text, e))
            })),
            Codec::IntegerOrText { .. } => Some(Arc::new(|text: &str| {
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    if let Ok(n) = text.parse::<i64>() {
                        return Ok(FieldValue::Integer(n));
                    }
                }
                Ok(FieldValue::Text(text.to_string()))
            })),
            Codec::Date { format } => Some(Arc::new(move |text: &str| {
                NaiveDate::parse_from_str(text, &format)
                    .map(FieldValue::Date)
                    .map_err(|e| format!("'{}' does not match '{}': {}", text, format, e))
            })),
            Codec::DateTime { format } => Some(Arc::new(move |text: &str| {
                NaiveDateTime::parse_from_str(text, &format)
                    .map(FieldValue::DateTime)
                    .map_err(|e| format!("'{}' does not match '{}': {}", text, format, e))
            })),
            Codec::DateOrDateTime => Some(Arc::new(|text: &str| {
                if text.contains('T') {
                    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
                        .map(FieldValue::DateTime)
                        .map_err(|e| format!("'{}' is not a datetime: {}", text, e))
                } else {
                    NaiveDate::parse_from_str(text, DATE_FORMAT)
                        .map(FieldValue::Date)
                        .map_err(|e| format!("'{}' is not a date: {}", text, e))
                }
            })),
        }
    }
}

fn format_integer(n: i64, width: Option<usize>) -> String {
    match width {
        Some(w) => format!("{:0w$}", n, w = w),
        None => n.to_string(),
    }
}
