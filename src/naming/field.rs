//! Field descriptors.

use std::fmt;
use std::sync::Arc;

use crate::naming::codec::{Codec, CodecResult, Decoder, Encoder};
use crate::naming::value::FieldValue;

/// Declarative description of one filename segment.
///
/// Fields are built with [`FieldSpec::fixed`] or [`FieldSpec::variable`] and
/// refined with the builder methods:
///
/// ```
/// use geofilename::naming::{Codec, FieldSpec};
///
/// let date = FieldSpec::fixed("date", 8).codec(Codec::date("%Y%m%d"));
/// let sensor = FieldSpec::fixed("sensor", 3).no_delimiter();
/// # let _ = (date, sensor);
/// ```
#[derive(Clone)]
pub struct FieldSpec {
    pub name: String,
    /// Fixed width in characters, `None` for variable length.
    pub length: Option<usize>,
    /// Whether the convention delimiter precedes this field. Ignored for the
    /// first field.
    pub delimiter_before: bool,
    /// Whether the field may be absent.
    pub optional: bool,
    /// Whether an absent value drops the field and its delimiter entirely.
    /// Only valid for trailing fields.
    pub omit_when_absent: bool,
    pub encoder: Option<Encoder>,
    pub decoder: Option<Decoder>,
}

impl FieldSpec {
    /// A required field of exactly `length` characters.
    pub fn fixed(name: &str, length: usize) -> Self {
        Self::new(name, Some(length))
    }

    /// A required field that runs up to the next delimiter.
    pub fn variable(name: &str) -> Self {
        Self::new(name, None)
    }

    fn new(name: &str, length: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            length,
            delimiter_before: true,
            optional: false,
            omit_when_absent: false,
            encoder: None,
            decoder: None,
        }
    }

    /// Join directly to the previous field without a delimiter.
    pub fn no_delimiter(mut self) -> Self {
        self.delimiter_before = false;
        self
    }

    pub fn delimiter_before(mut self, delimiter_before: bool) -> Self {
        self.delimiter_before = delimiter_before;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Optional trailing field that disappears from the filename when absent.
    pub fn omit_when_absent(mut self) -> Self {
        self.optional = true;
        self.omit_when_absent = true;
        self
    }

    /// Attach the encoder/decoder pair of a built-in codec.
    pub fn codec(mut self, codec: Codec) -> Self {
        self.encoder = codec.encoder();
        self.decoder = codec.decoder();
        self
    }

    pub fn encoder<F>(mut self, f: F) -> Self
    where
        F: Fn(&FieldValue) -> CodecResult<String> + Send + Sync + 'static,
    {
        self.encoder = Some(Arc::new(f));
        self
    }

    pub fn decoder<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> CodecResult<FieldValue> + Send + Sync + 'static,
    {
        self.decoder = Some(Arc::new(f));
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.length.is_some()
    }

    /// Encode a value to its unpadded text.
    pub(crate) fn encode_value(&self, value: &FieldValue) -> CodecResult<String> {
        match &self.encoder {
            Some(encode) => encode(value),
            None => Ok(value.to_string()),
        }
    }

    /// Bring a caller-supplied value into the form `decode_text` produces:
    /// text goes through the decoder, empty text means absent.
    pub(crate) fn normalize(&self, value: FieldValue) -> CodecResult<Option<FieldValue>> {
        match value {
            FieldValue::Text(text) if text.is_empty() => Ok(None),
            FieldValue::Text(text) => self.decode_text(&text).map(Some),
            other => Ok(Some(other)),
        }
    }

    /// Decode unpadded text to a value.
    pub(crate) fn decode_text(&self, text: &str) -> CodecResult<FieldValue> {
        match &self.decoder {
            Some(decode) => decode(text),
            None => Ok(FieldValue::Text(text.to_string())),
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("length", &self.length)
            .field("delimiter_before", &self.delimiter_before)
            .field("optional", &self.optional)
            .field("omit_when_absent", &self.omit_when_absent)
            .field("encoder", &self.encoder.is_some())
            .field("decoder", &self.decoder.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let field = FieldSpec::fixed("sres", 4);
        assert_eq!(field.length, Some(4));
        assert!(field.delimiter_before);
        assert!(!field.optional);
        assert!(field.encoder.is_none());

        let field = FieldSpec::variable("creator").omit_when_absent();
        assert!(!field.is_fixed());
        assert!(field.optional);
        assert!(field.omit_when_absent);
    }

    #[test]
    fn test_custom_functions() {
        let field = FieldSpec::variable("band")
            .encoder(|v| Ok(v.to_string().to_uppercase()))
            .decoder(|s| Ok(FieldValue::Text(s.to_lowercase())));

        assert_eq!(field.encode_value(&"vv".into()).unwrap(), "VV");
        assert_eq!(field.decode_text("VV").unwrap(), FieldValue::from("vv"));
    }

    #[test]
    fn test_without_codec_uses_display_form() {
        let field = FieldSpec::fixed("orbit", 3);
        assert_eq!(field.encode_value(&FieldValue::Integer(42)).unwrap(), "42");
        assert_eq!(field.decode_text("042").unwrap(), FieldValue::from("042"));
    }
}
