//! Error types for geofilename.

use thiserror::Error;

/// Main error type for the library and CLI.
#[derive(Error, Debug)]
pub enum Error {
    // Encoding errors
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Value for field '{field}' is {length} characters long (maximum {max})")]
    FieldLength {
        field: String,
        length: usize,
        max: usize,
    },

    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unknown field or property: {0}")]
    UnknownField(String),

    // Decoding errors
    #[error("Cannot parse '{input}': {message}")]
    Parse { input: String, message: String },

    // Convention definition errors
    #[error("Invalid naming convention: {0}")]
    Convention(String),

    #[error("Unknown naming convention: {0}")]
    UnknownConvention(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Build a parse error for the given input.
    pub fn parse(input: &str, message: impl Into<String>) -> Self {
        Error::Parse {
            input: input.to_string(),
            message: message.into(),
        }
    }

    /// Whether the error was raised while decoding a filename.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const PARSE_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const ENCODE_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_FILES_FAILED: i32 = 6;
}
