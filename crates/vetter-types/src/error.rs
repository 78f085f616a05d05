//! Error kinds and descriptors.
//!
//! Validation failures are data, not Rust errors: every violation becomes an
//! [`ErrorDescriptor`] in the result tree. The only Rust-level error here is
//! [`SchemaError`], raised while *building* a schema from text.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which constraint failed.
///
/// The built-in kinds form a closed set; custom validators may report any
/// other tag through [`ErrorKind::Custom`]. Serialized as its camelCase name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorKind {
    /// Present data whose runtime type differs from the declared type.
    InvalidType,
    /// Required value missing or falsy.
    IsRequired,
    /// String shorter than `minLength`.
    MinLength,
    /// String longer than `maxLength`.
    MaxLength,
    /// String not matching `regex`.
    Regex,
    /// A custom validator returned an error instead of a verdict.
    ValidatorFailure,
    /// Caller-defined kind reported by a custom validator.
    Custom(String),
}

impl ErrorKind {
    /// Every kind that has an entry in the message table.
    pub const BUILTIN: [ErrorKind; 6] = [
        ErrorKind::InvalidType,
        ErrorKind::IsRequired,
        ErrorKind::MinLength,
        ErrorKind::MaxLength,
        ErrorKind::Regex,
        ErrorKind::ValidatorFailure,
    ];

    /// The wire name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::InvalidType => "invalidType",
            ErrorKind::IsRequired => "isRequired",
            ErrorKind::MinLength => "minLength",
            ErrorKind::MaxLength => "maxLength",
            ErrorKind::Regex => "regex",
            ErrorKind::ValidatorFailure => "validatorFailure",
            ErrorKind::Custom(name) => name,
        }
    }

    /// True for kinds the engine produces itself.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, ErrorKind::Custom(_))
    }
}

impl From<&str> for ErrorKind {
    fn from(name: &str) -> Self {
        match name {
            "invalidType" => ErrorKind::InvalidType,
            "isRequired" => ErrorKind::IsRequired,
            "minLength" => ErrorKind::MinLength,
            "maxLength" => ErrorKind::MaxLength,
            "regex" => ErrorKind::Regex,
            "validatorFailure" => ErrorKind::ValidatorFailure,
            other => ErrorKind::Custom(other.to_string()),
        }
    }
}

impl From<String> for ErrorKind {
    fn from(name: String) -> Self {
        match ErrorKind::from(name.as_str()) {
            ErrorKind::Custom(_) => ErrorKind::Custom(name),
            builtin => builtin,
        }
    }
}

impl From<ErrorKind> for String {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Custom(name) => name,
            builtin => builtin.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded violation: `{error, message}`.
///
/// Built-in violations always carry a message. Descriptors returned by custom
/// validators are stored verbatim, so their message may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub error: ErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorDescriptor {
    /// Create a descriptor with a message.
    pub fn new(error: impl Into<ErrorKind>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }

    /// Create a descriptor carrying only its kind.
    pub fn kind(error: impl Into<ErrorKind>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} ({})", self.error, message),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Error building a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A `regex` constraint did not compile.
    #[error("invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The schema document could not be parsed.
    #[error("schema parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
