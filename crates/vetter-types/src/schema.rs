//! Schema — the declarative description of expected data.
//!
//! A schema is immutable from the engine's point of view. It can be built in
//! code with the builder methods, or parsed from JSON:
//!
//! ```json
//! {
//!   "type": "object",
//!   "fields": {
//!     "name": { "type": "string", "isRequired": true, "maxLength": 40 },
//!     "zip":  { "type": "string", "regex": "^[0-9]{5}$" }
//!   }
//! }
//! ```
//!
//! Custom validators cannot be expressed in JSON; attach them in code with
//! [`Schema::validation`].

use std::fmt;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, SchemaError};
use crate::validator::{CustomValidator, SharedValidator};
use crate::value::DataType;

/// Declared type of a schema level.
///
/// Unrecognized type names are kept verbatim in `Unknown`; they still take
/// part in the type check (by name) but get no type-specific checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Unknown(String),
}

impl SchemaType {
    pub fn as_str(&self) -> &str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Unknown(name) => name,
        }
    }

    /// Whether data of runtime type `data` satisfies this declared type.
    pub fn accepts(&self, data: DataType) -> bool {
        self.as_str() == data.as_str()
    }
}

impl From<String> for SchemaType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "object" => SchemaType::Object,
            "array" => SchemaType::Array,
            "string" => SchemaType::String,
            "number" => SchemaType::Number,
            _ => SchemaType::Unknown(name),
        }
    }
}

impl From<&str> for SchemaType {
    fn from(name: &str) -> Self {
        SchemaType::from(name.to_string())
    }
}

impl From<SchemaType> for String {
    fn from(schema_type: SchemaType) -> Self {
        match schema_type {
            SchemaType::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One level of a schema, and recursively its fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Declared type. `None` (or an empty name) makes the level vacuous.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_required: bool,
    /// Nested schemas, in declaration order. Objects only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IndexMap<String, Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Pattern the whole string value is tested against. Serialized as its
    /// pattern string.
    #[serde(default, with = "pattern", skip_serializing_if = "Option::is_none")]
    pub regex: Option<Regex>,
    #[serde(skip)]
    pub validation: Option<SharedValidator>,
    /// Per-kind message overrides, keyed by error-kind name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<IndexMap<String, String>>,
}

impl Schema {
    /// A schema of the given type with no constraints.
    pub fn of_type(schema_type: impl Into<SchemaType>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    pub fn object() -> Self {
        Self::of_type(SchemaType::Object)
    }

    pub fn array() -> Self {
        Self::of_type(SchemaType::Array)
    }

    pub fn string() -> Self {
        Self::of_type(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::of_type(SchemaType::Number)
    }

    /// Parse a schema from JSON text, compiling any `regex` patterns.
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(text)?)
    }

    /// True when this level has no usable type and validates nothing.
    pub fn is_vacuous(&self) -> bool {
        self.schema_type
            .as_ref()
            .is_none_or(|schema_type| schema_type.as_str().is_empty())
    }

    /// Mark the value as required.
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Declare a nested field. Fields keep the order they are added in.
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn regex(mut self, regex: Regex) -> Self {
        self.regex = Some(regex);
        self
    }

    /// Compile `pattern` and use it as the `regex` constraint.
    pub fn pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.regex(regex))
    }

    /// Attach a custom validator.
    pub fn validation(mut self, validator: impl CustomValidator + 'static) -> Self {
        self.validation = Some(SharedValidator::new(validator));
        self
    }

    /// Attach an already-shared custom validator.
    pub fn shared_validation(mut self, validator: SharedValidator) -> Self {
        self.validation = Some(validator);
        self
    }

    /// Override the message for one error kind at this level.
    pub fn message(mut self, kind: impl Into<ErrorKind>, message: impl Into<String>) -> Self {
        self.messages
            .get_or_insert_with(IndexMap::new)
            .insert(kind.into().as_str().to_string(), message.into());
        self
    }
}

mod pattern {
    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(regex: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error> {
        match regex {
            Some(regex) => serializer.serialize_some(regex.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Regex>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|pattern| Regex::new(&pattern).map_err(serde::de::Error::custom))
            .transpose()
    }
}
