//! ValidationResult — the error tree produced by a validation.
//!
//! The tree mirrors the schema: each level holds the errors found *at that
//! level* and, for object schemas, one child result per declared field.
//! Errors never bubble up; a parent's `errors` says nothing about its fields.
//!
//! A valid leaf serializes to exactly `{}`:
//!
//! ```json
//! { "fields": { "name": { "errors": [{ "error": "isRequired", "message": "The field is required" }] },
//!               "nickname": {} } }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ErrorDescriptor;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Errors recorded at this level, in the order the checks ran.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDescriptor>,
    /// Per-field results, in schema declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IndexMap<String, ValidationResult>>,
}

impl ValidationResult {
    /// The empty result `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when this level carries neither errors nor fields.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.fields.is_none()
    }

    /// True when no level of the tree holds an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
            && self
                .fields
                .as_ref()
                .is_none_or(|fields| fields.values().all(ValidationResult::is_valid))
    }

    /// Total number of errors across the whole tree.
    pub fn error_count(&self) -> usize {
        self.errors.len()
            + self
                .fields
                .as_ref()
                .map_or(0, |fields| fields.values().map(ValidationResult::error_count).sum())
    }

    /// Errors at this level only.
    pub fn errors(&self) -> &[ErrorDescriptor] {
        &self.errors
    }

    /// Child result for a field, if this level has fields.
    pub fn field(&self, name: &str) -> Option<&ValidationResult> {
        self.fields.as_ref().and_then(|fields| fields.get(name))
    }

    pub fn push(&mut self, error: ErrorDescriptor) {
        self.errors.push(error);
    }

    /// Flatten the tree into `dotted.path -> errors`, keeping only levels that
    /// have errors. The root level's path is the empty string.
    pub fn flatten(&self) -> IndexMap<String, Vec<ErrorDescriptor>> {
        let mut out = IndexMap::new();
        self.flatten_into(String::new(), &mut out);
        out
    }

    fn flatten_into(&self, path: String, out: &mut IndexMap<String, Vec<ErrorDescriptor>>) {
        if !self.errors.is_empty() {
            out.insert(path.clone(), self.errors.clone());
        }
        if let Some(fields) = &self.fields {
            for (name, child) in fields {
                let child_path = if path.is_empty() {
                    name.clone()
                } else {
                    format!("{path}.{name}")
                };
                child.flatten_into(child_path, out);
            }
        }
    }
}
