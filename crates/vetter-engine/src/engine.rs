//! The validation engine.
//!
//! Each schema level runs, in order: vacuous check, normalization, runtime
//! classification, type check, required check, then the type-specific
//! checks. Object levels fan out over their declared fields concurrently and
//! merge the children back in declaration order.

use futures::future::{join_all, BoxFuture, FutureExt};
use indexmap::IndexMap;
use serde_json::Value;
use vetter_types::{
    field_of, is_truthy, length_of, DataType, ErrorKind, Schema, SchemaType, ValidationResult,
};

use crate::config::{EngineConfig, FailurePolicy};
use crate::normalize::{normalize, Normalized};

/// Validates data against schemas.
///
/// Holds no per-call state: one engine can serve any number of concurrent
/// validations, e.g. behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate `data` against `schema`.
    ///
    /// Never fails: every violation is reported in the returned tree. An
    /// absent schema, or one without a type, yields the empty result.
    pub async fn validate(&self, schema: Option<&Schema>, data: &Value) -> ValidationResult {
        let result = self.validate_level(schema, data, String::new()).await;
        tracing::debug!(
            errors = result.error_count(),
            valid = result.is_valid(),
            "validation complete"
        );
        result
    }

    fn validate_level<'a>(
        &'a self,
        schema: Option<&'a Schema>,
        data: &'a Value,
        path: String,
    ) -> BoxFuture<'a, ValidationResult> {
        async move {
            let mut result = ValidationResult::new();
            let Some(schema) = schema.filter(|schema| !schema.is_vacuous()) else {
                return result;
            };
            let Some(schema_type) = schema.schema_type.as_ref() else {
                return result;
            };

            let schema = normalize(schema, &self.config.messages);
            let data_type = DataType::of(data);
            let present = is_truthy(data);
            tracing::trace!(path = %path, %schema_type, %data_type, present, "validating level");

            if present && !schema_type.accepts(data_type) {
                result.push(schema.error(ErrorKind::InvalidType));
            }
            if schema.is_required && !present {
                result.push(schema.error(ErrorKind::IsRequired));
            }

            match schema_type {
                SchemaType::Object if !data.is_null() => {
                    result.fields = self.validate_fields(&schema, data, &path).await;
                }
                SchemaType::String => {
                    self.check_string(&schema, data, &path, &mut result).await;
                }
                SchemaType::Object | SchemaType::Array | SchemaType::Number | SchemaType::Unknown(_) => {}
            }

            result
        }
        .boxed()
    }

    /// Validate every declared field at once and collect the results in
    /// declaration order. `None` when the schema declares no fields.
    async fn validate_fields(
        &self,
        schema: &Normalized<'_>,
        data: &Value,
        path: &str,
    ) -> Option<IndexMap<String, ValidationResult>> {
        let fields = schema.fields.as_ref().filter(|fields| !fields.is_empty())?;

        let pending = fields.iter().map(|(name, child)| {
            let child_path = if path.is_empty() {
                name.clone()
            } else {
                format!("{path}.{name}")
            };
            self.validate_level(Some(child), field_of(data, name), child_path)
        });
        let results = join_all(pending).await;

        Some(fields.keys().cloned().zip(results).collect())
    }

    /// The string-only checks. Each runs regardless of the others.
    async fn check_string(
        &self,
        schema: &Normalized<'_>,
        data: &Value,
        path: &str,
        result: &mut ValidationResult,
    ) {
        let length = length_of(data);

        // minLength never implies required: empty values are skipped.
        if let (Some(min), Some(len)) = (schema.min_length, length) {
            if is_truthy(data) && len > 0 && len < min {
                result.push(schema.error(ErrorKind::MinLength));
            }
        }

        // A zero bound is still a bound.
        if let (Some(max), Some(len)) = (schema.max_length, length) {
            if len > max {
                result.push(schema.error(ErrorKind::MaxLength));
            }
        }

        if let Some(validator) = &schema.validation {
            match validator.check(data).await {
                Ok(Some(descriptor)) => result.push(descriptor),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "custom validator failed");
                    if self.config.on_validator_failure == FailurePolicy::Report {
                        result.push(schema.error(ErrorKind::ValidatorFailure));
                    }
                }
            }
        }

        if let (Some(regex), Value::String(text)) = (&schema.regex, data) {
            if !regex.is_match(text) {
                result.push(schema.error(ErrorKind::Regex));
            }
        }
    }
}

/// Validate `data` against `schema` with the default configuration.
pub async fn validate(schema: Option<&Schema>, data: &Value) -> ValidationResult {
    Engine::default().validate(schema, data).await
}
