//! vetter-engine: recursive, declarative data validation.
//!
//! Given a [`Schema`] and a `serde_json::Value`, the engine produces a
//! [`ValidationResult`] tree describing every violation. It never fails on bad
//! data; all problems are reported as data.
//!
//! - **Normalizer** ([`normalize`]): completes a schema level's message table
//!   from the engine defaults and the level's own overrides
//! - **Engine** ([`Engine`], [`validate`]): walks the schema, checking types,
//!   required-ness and string constraints, and validates object fields
//!   concurrently
//! - **Config** ([`EngineConfig`]): default messages and the policy for
//!   failing custom validators, loadable from TOML
//!
//! # Example
//!
//! ```ignore
//! use serde_json::json;
//! use vetter_engine::{validate, Schema};
//!
//! let schema = Schema::object()
//!     .field("name", Schema::string().required())
//!     .field("nickname", Schema::string().max_length(10));
//!
//! let result = validate(Some(&schema), &json!({"name": ""})).await;
//! assert!(!result.is_valid());
//! ```

pub mod config;
pub mod engine;
pub mod normalize;

pub use config::{ConfigError, EngineConfig, FailurePolicy};
pub use engine::{validate, Engine};
pub use normalize::{normalize, Normalized};

pub use vetter_types::{
    async_validator_fn, validator_fn, CustomValidator, DataType, ErrorDescriptor, ErrorKind,
    MessageTable, Schema, SchemaError, SchemaType, SharedValidator, ValidationResult,
    ValidatorError,
};
