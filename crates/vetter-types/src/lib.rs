//! vetter-types: pure data types for vetter.
//!
//! This crate holds everything that describes a validation without running it:
//!
//! - **Schema**: the recursive declarative description of expected data
//! - **MessageTable**: human-readable messages for the built-in error kinds
//! - **ErrorKind / ErrorDescriptor**: what failed and why
//! - **ValidationResult**: the error tree mirroring the schema's shape
//! - **DataType**: runtime classification of candidate data
//! - **CustomValidator**: the seam for caller-supplied checks
//!
//! The engine that walks schemas lives in `vetter-engine`.

mod error;
mod messages;
mod result;
mod schema;
mod validator;
mod value;

pub use error::{ErrorDescriptor, ErrorKind, SchemaError};
pub use messages::MessageTable;
pub use result::ValidationResult;
pub use schema::{Schema, SchemaType};
pub use validator::{
    async_validator_fn, validator_fn, AsyncFnValidator, CustomValidator, FnValidator,
    SharedValidator, ValidatorError,
};
pub use value::{field_of, is_truthy, length_of, DataType};
