//! Custom validators — caller-supplied checks for string fields.
//!
//! A custom validator is always awaited. Synchronous logic is wrapped with
//! [`validator_fn`] and simply returns an already-resolved future, so there is
//! no runtime sniffing of "is this a promise".
//!
//! ```ignore
//! use vetter_types::{validator_fn, ErrorDescriptor, Schema};
//!
//! let not_abc = validator_fn(|value| {
//!     (value == "abc").then(|| ErrorDescriptor::new("customError", "Custom error"))
//! });
//! let schema = Schema::string().validation(not_abc);
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::error::ErrorDescriptor;

/// Failure of a custom validator to reach a verdict.
///
/// This is distinct from the validator *rejecting* the value (which is
/// `Ok(Some(descriptor))`). The engine records it as a `validatorFailure`
/// entry instead of aborting the whole validation.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The validator gave up with a reason.
    #[error("validator failed: {reason}")]
    Failed { reason: String },

    /// Any other error bubbled up from the validator's own dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ValidatorError {
    pub fn failed(reason: impl Into<String>) -> Self {
        ValidatorError::Failed {
            reason: reason.into(),
        }
    }
}

/// A domain-specific check run on a string field's value.
///
/// Returns `Ok(None)` when the value is acceptable, `Ok(Some(descriptor))` to
/// report a violation (stored verbatim), or `Err` when the check itself could
/// not run.
#[async_trait]
pub trait CustomValidator: Send + Sync {
    async fn check(&self, value: &Value) -> Result<Option<ErrorDescriptor>, ValidatorError>;
}

/// A shareable, cloneable handle to a custom validator.
#[derive(Clone)]
pub struct SharedValidator(Arc<dyn CustomValidator>);

impl SharedValidator {
    pub fn new(validator: impl CustomValidator + 'static) -> Self {
        Self(Arc::new(validator))
    }

    pub fn from_arc(validator: Arc<dyn CustomValidator>) -> Self {
        Self(validator)
    }

    pub async fn check(&self, value: &Value) -> Result<Option<ErrorDescriptor>, ValidatorError> {
        self.0.check(value).await
    }
}

impl fmt::Debug for SharedValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedValidator(..)")
    }
}

/// Adapter for a synchronous closure. See [`validator_fn`].
pub struct FnValidator<F>(F);

#[async_trait]
impl<F> CustomValidator for FnValidator<F>
where
    F: Fn(&Value) -> Option<ErrorDescriptor> + Send + Sync,
{
    async fn check(&self, value: &Value) -> Result<Option<ErrorDescriptor>, ValidatorError> {
        Ok((self.0)(value))
    }
}

/// Wrap a synchronous closure as a [`CustomValidator`].
pub fn validator_fn<F>(f: F) -> FnValidator<F>
where
    F: Fn(&Value) -> Option<ErrorDescriptor> + Send + Sync,
{
    FnValidator(f)
}

/// Adapter for a closure returning a future. See [`async_validator_fn`].
pub struct AsyncFnValidator<F>(F);

#[async_trait]
impl<F, Fut> CustomValidator for AsyncFnValidator<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = Option<ErrorDescriptor>> + Send + 'static,
{
    async fn check(&self, value: &Value) -> Result<Option<ErrorDescriptor>, ValidatorError> {
        Ok((self.0)(value.clone()).await)
    }
}

/// Wrap an async closure as a [`CustomValidator`].
///
/// The closure receives an owned copy of the value so the returned future
/// does not borrow from the data being validated.
pub fn async_validator_fn<F, Fut>(f: F) -> AsyncFnValidator<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = Option<ErrorDescriptor>> + Send + 'static,
{
    AsyncFnValidator(f)
}
