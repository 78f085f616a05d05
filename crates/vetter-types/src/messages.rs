//! Message table for the built-in error kinds.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// Human-readable message for every built-in [`ErrorKind`].
///
/// [`MessageTable::DEFAULT`] is the stock table. Engines hold their own copy
/// (so a deployment can reword the defaults), and each schema level may
/// override individual entries through its `messages` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageTable {
    pub invalid_type: Cow<'static, str>,
    pub is_required: Cow<'static, str>,
    pub min_length: Cow<'static, str>,
    pub max_length: Cow<'static, str>,
    pub regex: Cow<'static, str>,
    pub validator_failure: Cow<'static, str>,
}

impl MessageTable {
    /// The stock messages.
    pub const DEFAULT: MessageTable = MessageTable {
        invalid_type: Cow::Borrowed("Invalid data type"),
        is_required: Cow::Borrowed("The field is required"),
        min_length: Cow::Borrowed("This field must be larger"),
        max_length: Cow::Borrowed("This field must be shorter"),
        regex: Cow::Borrowed("The field value is invalid"),
        validator_failure: Cow::Borrowed("The field could not be validated"),
    };

    /// Message for a built-in kind. `None` for custom kinds.
    pub fn get(&self, kind: &ErrorKind) -> Option<&str> {
        let message: &str = match kind {
            ErrorKind::InvalidType => &self.invalid_type,
            ErrorKind::IsRequired => &self.is_required,
            ErrorKind::MinLength => &self.min_length,
            ErrorKind::MaxLength => &self.max_length,
            ErrorKind::Regex => &self.regex,
            ErrorKind::ValidatorFailure => &self.validator_failure,
            ErrorKind::Custom(_) => return None,
        };
        Some(message)
    }

    fn slot_mut(&mut self, kind: &ErrorKind) -> Option<&mut Cow<'static, str>> {
        match kind {
            ErrorKind::InvalidType => Some(&mut self.invalid_type),
            ErrorKind::IsRequired => Some(&mut self.is_required),
            ErrorKind::MinLength => Some(&mut self.min_length),
            ErrorKind::MaxLength => Some(&mut self.max_length),
            ErrorKind::Regex => Some(&mut self.regex),
            ErrorKind::ValidatorFailure => Some(&mut self.validator_failure),
            ErrorKind::Custom(_) => None,
        }
    }

    /// Return a new table with `overrides` applied on top of `self`.
    ///
    /// Keys are error-kind names (`invalidType`, ...). Empty override strings
    /// count as absent, and keys naming no built-in kind are ignored.
    pub fn with_overrides(&self, overrides: &IndexMap<String, String>) -> MessageTable {
        let mut table = self.clone();
        for (name, message) in overrides {
            if message.is_empty() {
                continue;
            }
            if let Some(slot) = table.slot_mut(&ErrorKind::from(name.as_str())) {
                *slot = Cow::Owned(message.clone());
            }
        }
        table
    }

    /// The table as a `kind name -> message` map, in [`ErrorKind::BUILTIN`] order.
    pub fn to_map(&self) -> IndexMap<String, String> {
        ErrorKind::BUILTIN
            .iter()
            .filter_map(|kind| {
                self.get(kind)
                    .map(|message| (kind.as_str().to_string(), message.to_string()))
            })
            .collect()
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
