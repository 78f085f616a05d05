//! Schema normalization: completing the message table.

use std::ops::Deref;

use vetter_types::{ErrorDescriptor, ErrorKind, MessageTable, Schema};

/// A schema level paired with its effective message table.
///
/// Borrows everything but the messages from the caller's schema; the caller's
/// schema is never modified.
#[derive(Debug)]
pub struct Normalized<'a> {
    schema: &'a Schema,
    messages: MessageTable,
}

/// Merge `defaults` with the schema's own `messages` overrides.
pub fn normalize<'a>(schema: &'a Schema, defaults: &MessageTable) -> Normalized<'a> {
    let messages = match &schema.messages {
        Some(overrides) => defaults.with_overrides(overrides),
        None => defaults.clone(),
    };
    Normalized { schema, messages }
}

impl<'a> Normalized<'a> {
    /// The caller's schema, untouched.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    /// A descriptor for a built-in kind with its effective message.
    pub fn error(&self, kind: ErrorKind) -> ErrorDescriptor {
        let message = self.messages.get(&kind).map(str::to_string);
        ErrorDescriptor {
            error: kind,
            message,
        }
    }

    /// An owned copy of the schema whose `messages` lists every built-in kind.
    pub fn into_schema(self) -> Schema {
        Schema {
            messages: Some(self.messages.to_map()),
            ..self.schema.clone()
        }
    }
}

impl Deref for Normalized<'_> {
    type Target = Schema;

    fn deref(&self) -> &Schema {
        self.schema
    }
}
