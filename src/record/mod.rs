//! Record module
//!
//! A [`Record`] is one materialized item of a resource. It keeps every field
//! of the upstream payload as-is; nothing is validated at construction.
//!
//! Typed views ([`Person`], [`Film`]) can be parsed out of a record when the
//! caller wants named fields instead of raw JSON lookups.

mod models;

pub use models::{Film, Person};

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, ResourceKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;

/// Read-only view over a decoded item payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    kind: ResourceKind,
    fields: JsonObject,
}

impl Record {
    /// Wrap a payload. Always succeeds.
    pub fn new(kind: ResourceKind, fields: JsonObject) -> Self {
        Self { kind, fields }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Value of a payload field
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.fields.get(field)
    }

    /// Value of a payload field, if it is a string
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(JsonValue::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Names of all payload fields
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &JsonObject {
        &self.fields
    }

    pub fn into_fields(self) -> JsonObject {
        self.fields
    }

    /// Human-readable label (`name` for people, `title` for films)
    ///
    /// Strings render as-is, any other value as JSON. Fails only when the
    /// field is absent.
    pub fn label(&self) -> Result<Cow<'_, str>> {
        let field = self.kind.label_field();
        match self.get(field) {
            Some(JsonValue::String(s)) => Ok(Cow::Borrowed(s)),
            Some(other) => Ok(Cow::Owned(other.to_string())),
            None => Err(Error::missing_field(self.kind, field)),
        }
    }

    /// Label prefixed with the kind, e.g. `Person: Luke Skywalker`
    pub fn display_label(&self) -> Result<String> {
        Ok(format!("{}: {}", self.kind, self.label()?))
    }

    /// Deserialize the payload into a typed view
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(JsonValue::Object(self.fields.clone()))?)
    }

    pub(crate) fn expect_kind(&self, expected: ResourceKind) -> Result<()> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(Error::KindMismatch {
                expected,
                actual: self.kind,
            })
        }
    }
}
