//! JSON-shaped records
//!
//! A record is an arbitrary JSON object carrying one required attribute,
//! `"string"`, the searchable text. Every other attribute is opaque
//! payload that travels with the record.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the required searchable-text attribute
pub const TEXT_ATTRIBUTE: &str = "string";

/// A searchable record: opaque JSON payload plus the required `"string"`
/// text attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Record carrying only the text attribute
    pub fn new(text: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(TEXT_ATTRIBUTE.to_owned(), Value::String(text.into()));
        Self { fields }
    }

    /// Add or replace a payload attribute
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The searchable text, if the record carries a string `"string"`
    /// attribute
    pub fn text(&self) -> Option<&str> {
        self.fields.get(TEXT_ATTRIBUTE).and_then(Value::as_str)
    }

    /// A payload attribute by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All attributes of this record
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Canonical equality used by record-based removal: top-level
    /// attributes are compared in sorted key order, values by structural
    /// equality.
    ///
    /// Nested payloads compare structurally as JSON values; callers who
    /// need a different notion of deep equality should remove through a
    /// filter instead.
    pub fn canonical_eq(&self, other: &Record) -> bool {
        if self.fields.len() != other.fields.len() {
            return false;
        }
        self.fields
            .iter()
            .all(|(key, value)| other.fields.get(key) == Some(value))
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for Record {
    type Error = anyhow::Error;

    /// Accepts any JSON object. The `"string"` attribute is validated at
    /// model build time, not here.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => bail!("record must be a JSON object, got {other}"),
        }
    }
}
