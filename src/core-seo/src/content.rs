//! Content store access.
//!
//! The content query engine is an external collaborator; the core only needs
//! the [`ContentSource`] seam: a schema/channel/language scoped query that
//! yields records with fixed system fields plus typed named-field access.
//! [`InMemoryContentSource`] is the shipped implementation, used by tests and
//! by the bundled server binary; a production CMS adapter plugs in at the same
//! seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::{DiscoveryError, Result};

/// Fixed system fields every content record carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemFields {
    pub id: i32,
    pub global_id: Uuid,
    pub name: String,
    pub order: i32,
    pub tree_path: String,
    pub url_path: String,
    pub language_id: i32,
    pub version_status: String,
    pub content_type_id: i32,
    pub is_secured: bool,
}

/// A typed value held in a record's named-field map.
///
/// Serde is untagged so fixture JSON reads naturally: booleans become flags,
/// strings become text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

/// One record returned by a content query: fixed system fields plus the
/// schema's named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub system: SystemFields,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

impl ContentRecord {
    /// Typed string access to a named field. None when the field is absent or
    /// holds a non-string value.
    pub fn try_get_str(&self, name: &str) -> Option<&str> {
        match self.fields.get(name)? {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    /// Typed boolean access to a named field. None when the field is absent or
    /// holds a non-boolean value.
    pub fn try_get_bool(&self, name: &str) -> Option<bool> {
        match self.fields.get(name)? {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// Executes content queries against a structured content store.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns every record matching the schema, channel, and language, in the
    /// store's natural order.
    async fn query(&self, schema: &str, channel: &str, language: &str) -> Result<Vec<ContentRecord>>;
}

/// A [`ContentRecord`] held by the in-memory source, carrying the
/// query-scoping attributes the real content engine resolves server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub schema: String,
    pub channel: String,
    pub language: String,
    pub content_type: String,
    #[serde(flatten)]
    pub record: ContentRecord,
}

/// In-memory content source backed by a fixed record set.
///
/// Query results preserve insertion order, so discovery output order is stable
/// for a given record set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentSource {
    records: Vec<StoredRecord>,
}

impl InMemoryContentSource {
    pub fn new(records: Vec<StoredRecord>) -> Self {
        Self { records }
    }

    /// Loads a record set from a JSON array of [`StoredRecord`].
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<StoredRecord> = serde_json::from_str(json)
            .map_err(|e| DiscoveryError::Query(format!("invalid content record set: {}", e)))?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn query(&self, schema: &str, channel: &str, language: &str) -> Result<Vec<ContentRecord>> {
        let matches: Vec<ContentRecord> = self
            .records
            .iter()
            .filter(|r| r.schema == schema && r.channel == channel && r.language == language)
            .map(|r| r.record.clone())
            .collect();
        tracing::debug!(
            schema = %schema,
            channel = %channel,
            language = %language,
            matched = matches.len(),
            "content query"
        );
        Ok(matches)
    }
}
