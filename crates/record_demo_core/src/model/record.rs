//! Record domain model.
//!
//! # Responsibility
//! - Define the composite record mutated by the demonstration.
//! - Own the lazy-allocation helper for the `meta` mapping.
//!
//! # Invariants
//! - `id` is fixed at construction; no setter exists.
//! - `meta == None` reads as an empty mapping, never as a fault.
//! - `meta` is private. Writes allocate it through `ensure_meta()`; only
//!   `from_parts` can supply an already-allocated mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Integer identifier of a record.
pub type RecordId = i64;

/// Key/value metadata attached to a record.
pub type MetaMap = BTreeMap<String, String>;

/// Composite record with scalar and container fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    /// Display name, replaced wholesale by rename operations.
    pub name: String,
    /// Ordered tags, grown by appending.
    pub tags: Vec<String>,
    /// Lazily allocated metadata. Serialized as `null` while absent.
    meta: Option<MetaMap>,
}

impl Record {
    /// Creates a record with empty tags and absent meta.
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tags: Vec::new(),
            meta: None,
        }
    }

    /// Rebuilds a record from existing field values, e.g. a deep snapshot.
    pub fn from_parts(
        id: RecordId,
        name: impl Into<String>,
        tags: Vec<String>,
        meta: Option<MetaMap>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tags,
            meta,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the metadata mapping, allocating an empty one if absent.
    pub fn ensure_meta(&mut self) -> &mut MetaMap {
        self.meta.get_or_insert_with(MetaMap::new)
    }

    /// Read-only view of the mapping; `None` while absent.
    pub fn meta(&self) -> Option<&MetaMap> {
        self.meta.as_ref()
    }

    /// Whether the metadata mapping has been allocated.
    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    /// Number of metadata entries; zero when the mapping is absent.
    pub fn meta_len(&self) -> usize {
        self.meta.as_ref().map_or(0, BTreeMap::len)
    }

    /// Looks up one metadata value; absent mapping yields `None`.
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.get(key))
            .map(String::as_str)
    }

    /// Iterates metadata entries in key order; absent mapping yields nothing.
    pub fn meta_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.meta
            .iter()
            .flat_map(|meta| meta.iter())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Renders tags as `[a b c]`.
    pub fn tags_display(&self) -> String {
        format!("[{}]", self.tags.join(" "))
    }

    /// Renders meta as `{k: v, ...}`; absent meta renders as `{}`.
    pub fn meta_display(&self) -> String {
        let entries = self
            .meta_entries()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>();
        format!("{{{}}}", entries.join(", "))
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{id:{} name:{} tags:{} meta:{}}}",
            self.id,
            self.name,
            self.tags_display(),
            self.meta_display()
        )
    }
}
