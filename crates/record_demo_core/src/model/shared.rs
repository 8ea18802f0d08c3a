//! Shallow record variant with shared metadata storage.
//!
//! `Clone` copies the scalar fields and the tag vector, but only bumps the
//! reference count of an allocated `meta` mapping. A by-copy insert therefore
//! leaks into the original once the mapping exists, and stays private to the
//! duplicate while the mapping is still absent.
//!
//! # Invariants
//! - Clones of a record with `meta == None` never share storage.
//! - Clones of a record with allocated `meta` always share it.

use crate::model::record::{MetaMap, Record, RecordId};
use std::cell::RefCell;
use std::rc::Rc;

/// Handle to metadata storage shared between shallow copies.
pub type SharedMeta = Rc<RefCell<MetaMap>>;

#[derive(Debug, Clone)]
pub struct SharedRecord {
    id: RecordId,
    pub name: String,
    pub tags: Vec<String>,
    pub meta: Option<SharedMeta>,
}

impl SharedRecord {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tags: Vec::new(),
            meta: None,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the shared mapping handle, allocating a fresh one if absent.
    pub fn ensure_meta(&mut self) -> &SharedMeta {
        self.meta
            .get_or_insert_with(|| Rc::new(RefCell::new(MetaMap::new())))
    }

    pub fn meta_len(&self) -> usize {
        self.meta.as_ref().map_or(0, |meta| meta.borrow().len())
    }

    pub fn meta_value(&self, key: &str) -> Option<String> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.borrow().get(key).cloned())
    }

    /// Whether `self` and `other` point at the same metadata storage.
    pub fn shares_meta_with(&self, other: &SharedRecord) -> bool {
        match (&self.meta, &other.meta) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Deep snapshot with independent containers.
    pub fn detach(&self) -> Record {
        Record::from_parts(
            self.id,
            self.name.clone(),
            self.tags.clone(),
            self.meta.as_ref().map(|meta| meta.borrow().clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SharedRecord;

    #[test]
    fn clone_before_allocation_does_not_share() {
        let original = SharedRecord::new(1, "a");
        let mut copy = original.clone();
        copy.ensure_meta();

        assert!(!copy.shares_meta_with(&original));
        assert!(original.meta.is_none());
    }

    #[test]
    fn clone_after_allocation_shares() {
        let mut original = SharedRecord::new(1, "a");
        original.ensure_meta();
        let copy = original.clone();

        assert!(copy.shares_meta_with(&original));
    }
}
