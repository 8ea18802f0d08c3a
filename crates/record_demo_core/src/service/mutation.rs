//! By-copy and by-reference mutation operations.
//!
//! # Responsibility
//! - Provide the six demonstrated mutations over any record shape.
//! - Keep the parameter-passing mode visible in every signature.
//!
//! # Invariants
//! - `*_by_copy` takes the record by value; the caller duplicates it with
//!   `clone()` before the call and the duplicate is dropped on return.
//! - `*_by_reference` takes `&mut` and mutates the caller's record.
//! - Metadata inserts always go through the record's ensure-initialized step.

use crate::model::record::Record;
use crate::model::shared::SharedRecord;
use log::debug;

/// Field-level write access shared by the record shapes.
pub trait MutableRecord {
    fn set_name(&mut self, name: &str);
    fn push_tag(&mut self, tag: &str);
    /// Allocates the mapping if absent, then inserts `key -> value`.
    fn insert_meta(&mut self, key: &str, value: &str);
}

impl MutableRecord for Record {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn push_tag(&mut self, tag: &str) {
        self.tags.push(tag.to_string());
    }

    fn insert_meta(&mut self, key: &str, value: &str) {
        self.ensure_meta()
            .insert(key.to_string(), value.to_string());
    }
}

impl MutableRecord for SharedRecord {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn push_tag(&mut self, tag: &str) {
        self.tags.push(tag.to_string());
    }

    fn insert_meta(&mut self, key: &str, value: &str) {
        self.ensure_meta()
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Renames a duplicate. The caller's record is untouched.
pub fn rename_by_copy<R: MutableRecord>(mut record: R, name: &str) {
    debug!("event=mutation op=rename mode=copy");
    record.set_name(name);
}

/// Renames the caller's record.
pub fn rename_by_reference<R: MutableRecord>(record: &mut R, name: &str) {
    debug!("event=mutation op=rename mode=reference");
    record.set_name(name);
}

/// Appends a tag to a duplicate. The caller's tags are untouched.
pub fn add_tag_by_copy<R: MutableRecord>(mut record: R, tag: &str) {
    debug!("event=mutation op=add_tag mode=copy");
    record.push_tag(tag);
}

/// Appends a tag to the caller's record.
pub fn add_tag_by_reference<R: MutableRecord>(record: &mut R, tag: &str) {
    debug!("event=mutation op=add_tag mode=reference");
    record.push_tag(tag);
}

/// Inserts metadata into a duplicate, allocating its mapping if absent.
///
/// For `Record` the caller never observes the insert. For `SharedRecord` the
/// insert leaks when the mapping was already allocated before the clone.
pub fn add_meta_by_copy<R: MutableRecord>(mut record: R, key: &str, value: &str) {
    debug!("event=mutation op=add_meta mode=copy key={key}");
    record.insert_meta(key, value);
}

/// Inserts metadata into the caller's record, allocating the mapping in place.
pub fn add_meta_by_reference<R: MutableRecord>(record: &mut R, key: &str, value: &str) {
    debug!("event=mutation op=add_meta mode=reference key={key}");
    record.insert_meta(key, value);
}
