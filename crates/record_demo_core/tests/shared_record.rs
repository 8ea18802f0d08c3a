use record_demo_core::{
    add_meta_by_copy, add_meta_by_reference, add_tag_by_copy, add_tag_by_reference,
    rename_by_copy, rename_by_reference, SharedRecord,
};

#[test]
fn copy_insert_before_allocation_does_not_leak() {
    let mut record = SharedRecord::new(1, "Alice");

    add_meta_by_copy(record.clone(), "role", "admin");
    assert!(record.meta.is_none());

    add_meta_by_reference(&mut record, "department", "engineering");
    assert_eq!(record.meta_len(), 1);
    assert_eq!(record.meta_value("role"), None);
}

#[test]
fn copy_insert_after_allocation_leaks_into_original() {
    let mut record = SharedRecord::new(1, "Alice");
    add_meta_by_reference(&mut record, "department", "engineering");

    add_meta_by_copy(record.clone(), "role", "admin");

    assert_eq!(record.meta_len(), 2);
    assert_eq!(record.meta_value("role").as_deref(), Some("admin"));
}

#[test]
fn scalar_and_tag_copies_never_leak() {
    let mut record = SharedRecord::new(1, "Alice");
    add_tag_by_reference(&mut record, "programmer");

    rename_by_copy(record.clone(), "Bob");
    add_tag_by_copy(record.clone(), "golang");
    assert_eq!(record.name, "Alice");
    assert_eq!(record.tags, vec!["programmer".to_string()]);

    rename_by_reference(&mut record, "Charlie");
    assert_eq!(record.name, "Charlie");
    assert_eq!(record.id(), 1);
}

#[test]
fn detach_breaks_sharing() {
    let mut record = SharedRecord::new(1, "Alice");
    add_meta_by_reference(&mut record, "department", "engineering");

    let mut snapshot = record.detach();
    snapshot
        .ensure_meta()
        .insert("role".to_string(), "admin".to_string());

    assert_eq!(record.meta_len(), 1);
    assert_eq!(snapshot.meta_len(), 2);
    assert_eq!(snapshot.id(), record.id());
}

#[test]
fn detach_keeps_absent_meta_absent() {
    let mut record = SharedRecord::new(1, "Alice");
    add_tag_by_reference(&mut record, "programmer");

    let snapshot = record.detach();

    assert!(!snapshot.has_meta());
    assert_eq!(snapshot.meta(), None);
    assert_eq!(snapshot.tags, vec!["programmer".to_string()]);
}
