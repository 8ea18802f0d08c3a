use record_demo_core::{demo_steps, initial_record, run_demo, DemoError, Record, Step};
use std::io::{self, Write};

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_to_string() -> (Record, String) {
    let mut out = Vec::new();
    let record = run_demo(&mut out).unwrap();
    (record, String::from_utf8(out).unwrap())
}

#[test]
fn demo_sequence_is_fixed() {
    assert_eq!(
        demo_steps(),
        &[
            Step::RenameByCopy("Bob"),
            Step::RenameByReference("Charlie"),
            Step::AddTagByCopy("golang"),
            Step::AddTagByReference("programmer"),
            Step::AddMetaByCopy("role", "admin"),
            Step::AddMetaByReference("department", "engineering"),
        ]
    );
}

#[test]
fn demo_final_state_matches_reference_mutations_only() {
    let (record, _) = run_to_string();

    assert_eq!(record.id(), 1);
    assert_eq!(record.name, "Charlie");
    assert_eq!(record.tags, vec!["programmer".to_string()]);
    assert_eq!(record.meta_len(), 1);
    assert_eq!(record.meta_value("department"), Some("engineering"));
}

#[test]
fn every_copy_step_runs_before_its_container_is_allocated() {
    let mut record = initial_record();
    for step in demo_steps().iter().copied() {
        match step {
            Step::AddTagByCopy(_) => assert!(record.tags.is_empty()),
            Step::AddMetaByCopy(..) => assert!(!record.has_meta()),
            _ => {}
        }
        let before = record.clone();
        step.apply(&mut record);
        if step.is_by_copy() {
            assert_eq!(record, before, "{} changed the original", step.call_label());
        }
    }
}

#[test]
fn transcript_lists_state_after_each_step() {
    let (_, transcript) = run_to_string();
    let lines = transcript.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "Initial state: {id:1 name:Alice tags:[] meta:{}}");

    let states = lines
        .iter()
        .filter_map(|line| line.strip_prefix("Current state: "))
        .collect::<Vec<_>>();
    assert_eq!(
        states,
        vec![
            "{id:1 name:Alice tags:[] meta:{}}",
            "{id:1 name:Charlie tags:[] meta:{}}",
            "{id:1 name:Charlie tags:[] meta:{}}",
            "{id:1 name:Charlie tags:[programmer] meta:{}}",
            "{id:1 name:Charlie tags:[programmer] meta:{}}",
            "{id:1 name:Charlie tags:[programmer] meta:{department: engineering}}",
        ]
    );

    let calls = lines
        .iter()
        .filter_map(|line| line.strip_prefix("After "))
        .collect::<Vec<_>>();
    assert_eq!(calls[0], "rename_by_copy(record.clone(), \"Bob\")");
    assert_eq!(
        calls[5],
        "add_meta_by_reference(&mut record, \"department\", \"engineering\")"
    );
}

#[test]
fn transcript_ends_with_summary() {
    let (_, transcript) = run_to_string();
    let tail = transcript.lines().rev().take(5).collect::<Vec<_>>();

    assert_eq!(
        tail,
        vec![
            "Meta: {department: engineering}",
            "Tags: [programmer]",
            "Name: Charlie",
            "ID: 1",
            "Summary:",
        ]
    );
}

#[test]
fn run_demo_reports_unwritable_output_as_io_error() {
    let err = run_demo(&mut ClosedPipe).expect_err("closed output must fail");

    match &err {
        DemoError::Io(source) => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("failed to write transcript"));
}
