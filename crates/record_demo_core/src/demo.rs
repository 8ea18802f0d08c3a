//! Fixed demonstration driver.
//!
//! # Responsibility
//! - Own the demonstrated record and apply the six steps in order.
//! - Write a line-oriented transcript of the state after every step.
//!
//! # Invariants
//! - Step order is fixed. Every by-copy step runs while the container it
//!   touches is still empty or absent on the original.
//! - The transcript goes only to the provided writer.

use crate::logging::{LogTarget, LoggingError};
use crate::model::record::{Record, RecordId};
use crate::service::mutation::{
    add_meta_by_copy, add_meta_by_reference, add_tag_by_copy, add_tag_by_reference,
    rename_by_copy, rename_by_reference,
};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

pub const INITIAL_ID: RecordId = 1;
pub const INITIAL_NAME: &str = "Alice";

pub type DemoResult<T> = Result<T, DemoError>;

#[derive(Debug)]
pub enum DemoError {
    Io(io::Error),
    Logging(LoggingError),
}

impl Display for DemoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write transcript: {err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DemoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<LoggingError> for DemoError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

/// Runtime settings for the CLI entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_level: &'static str,
    pub log_target: LogTarget,
}

impl Default for DemoConfig {
    /// `warn` on stderr, so stdout carries the transcript alone.
    fn default() -> Self {
        Self {
            log_level: "warn",
            log_target: LogTarget::Stderr,
        }
    }
}

/// One demonstrated mutation with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RenameByCopy(&'static str),
    RenameByReference(&'static str),
    AddTagByCopy(&'static str),
    AddTagByReference(&'static str),
    AddMetaByCopy(&'static str, &'static str),
    AddMetaByReference(&'static str, &'static str),
}

impl Step {
    /// Applies this step to `record`, cloning first for by-copy steps.
    pub fn apply(self, record: &mut Record) {
        match self {
            Self::RenameByCopy(name) => rename_by_copy(record.clone(), name),
            Self::RenameByReference(name) => rename_by_reference(record, name),
            Self::AddTagByCopy(tag) => add_tag_by_copy(record.clone(), tag),
            Self::AddTagByReference(tag) => add_tag_by_reference(record, tag),
            Self::AddMetaByCopy(key, value) => add_meta_by_copy(record.clone(), key, value),
            Self::AddMetaByReference(key, value) => add_meta_by_reference(record, key, value),
        }
    }

    pub fn is_by_copy(self) -> bool {
        matches!(
            self,
            Self::RenameByCopy(_) | Self::AddTagByCopy(_) | Self::AddMetaByCopy(..)
        )
    }

    /// Call as it reads in source, e.g. `rename_by_copy(record.clone(), "Bob")`.
    pub fn call_label(self) -> String {
        match self {
            Self::RenameByCopy(name) => format!("rename_by_copy(record.clone(), {name:?})"),
            Self::RenameByReference(name) => {
                format!("rename_by_reference(&mut record, {name:?})")
            }
            Self::AddTagByCopy(tag) => format!("add_tag_by_copy(record.clone(), {tag:?})"),
            Self::AddTagByReference(tag) => {
                format!("add_tag_by_reference(&mut record, {tag:?})")
            }
            Self::AddMetaByCopy(key, value) => {
                format!("add_meta_by_copy(record.clone(), {key:?}, {value:?})")
            }
            Self::AddMetaByReference(key, value) => {
                format!("add_meta_by_reference(&mut record, {key:?}, {value:?})")
            }
        }
    }

    /// Expected outcome narrated before the state line.
    pub fn expectation(self) -> &'static str {
        match self {
            Self::RenameByCopy(_) => "name NOT changed (passed by copy)",
            Self::RenameByReference(_) => "name changed (passed by reference)",
            Self::AddTagByCopy(_) => "tag NOT added to the original (appended to the copy)",
            Self::AddTagByReference(_) => "tag added to the original (passed by reference)",
            Self::AddMetaByCopy(..) => "meta NOT added to the original (map allocated on the copy)",
            Self::AddMetaByReference(..) => "meta added to the original (passed by reference)",
        }
    }
}

static DEMO_STEPS: [Step; 6] = [
    Step::RenameByCopy("Bob"),
    Step::RenameByReference("Charlie"),
    Step::AddTagByCopy("golang"),
    Step::AddTagByReference("programmer"),
    Step::AddMetaByCopy("role", "admin"),
    Step::AddMetaByReference("department", "engineering"),
];

/// The fixed demonstration sequence.
pub fn demo_steps() -> &'static [Step] {
    &DEMO_STEPS
}

/// Record the driver starts from.
pub fn initial_record() -> Record {
    Record::new(INITIAL_ID, INITIAL_NAME)
}

/// Runs the demonstration, writing the transcript to `out`.
///
/// Returns the final record.
pub fn run_demo<W: Write>(out: &mut W) -> DemoResult<Record> {
    let mut record = initial_record();
    writeln!(out, "Initial state: {record}")?;

    for (index, step) in demo_steps().iter().copied().enumerate() {
        step.apply(&mut record);
        debug!(
            "event=demo_step module=demo index={} by_copy={} tags={} meta_entries={}",
            index,
            step.is_by_copy(),
            record.tags.len(),
            record.meta_len()
        );

        writeln!(out)?;
        writeln!(out, "After {}", step.call_label())?;
        writeln!(out, "Expected: {}", step.expectation())?;
        writeln!(out, "Current state: {record}")?;
    }

    write_summary(out, &record)?;
    out.flush()?;
    info!(
        "event=demo_done module=demo status=ok steps={}",
        demo_steps().len()
    );
    Ok(record)
}

fn write_summary<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "ID: {}", record.id())?;
    writeln!(out, "Name: {}", record.name)?;
    writeln!(out, "Tags: {}", record.tags_display())?;
    writeln!(out, "Meta: {}", record.meta_display())
}
