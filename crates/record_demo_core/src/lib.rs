//! Core of the record mutation demonstrator.
//! Shows which mutations reach a record passed by copy versus by reference.

pub mod demo;
pub mod logging;
pub mod model;
pub mod service;

pub use demo::{
    demo_steps, initial_record, run_demo, DemoConfig, DemoError, DemoResult, Step,
};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::record::{MetaMap, Record, RecordId};
pub use model::shared::{SharedMeta, SharedRecord};
pub use service::mutation::{
    add_meta_by_copy, add_meta_by_reference, add_tag_by_copy, add_tag_by_reference,
    rename_by_copy, rename_by_reference, MutableRecord,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
