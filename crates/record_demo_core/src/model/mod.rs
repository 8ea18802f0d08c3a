//! Record models used by the demonstration.
//!
//! # Responsibility
//! - Define the deep-copy `Record` mutated by the driver.
//! - Define the shallow `SharedRecord` that exposes the leak-prone case.
//!
//! # Invariants
//! - Absent metadata always reads as an empty mapping.

pub mod record;
pub mod shared;
