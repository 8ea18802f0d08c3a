//! Record mutation use cases.
//!
//! # Responsibility
//! - Expose the copy/reference mutation pairs over a common record trait.
//! - Keep the demonstration driver decoupled from field layout.

pub mod mutation;
