//! Data model for test report annotation.
//!
//! This module contains the report record a test accumulates while running,
//! the labels and parameters appended to it, and the metadata describing the
//! test itself as supplied by the host framework.

pub mod label;
pub mod parameter;
pub mod report;
pub mod test_context;

pub use label::{Label, LabelKind};
pub use parameter::Parameter;
pub use report::{Status, TestReport};
pub use test_context::TestContext;
