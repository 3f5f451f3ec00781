//! Key-value annotations attached to a single test's report record.

use serde::{Deserialize, Serialize};

/// A test parameter shown alongside the test in the report UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (e.g. "env")
    pub name: String,

    /// Parameter value
    pub value: String,
}

impl Parameter {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            value: value.into(),
        }
    }
}
