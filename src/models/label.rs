//! Suite labels attached to a test's report record.

use serde::{Deserialize, Serialize};

/// The hierarchy levels Allure uses to group tests in its UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Top level of the suite hierarchy
    ParentSuite,
    /// Middle level, typically the test's namespace
    Suite,
    /// Bottom level, typically the test class's simple name
    SubSuite,
}

impl LabelKind {
    /// The label name as it appears in Allure result files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::ParentSuite => "parentSuite",
            LabelKind::Suite => "suite",
            LabelKind::SubSuite => "subSuite",
        }
    }
}

/// A named label on a test's report record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// Label name (e.g. "suite")
    pub name: String,

    /// Label value
    pub value: String,
}

impl Label {
    /// Create a label of the given kind.
    pub fn new(kind: LabelKind, value: impl Into<String>) -> Self {
        Label {
            name: kind.as_str().to_string(),
            value: value.into(),
        }
    }
}
