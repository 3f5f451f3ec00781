//! Write-only sink for report labels and parameters.

use crate::models::{Label, LabelKind, Parameter, TestReport};

/// Reporting operations available to post-test hooks.
///
/// Provides abstraction over the report record under construction,
/// enabling different implementations (in-tree record, host adapters, mock).
pub trait ReportSink {
    /// Attach a key-value parameter to the current test.
    fn add_test_parameter(&mut self, name: &str, value: &str);

    /// Record the top level of the suite hierarchy.
    fn add_parent_suite(&mut self, value: &str);

    /// Record the middle level of the suite hierarchy.
    fn add_suite(&mut self, value: &str);

    /// Record the bottom level of the suite hierarchy.
    fn add_sub_suite(&mut self, value: &str);
}

impl ReportSink for TestReport {
    fn add_test_parameter(&mut self, name: &str, value: &str) {
        self.parameters.push(Parameter::new(name, value));
    }

    fn add_parent_suite(&mut self, value: &str) {
        self.labels.push(Label::new(LabelKind::ParentSuite, value));
    }

    fn add_suite(&mut self, value: &str) {
        self.labels.push(Label::new(LabelKind::Suite, value));
    }

    fn add_sub_suite(&mut self, value: &str) {
        self.labels.push(Label::new(LabelKind::SubSuite, value));
    }
}
