use allure_env_annotator::sink::ReportSink;
use std::collections::HashMap;

/// Mock report sink for testing annotators.
///
/// Records every operation by kind, in call order, and tracks call counts.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSink {
    pub parameters: Vec<(String, String)>,
    pub parent_suites: Vec<String>,
    pub suites: Vec<String>,
    pub sub_suites: Vec<String>,
    call_counts: HashMap<String, usize>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.get(method).unwrap_or(&0)
    }

    fn track_call(&mut self, method: &str) {
        *self.call_counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ReportSink for RecordingSink {
    fn add_test_parameter(&mut self, name: &str, value: &str) {
        self.track_call("add_test_parameter");
        self.parameters.push((name.to_string(), value.to_string()));
    }

    fn add_parent_suite(&mut self, value: &str) {
        self.track_call("add_parent_suite");
        self.parent_suites.push(value.to_string());
    }

    fn add_suite(&mut self, value: &str) {
        self.track_call("add_suite");
        self.suites.push(value.to_string());
    }

    fn add_sub_suite(&mut self, value: &str) {
        self.track_call("add_sub_suite");
        self.sub_suites.push(value.to_string());
    }
}
