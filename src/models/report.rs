//! The per-test report record that labels and parameters are appended to.

use crate::models::{Label, Parameter, TestContext};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a finished test, in Allure's status vocabulary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Test body completed without failure
    #[default]
    Passed,

    /// An assertion failed
    Failed,

    /// The test errored outside its assertions
    Broken,

    /// The test did not run
    Skipped,
}

/// A single test's report record, serialized in Allure2 result format.
///
/// The host test framework opens one record per test with [`TestReport::start`],
/// runs the test body, marks the outcome with [`TestReport::finish`], and hands
/// the record to post-test hooks before writing it out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    /// Unique identifier for this record
    pub uuid: String,

    /// Display name of the test
    pub name: String,

    /// Fully qualified test name
    pub full_name: String,

    /// Test outcome
    pub status: Status,

    /// Start time, epoch milliseconds
    pub start: i64,

    /// Stop time, epoch milliseconds
    pub stop: i64,

    /// Suite hierarchy and other labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,

    /// Key-value annotations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl TestReport {
    /// Open a new record for the given test.
    pub fn start(ctx: &TestContext) -> Self {
        let now = Utc::now().timestamp_millis();
        TestReport {
            uuid: Uuid::new_v4().to_string(),
            name: ctx.test_name().to_string(),
            full_name: ctx.full_name(),
            status: Status::Passed,
            start: now,
            stop: now,
            labels: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Mark the record finished with the given outcome.
    pub fn finish(&mut self, status: Status) {
        self.status = status;
        self.stop = Utc::now().timestamp_millis();
    }
}
