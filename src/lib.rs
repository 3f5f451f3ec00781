//! Allure Env Annotator - post-test environment and suite labels for Allure test reports.
//!
//! This library enriches each finished test's Allure report record with an
//! `env` parameter and a parent-suite/suite/sub-suite hierarchy derived from
//! the `ALLURE_ENVIRONMENT` variable and the test's own metadata, then writes
//! the finished records into the Allure results directory.
//!
//! # Architecture
//!
//! - **models**: report records, labels, parameters, and test metadata
//! - **sink**: the write-only reporting operations hooks append through
//! - **annotator**: the post-test environment/suite annotation itself
//! - **hooks**: explicit post-test callback registration
//! - **writer**: persistence of finished records into the results directory
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod annotator;
pub mod config;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod models;
pub mod sink;
pub mod writer;

pub use annotator::{EnvironmentAnnotator, ALLURE_ENVIRONMENT_VAR};
pub use config::Config;
pub use error::{ConfigError, WriterError};
pub use hooks::{register_post_test_hook, run_post_test_hooks, HookRegistry, PostTestHook};
pub use models::{Label, LabelKind, Parameter, Status, TestContext, TestReport};
pub use sink::ReportSink;
pub use writer::{ResultsWriter, DEFAULT_RESULTS_DIR};
