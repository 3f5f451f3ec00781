//! Post-test environment and suite annotation.

use crate::config::Config;
use crate::hooks::PostTestHook;
use crate::models::{TestContext, TestReport};
use crate::sink::ReportSink;
use std::env;
use tracing::debug;

/// Environment variable carrying the target environment label.
pub const ALLURE_ENVIRONMENT_VAR: &str = "ALLURE_ENVIRONMENT";

/// Enriches a finished test's report record with environment and suite labels.
///
/// Runs once per test, after the test body (pass, fail, or error) and before
/// the record is finalized. An absent or empty environment value is normal
/// and silently suppresses the environment annotations.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentAnnotator {
    /// Target environment label, absent when not configured
    environment: Option<String>,
}

impl EnvironmentAnnotator {
    /// Create an annotator with an explicit environment value.
    ///
    /// An empty value is treated the same as an absent one.
    pub fn new(environment: Option<&str>) -> Self {
        EnvironmentAnnotator {
            environment: environment
                .filter(|value| !value.is_empty())
                .map(|value| value.to_string()),
        }
    }

    /// Create an annotator from the `ALLURE_ENVIRONMENT` variable.
    pub fn from_env() -> Self {
        Self::new(env::var(ALLURE_ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Create an annotator from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.environment.as_deref())
    }

    /// The environment label this annotator applies, if any.
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// Attach environment and suite annotations for the given test.
    ///
    /// - When an environment value is present, records it as the `env`
    ///   parameter and as the parent-suite label.
    /// - When the context carries a non-empty namespace, records it as the
    ///   suite label.
    /// - Always records the class name as the sub-suite label.
    pub fn annotate(&self, ctx: &TestContext, sink: &mut dyn ReportSink) {
        if let Some(environment) = &self.environment {
            sink.add_test_parameter("env", environment);
            sink.add_parent_suite(environment);
        }

        if let Some(namespace) = ctx.namespace() {
            sink.add_suite(namespace);
        }

        sink.add_sub_suite(ctx.class_name());

        debug!(
            "Attached environment annotations to test: {}",
            ctx.full_name()
        );
    }
}

impl PostTestHook for EnvironmentAnnotator {
    fn after_test(&self, ctx: &TestContext, report: &mut TestReport) {
        self.annotate(ctx, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, LabelKind, Parameter};

    fn sample_context() -> TestContext {
        TestContext::new(Some("reports::smoke"), "BaseSuite", "does_work")
    }

    #[test]
    fn test_annotate_with_environment() {
        let annotator = EnvironmentAnnotator::new(Some("staging"));
        let ctx = sample_context();
        let mut report = TestReport::start(&ctx);

        annotator.annotate(&ctx, &mut report);

        assert_eq!(report.parameters, vec![Parameter::new("env", "staging")]);
        assert_eq!(
            report.labels,
            vec![
                Label::new(LabelKind::ParentSuite, "staging"),
                Label::new(LabelKind::Suite, "reports::smoke"),
                Label::new(LabelKind::SubSuite, "BaseSuite"),
            ]
        );
    }

    #[test]
    fn test_annotate_without_environment() {
        let annotator = EnvironmentAnnotator::new(None);
        let ctx = sample_context();
        let mut report = TestReport::start(&ctx);

        annotator.annotate(&ctx, &mut report);

        assert!(report.parameters.is_empty());
        assert_eq!(
            report.labels,
            vec![
                Label::new(LabelKind::Suite, "reports::smoke"),
                Label::new(LabelKind::SubSuite, "BaseSuite"),
            ]
        );
    }

    #[test]
    fn test_empty_environment_treated_as_absent() {
        let annotator = EnvironmentAnnotator::new(Some(""));
        assert_eq!(annotator.environment(), None);
    }

    #[test]
    fn test_annotate_without_namespace_keeps_sub_suite() {
        let annotator = EnvironmentAnnotator::new(None);
        let ctx = TestContext::new(None, "BaseSuite", "does_work");
        let mut report = TestReport::start(&ctx);

        annotator.annotate(&ctx, &mut report);

        assert_eq!(report.labels, vec![Label::new(LabelKind::SubSuite, "BaseSuite")]);
    }
}
