//! Metadata describing the test that just finished running.
//!
//! The host test framework supplies this explicitly when invoking post-test
//! hooks; no runtime type introspection is involved.

/// Identity of the currently executing test.
///
/// The namespace is the module path of the declaring test module (what
/// `module_path!()` yields at the test site); the class name is the declaring
/// type or fixture's simple name.
///
/// # Example
///
/// ```
/// use allure_env_annotator::models::TestContext;
///
/// let ctx = TestContext::new(Some("reports::smoke"), "LoginSuite", "logs_in");
/// assert_eq!(ctx.namespace(), Some("reports::smoke"));
/// assert_eq!(ctx.class_name(), "LoginSuite");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestContext {
    /// Module path of the declaring test module, absent when unknown
    namespace: Option<String>,

    /// Simple name of the declaring test class or fixture
    class_name: String,

    /// Name of the individual test case
    test_name: String,
}

impl TestContext {
    /// Create a context for a finished test.
    ///
    /// An empty namespace is normalized to absent.
    pub fn new(namespace: Option<&str>, class_name: &str, test_name: &str) -> Self {
        TestContext {
            namespace: namespace
                .filter(|ns| !ns.is_empty())
                .map(|ns| ns.to_string()),
            class_name: class_name.to_string(),
            test_name: test_name.to_string(),
        }
    }

    /// The declaring module path, if known and non-empty.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The declaring class or fixture's simple name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The individual test case's name.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Fully qualified test name used in report records.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}::{}::{}", ns, self.class_name, self.test_name),
            None => format!("{}::{}", self.class_name, self.test_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_normalizes_empty_namespace() {
        let ctx = TestContext::new(Some(""), "BaseSuite", "does_work");
        assert_eq!(ctx.namespace(), None);
    }

    #[test]
    fn test_context_full_name_with_namespace() {
        let ctx = TestContext::new(Some("reports::smoke"), "LoginSuite", "logs_in");
        assert_eq!(ctx.full_name(), "reports::smoke::LoginSuite::logs_in");
    }

    #[test]
    fn test_context_full_name_without_namespace() {
        let ctx = TestContext::new(None, "LoginSuite", "logs_in");
        assert_eq!(ctx.full_name(), "LoginSuite::logs_in");
    }
}
