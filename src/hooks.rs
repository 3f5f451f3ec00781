//! Post-test hook registration.
//!
//! Hooks are registered explicitly rather than discovered through teardown
//! attributes: the host test runner calls [`run_post_test_hooks`] (or
//! [`HookRegistry::run_post_test`] on its own registry instance) from its
//! teardown extension point once per finished test.

use crate::models::{TestContext, TestReport};
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// A callback invoked after each test body finishes.
pub trait PostTestHook: Send + Sync {
    /// Called once per test with the test's context and its open report record.
    fn after_test(&self, ctx: &TestContext, report: &mut TestReport);
}

/// An ordered collection of post-test hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Arc<dyn PostTestHook>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        HookRegistry { hooks: Vec::new() }
    }

    /// Add a hook. Hooks run in registration order.
    pub fn register(&mut self, hook: Arc<dyn PostTestHook>) {
        self.hooks.push(hook);
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the registry has no hooks.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook against the finished test's record.
    pub fn run_post_test(&self, ctx: &TestContext, report: &mut TestReport) {
        for hook in &self.hooks {
            hook.after_test(ctx, report);
        }
    }
}

/// Process-global registry for hosts that do not carry their own instance.
static GLOBAL_REGISTRY: Lazy<RwLock<HookRegistry>> =
    Lazy::new(|| RwLock::new(HookRegistry::new()));

/// Register a hook with the process-global registry.
pub fn register_post_test_hook(hook: Arc<dyn PostTestHook>) {
    if let Ok(mut registry) = GLOBAL_REGISTRY.write() {
        registry.register(hook);
    } else {
        warn!("Post-test hook registry lock poisoned, hook not registered");
    }
}

/// Run the process-global hooks for a finished test.
pub fn run_post_test_hooks(ctx: &TestContext, report: &mut TestReport) {
    if let Ok(registry) = GLOBAL_REGISTRY.read() {
        registry.run_post_test(ctx, report);
    } else {
        warn!("Post-test hook registry lock poisoned, hooks skipped");
    }
}
