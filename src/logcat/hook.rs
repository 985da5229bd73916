//! Hooks run on every record before emission.

use std::fmt;
use std::sync::Arc;

use crate::logcat::record::LogRecord;

/// Observer that may inspect, rewrite or suppress a record.
pub trait LogHook: Send + Sync {
    fn hook(&self, record: &mut LogRecord);
}

/// Adapts a closure into a [`LogHook`].
pub struct FnHook<F>(pub F);

impl<F> LogHook for FnHook<F>
where
    F: Fn(&mut LogRecord) + Send + Sync,
{
    fn hook(&self, record: &mut LogRecord) {
        (self.0)(record)
    }
}

/// Wrap a closure as a shareable hook.
pub fn hook_fn<F>(f: F) -> Arc<dyn LogHook>
where
    F: Fn(&mut LogRecord) + Send + Sync + 'static,
{
    Arc::new(FnHook(f))
}

/// Immutable, ordered list of hooks.
///
/// Insertion order is invocation order. Updates produce a new chain so that
/// a chain being iterated is never modified.
#[derive(Clone, Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn LogHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a chain with `hook` appended. Duplicates are kept.
    pub fn with_hook(&self, hook: Arc<dyn LogHook>) -> Self {
        let mut hooks = self.hooks.clone();
        hooks.push(hook);
        Self { hooks }
    }

    /// Return a chain without the first hook identical to `hook`, or `None`
    /// if it is not registered.
    pub fn without_hook(&self, hook: &Arc<dyn LogHook>) -> Option<Self> {
        let index = self.hooks.iter().position(|h| same_hook(h, hook))?;
        let mut hooks = self.hooks.clone();
        hooks.remove(index);
        Some(Self { hooks })
    }

    /// Run every hook in order. Returns `false` as soon as one suppresses
    /// the record; later hooks are not called.
    pub fn apply(&self, record: &mut LogRecord) -> bool {
        for hook in &self.hooks {
            hook.hook(record);
            if record.is_suppressed() {
                return false;
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain").field("len", &self.hooks.len()).finish()
    }
}

// Compare data pointers only; vtable pointers for the same type may differ
// across codegen units.
fn same_hook(a: &Arc<dyn LogHook>, b: &Arc<dyn LogHook>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
