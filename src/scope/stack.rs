//! Thread-local binding stack.

use std::cell::RefCell;
use std::marker::PhantomData;

use crate::context::LogContext;

thread_local! {
    static BINDINGS: RefCell<Vec<LogContext>> = const { RefCell::new(Vec::new()) };
}

/// Restores the previous binding when dropped.
///
/// Not `Send`: a guard must be dropped on the thread that created it. Never
/// held across an `.await`; only closures and single polls are guarded.
#[must_use = "the binding is removed as soon as the guard is dropped"]
pub(crate) struct ScopeGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

/// Bind `context` as current until the returned guard is dropped.
pub(crate) fn enter(context: LogContext) -> ScopeGuard {
    let depth = BINDINGS.with(|stack| {
        let mut stack = stack.borrow_mut();
        let depth = stack.len();
        stack.push(context);
        depth
    });
    tracing::trace!(depth = depth + 1, "log scope entered");
    ScopeGuard {
        depth,
        _not_send: PhantomData,
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        // Truncate rather than pop so an out-of-order drop still lands on
        // the state that preceded this guard.
        let _ = BINDINGS.try_with(|stack| stack.borrow_mut().truncate(self.depth));
        tracing::trace!(depth = self.depth, "log scope exited");
    }
}

/// Run `f` with `context` bound as current and return its result unchanged.
///
/// The previous binding is restored when `f` returns, including when it
/// returns an `Err` or panics.
pub fn run_with_context<R>(context: LogContext, f: impl FnOnce() -> R) -> R {
    let _guard = enter(context);
    f()
}

/// The innermost bound context, or an empty one when nothing is bound.
pub fn current_context() -> LogContext {
    BINDINGS
        .try_with(|stack| stack.borrow().last().cloned())
        .ok()
        .flatten()
        .unwrap_or_default()
}
