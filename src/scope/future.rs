//! Binding that follows a future across suspension points.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::context::LogContext;
use crate::scope::stack::{current_context, enter};

pin_project! {
    /// A future that runs with a [`LogContext`] bound on every poll.
    #[must_use = "futures do nothing unless polled"]
    pub struct Scoped<F> {
        #[pin]
        inner: F,
        context: LogContext,
    }
}

impl<F> Scoped<F> {
    /// The context bound while the inner future is polled.
    pub fn context(&self) -> &LogContext {
        &self.context
    }
}

impl<F: Future> Future for Scoped<F> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _guard = enter(this.context.clone());
        this.inner.poll(cx)
    }
}

/// Bind `context` for the whole of `future`, including after each `.await`.
pub fn run_with_context_async<F: Future>(context: LogContext, future: F) -> Scoped<F> {
    Scoped {
        inner: future,
        context,
    }
}

pub trait FutureExt: Future + Sized {
    /// Run this future with `context` bound.
    fn with_log_context(self, context: LogContext) -> Scoped<Self> {
        run_with_context_async(context, self)
    }

    /// Run this future with the caller's current context bound.
    ///
    /// Use before handing a future to `tokio::spawn`: spawned tasks start
    /// with no binding of their own.
    fn in_current_context(self) -> Scoped<Self> {
        run_with_context_async(current_context(), self)
    }
}

impl<F: Future> FutureExt for F {}
