//! Scope propagation across nested calls, tasks and threads.

use std::sync::Arc;
use std::time::Duration;

use context_logger::{
    current_context, run_with_context, run_with_context_async, FutureExt, LogContext,
};

mod common;

fn nested_lookup() -> LogContext {
    fn deeper() -> LogContext {
        current_context()
    }
    deeper()
}

#[test]
fn test_nested_calls_see_binding() {
    let ctx = LogContext::empty().with_session_id("req-123").with_category("api");
    assert_eq!(run_with_context(ctx.clone(), nested_lookup), ctx);
    assert!(current_context().is_empty());
}

#[test]
fn test_error_exit_restores_outer_binding() {
    let c1 = LogContext::empty().with_tags(["c1"]);
    let c2 = LogContext::empty().with_tags(["c2"]);

    let result: Result<(), String> = run_with_context(c1.clone(), || {
        let inner: Result<(), String> = run_with_context(c2.clone(), || {
            assert_eq!(current_context(), c2);
            Err("inner failed".to_string())
        });
        assert_eq!(current_context(), c1);
        inner
    });

    assert_eq!(result, Err("inner failed".to_string()));
    assert!(current_context().is_empty());
}

#[test]
fn test_binding_never_mutates_context() {
    let ctx = LogContext::empty().with_tags(["a"]);
    let snapshot = ctx.data().clone();

    run_with_context(ctx.clone(), || {
        let enriched = current_context().with_tags(["b"]);
        run_with_context(enriched, || assert_eq!(current_context().tags().len(), 2));
    });

    assert_eq!(ctx.data(), &snapshot);
}

#[test]
fn test_parallel_threads_keep_own_bindings() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let ctx = LogContext::empty().with_session_id(format!("thread-{i}"));
                run_with_context(ctx, || {
                    for _ in 0..100 {
                        std::thread::yield_now();
                        let seen = current_context();
                        assert_eq!(seen.session_id(), Some(format!("thread-{i}").as_str()));
                    }
                });
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_log_their_own_context() {
    let (logger, out, _) = common::capture_logger();
    let logger = Arc::new(logger);

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let logger = Arc::clone(&logger);
            let ctx = LogContext::empty().with_session_id(format!("task-{i}"));
            tokio::spawn(
                async move {
                    for step in 0..5u32 {
                        tokio::time::sleep(Duration::from_millis(1)).await;
                        context_logger::info!(logger = logger; "step", step);
                    }
                }
                .with_log_context(ctx),
            )
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    let records = out.records();
    assert_eq!(records.len(), 40);
    for i in 0..8 {
        let session = format!("task-{i}");
        let count = records.iter().filter(|r| r["sessionId"] == session.as_str()).count();
        assert_eq!(count, 5, "{session} should own exactly its five records");
    }
}

#[tokio::test]
async fn test_async_error_exit_restores_binding() {
    let outer = LogContext::empty().with_category("outer");
    let inner = LogContext::empty().with_category("inner");

    let inner_for_task = inner.clone();
    let (result, after) = run_with_context_async(outer.clone(), async move {
        let result: Result<(), &str> = async {
            tokio::task::yield_now().await;
            assert_eq!(current_context(), inner_for_task);
            Err("inner failed")
        }
        .with_log_context(inner_for_task.clone())
        .await;
        (result, current_context())
    })
    .await;

    assert_eq!(result, Err("inner failed"));
    assert_eq!(after, outer);
    assert!(current_context().is_empty());
}
