//! Bounded parallel dispatch.
//!
//! Runs a per-item async task across a semaphore-bounded pool of workers,
//! enforcing a per-slot result timeout and converting every failure mode
//! (task error, timeout, panic) into a caller-supplied fallback value.
//! Output order always matches input order.
//!
//! # Known limitation
//!
//! A timed-out task is not cancelled. Dropping its join handle detaches the
//! task, which keeps running and keeps holding its worker permit until it
//! finishes on its own. The pool size therefore bounds total backend load
//! even when slots are reported as timed out. Callers that need stricter
//! cancellation can layer it inside their task; the batch itself always
//! completes with one result per input item.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};

use crate::config::DispatchConfig;

/// Why a dispatched slot fell back.
#[derive(Debug, Error)]
pub enum TaskFailure<E> {
    #[error("result wait exceeded {0:?}")]
    TimedOut(Duration),

    #[error("task failed: {0}")]
    Failed(E),

    #[error("task panicked: {0}")]
    Panicked(String),
}

impl<E> TaskFailure<E> {
    /// Short outcome label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskFailure::TimedOut(_) => "timeout",
            TaskFailure::Failed(_) => "failed",
            TaskFailure::Panicked(_) => "panicked",
        }
    }
}

/// Semaphore-bounded task pool with ordered result gathering.
pub struct ChunkDispatcher {
    workers: usize,
    task_timeout: Option<Duration>,
}

impl ChunkDispatcher {
    /// Create a dispatcher for the given worker bound and timeout.
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            workers: config.workers.max(1),
            task_timeout: config.task_timeout,
        }
    }

    /// Run `task` over every item with bounded concurrency.
    ///
    /// All items are spawned up front; a shared semaphore sized to the
    /// worker bound gates actual execution. Results are gathered by
    /// scanning the join handles in submission order, so `output[i]`
    /// always corresponds to `input[i]`. A `None` or zero `task_timeout`
    /// waits indefinitely for each slot; a positive one bounds the wait
    /// for that slot's result.
    ///
    /// Any slot failure is handed to `recover`, whose return value fills
    /// the slot; the batch itself never aborts. A panic inside `recover`
    /// does propagate to the caller.
    pub async fn run<C, T, E, F, Fut, R>(&self, items: Vec<C>, task: F, recover: R) -> Vec<T>
    where
        C: Clone + Send + 'static,
        T: Send + 'static,
        E: std::fmt::Display + Send + 'static,
        F: Fn(usize, C) -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        R: Fn(usize, &C, TaskFailure<E>) -> T,
    {
        info!(
            items = items.len(),
            workers = self.workers,
            timeout = ?self.task_timeout,
            "Dispatching batch"
        );

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let handles: Vec<JoinHandle<Result<T, E>>> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let semaphore = semaphore.clone();
                let fut = task(index, item.clone());
                tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                    fut.await
                })
            })
            .collect();

        let mut results = Vec::with_capacity(items.len());
        for (index, handle) in handles.into_iter().enumerate() {
            let start = Instant::now();
            let settled = match self.task_timeout {
                Some(limit) if !limit.is_zero() => {
                    match tokio::time::timeout(limit, handle).await {
                        Ok(joined) => settle(joined),
                        Err(_) => Err(TaskFailure::TimedOut(limit)),
                    }
                }
                _ => settle(handle.await),
            };
            let wait_ms = start.elapsed().as_secs_f64() * 1000.0;

            match settled {
                Ok(value) => {
                    crate::metrics::record_slot("ok", wait_ms);
                    results.push(value);
                }
                Err(failure) => {
                    warn!(
                        index,
                        kind = failure.kind(),
                        error = %failure,
                        "Dispatched task failed, substituting fallback"
                    );
                    crate::metrics::record_slot(failure.kind(), wait_ms);
                    results.push(recover(index, &items[index], failure));
                }
            }
        }

        results
    }
}

fn settle<T, E>(joined: Result<Result<T, E>, JoinError>) -> Result<T, TaskFailure<E>> {
    match joined {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(TaskFailure::Failed(e)),
        Err(join_err) => Err(TaskFailure::Panicked(join_err.to_string())),
    }
}
