// src/pipeline/pool.rs

//! Fixed-width worker pool with fail-soft collection.
//!
//! Units go through a bounded task queue to `width` workers sharing its
//! receiver. Each worker reports a tagged outcome on a result channel, and the
//! calling task is the only consumer of that channel, so merging needs no locks.
//! A failed or panicking unit is recorded and dropped; its siblings keep going.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;

use crate::error::{AppError, Result};

/// Outcome of a single unit of work.
#[derive(Debug)]
pub enum UnitOutcome<T> {
    Succeeded(T),
    Failed(AppError),
}

impl<T> From<Result<T>> for UnitOutcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(error) => Self::Failed(error),
        }
    }
}

/// A unit that did not succeed, with its cause.
#[derive(Debug)]
pub struct UnitFailure<U> {
    pub unit: U,
    pub error: AppError,
}

/// Everything a pool run produced, in completion order.
#[derive(Debug)]
pub struct PoolOutcome<U, T> {
    pub succeeded: Vec<(U, T)>,
    pub failed: Vec<UnitFailure<U>>,
}

impl<U, T> Default for PoolOutcome<U, T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<U, T> PoolOutcome<U, T> {
    /// Number of units that reached a final state.
    pub fn completed(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Drop the unit keys and keep the successful values.
    pub fn into_values(self) -> Vec<T> {
        self.succeeded.into_iter().map(|(_, value)| value).collect()
    }
}

/// Bounded pool of async workers.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    width: usize,
}

impl WorkerPool {
    /// Create a pool; a width of 0 is treated as 1.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Run `work` over every unit and wait until all of them succeeded or failed.
    ///
    /// There is no cancellation: a unit that never resolves keeps its worker busy.
    pub async fn run<U, T, F, Fut>(&self, units: Vec<U>, work: F) -> PoolOutcome<U, T>
    where
        U: Clone + fmt::Display + Send + 'static,
        T: Send + 'static,
        F: Fn(U) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let mut outcome = PoolOutcome::default();
        if units.is_empty() {
            return outcome;
        }

        let worker_count = self.width.min(units.len());
        let (task_tx, task_rx) = mpsc::channel::<U>(self.width);
        let (result_tx, mut result_rx) = mpsc::channel::<(U, UnitOutcome<T>)>(self.width);
        let task_rx = Arc::new(Mutex::new(task_rx));
        let work = Arc::new(work);

        let mut workers = JoinSet::new();
        for worker in 0..worker_count {
            let task_rx = Arc::clone(&task_rx);
            let result_tx = result_tx.clone();
            let work = Arc::clone(&work);

            workers.spawn(async move {
                loop {
                    let next = {
                        let mut guard = task_rx.lock().await;
                        guard.recv().await
                    };
                    let Some(unit) = next else {
                        break;
                    };

                    log::debug!("[worker {worker}] in-flight: {unit}");
                    // The closure runs on first poll, so a panic while building
                    // the future is caught along with one raised while awaiting it.
                    let call = {
                        let work = Arc::clone(&work);
                        let unit = unit.clone();
                        async move { (*work)(unit).await }
                    };
                    let result = match AssertUnwindSafe(call).catch_unwind().await {
                        Ok(result) => UnitOutcome::from(result),
                        Err(panic) => UnitOutcome::Failed(AppError::unit(
                            unit.to_string(),
                            panic_message(panic.as_ref()),
                        )),
                    };

                    if result_tx.send((unit, result)).await.is_err() {
                        break;
                    }
                }
            });
        }
        // Workers hold the only result senders now; the channel closes when they exit.
        drop(result_tx);

        workers.spawn(async move {
            for unit in units {
                if task_tx.send(unit).await.is_err() {
                    break;
                }
            }
        });

        while let Some((unit, result)) = result_rx.recv().await {
            match result {
                UnitOutcome::Succeeded(value) => {
                    log::debug!("succeeded: {unit}");
                    outcome.succeeded.push((unit, value));
                }
                UnitOutcome::Failed(error) => {
                    log::warn!("Unit {unit} failed: {error}");
                    outcome.failed.push(UnitFailure { unit, error });
                }
            }
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                log::error!("Pool task ended abnormally: {e}");
            }
        }

        outcome
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
