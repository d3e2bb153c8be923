//! Background execution context for font reads.
//!
//! Provides a small thread pool that drives byte-reading futures off the owning thread.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use async_executor::{Executor, Task};

use crate::error::{AssetError, AssetResult};

/// A thread pool for executing async tasks.
///
/// # Example
///
/// ```
/// use specimen_assets::TaskPool;
///
/// let pool = TaskPool::new(2);
/// let task = pool.spawn(async { 21 * 2 }).unwrap();
/// assert_eq!(futures_lite::future::block_on(task), 42);
/// pool.shutdown();
/// ```
pub struct TaskPool {
    executor: Arc<Executor<'static>>,
    threads: Mutex<Vec<thread::JoinHandle<()>>>,
    shutdown: Arc<AtomicBool>,
}

impl TaskPool {
    /// Create a new task pool with the specified number of threads.
    ///
    /// Threads that the OS refuses to start are logged and skipped; a pool that ends
    /// up with no threads reports `is_running() == false` and rejects all work.
    pub fn new(num_threads: usize) -> Self {
        let executor = Arc::new(Executor::new());
        let shutdown = Arc::new(AtomicBool::new(false));
        let mut threads = Vec::with_capacity(num_threads);

        for i in 0..num_threads {
            let exec = executor.clone();
            let shutdown_flag = shutdown.clone();

            let spawned = thread::Builder::new()
                .name(format!("specimen-io-{}", i))
                .spawn(move || {
                    // Keep draining after shutdown so in-flight reads still complete.
                    while !(shutdown_flag.load(Ordering::Acquire) && exec.is_empty()) {
                        if !exec.try_tick() {
                            thread::sleep(Duration::from_millis(1));
                        }
                    }
                });

            match spawned {
                Ok(handle) => threads.push(handle),
                Err(e) => tracing::error!("Failed to spawn task pool thread {}: {}", i, e),
            }
        }

        tracing::debug!("TaskPool created with {} threads", threads.len());

        Self {
            executor,
            threads: Mutex::new(threads),
            shutdown,
        }
    }

    /// Create a task pool with a default number of threads.
    ///
    /// Uses max(1, num_cpus - 1) to leave one core free for the owning thread.
    pub fn default_threads() -> Self {
        let num_threads = (num_cpus::get().saturating_sub(1)).max(1);
        Self::new(num_threads)
    }

    /// Whether the pool accepts new work.
    pub fn is_running(&self) -> bool {
        !self.shutdown.load(Ordering::Acquire) && self.thread_count() > 0
    }

    /// Spawn an async task on the pool.
    ///
    /// Returns a `Task` that can be awaited (or polled) for the result.
    pub fn spawn<T>(&self, future: impl Future<Output = T> + Send + 'static) -> AssetResult<Task<T>>
    where
        T: Send + 'static,
    {
        if !self.is_running() {
            return Err(AssetError::PoolShutDown);
        }
        Ok(self.executor.spawn(future))
    }

    /// Get the number of threads in this pool.
    pub fn thread_count(&self) -> usize {
        self.threads.lock().map(|threads| threads.len()).unwrap_or(0)
    }

    /// Shut the pool down and wait for its threads to finish.
    ///
    /// Tasks already spawned still run to completion; new spawns are rejected.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);

        let threads = match self.threads.lock() {
            Ok(mut threads) => std::mem::take(&mut *threads),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };

        tracing::debug!("Shutting down TaskPool with {} threads", threads.len());

        for handle in threads {
            if let Err(e) = handle.join() {
                tracing::error!("Task pool thread panicked: {:?}", e);
            }
        }

        tracing::debug!("TaskPool shutdown complete");
    }
}

impl Default for TaskPool {
    fn default() -> Self {
        Self::default_threads()
    }
}

impl Drop for TaskPool {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_pool_creation() {
        let pool = TaskPool::new(2);
        assert_eq!(pool.thread_count(), 2);
        assert!(pool.is_running());
    }

    #[test]
    fn test_spawn_and_await() {
        let pool = TaskPool::new(2);

        let task = pool.spawn(async { 42 }).unwrap();

        let result = pollster::block_on(task);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_multiple_tasks() {
        let pool = TaskPool::new(4);

        let tasks: Vec<_> = (0..10)
            .map(|i| pool.spawn(async move { i * 2 }).unwrap())
            .collect();

        let results: Vec<_> = tasks.into_iter().map(pollster::block_on).collect();

        assert_eq!(results, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
    }

    #[test]
    fn test_tasks_run_off_the_calling_thread() {
        let pool = TaskPool::new(1);
        let caller = thread::current().id();

        let worker = pollster::block_on(pool.spawn(async { thread::current().id() }).unwrap());
        assert_ne!(worker, caller);
    }

    #[test]
    fn test_default_threads() {
        let pool = TaskPool::default_threads();
        assert!(pool.thread_count() >= 1);
        assert!(pool.thread_count() <= num_cpus::get());
    }

    #[test]
    fn test_zero_threads_is_not_running() {
        let pool = TaskPool::new(0);
        assert!(!pool.is_running());
        assert!(matches!(pool.spawn(async { 1 }), Err(AssetError::PoolShutDown)));
    }

    #[test]
    fn test_shutdown_rejects_new_work() {
        let pool = TaskPool::new(2);

        let task = pool.spawn(async { 1 }).unwrap();
        pool.shutdown();

        // Work spawned before shutdown still completes.
        assert_eq!(pollster::block_on(task), 1);
        assert!(!pool.is_running());
        assert!(matches!(pool.spawn(async { 2 }), Err(AssetError::PoolShutDown)));
    }
}
