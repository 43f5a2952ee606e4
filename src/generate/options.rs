//! Bulk generation options

use crate::base::{OidError, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use std::thread;

/// Worker pool settings for bulk generation
#[derive(Debug, Clone, Default)]
pub struct BulkOptions {
    /// Number of worker threads (`None` = twice the hardware parallelism)
    pub threads: Option<usize>,
}

impl BulkOptions {
    /// Run every unit on a single worker.
    pub fn sequential() -> Self {
        Self { threads: Some(1) }
    }

    /// Use exactly `threads` workers (0 is treated as 1).
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }

    /// Number of workers the pool will be built with
    pub fn worker_count(&self) -> usize {
        self.threads
            .unwrap_or_else(|| {
                thread::available_parallelism()
                    .map_or(1, NonZeroUsize::get)
                    .saturating_mul(2)
            })
            .max(1)
    }

    /// Build a dedicated rayon pool for one generation run
    pub(crate) fn build_pool(&self) -> Result<ThreadPool> {
        ThreadPoolBuilder::new()
            .num_threads(self.worker_count())
            .thread_name(|i| format!("pen-oid-bulk-{i}"))
            .build()
            .map_err(|e| OidError::WorkerPool(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_uses_one_worker() {
        assert_eq!(BulkOptions::sequential().worker_count(), 1);
    }

    #[test]
    fn test_zero_threads_clamped() {
        assert_eq!(BulkOptions::with_threads(0).worker_count(), 1);
        assert_eq!(BulkOptions::with_threads(3).worker_count(), 3);
    }

    #[test]
    fn test_default_oversubscribes_hardware() {
        let hardware = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        assert_eq!(BulkOptions::default().worker_count(), hardware * 2);
    }

    #[test]
    fn test_build_pool_honours_worker_count() {
        let pool = BulkOptions::with_threads(2).build_pool().unwrap();
        assert_eq!(pool.current_num_threads(), 2);
    }
}
