//! Progress reporting and cancellation for long-running searches.
//!
//! The engine calls the observer at throttled intervals (every
//! `progress_interval` candidates, plus once at the end). Callers should
//! treat progress as advisory; the engine never blocks waiting for a
//! progress consumer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, processed: u64, total: u64);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _processed: u64, _total: u64) {}
}

/// Pull-side progress state: the engine pushes coarse updates into the
/// counter, any number of consumers poll it. Cloning shares the state.
#[derive(Debug, Default, Clone)]
pub struct ProgressCounter {
    inner: Arc<Counts>,
}

#[derive(Debug, Default)]
struct Counts {
    processed: AtomicU64,
    total: AtomicU64,
}

impl ProgressCounter {
    pub fn new() -> ProgressCounter {
        ProgressCounter::default()
    }

    pub fn processed(&self) -> u64 {
        self.inner.processed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.inner.total.load(Ordering::Relaxed)
    }
}

impl ProgressObserver for ProgressCounter {
    fn on_progress(&self, processed: u64, total: u64) {
        self.inner.processed.store(processed, Ordering::Relaxed);
        self.inner.total.store(total, Ordering::Relaxed);
    }
}

/// Cooperative cancellation flag, checked by the engine at candidate
/// granularity. Cloning shares the flag, so a consumer can keep one half
/// and hand the other to a running search.
#[derive(Debug, Default, Clone)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
