//! Busy indicators for in-flight assistance calls.
//!
//! Requests are not fenced: when two overlap on the same slot, whichever
//! finishes last decides the stored value, and the first one to finish
//! already lowers the flag.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared "request in flight" indicator. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag {
    loading: Arc<AtomicBool>,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag until the returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.loading.store(true, Ordering::SeqCst);
        LoadingGuard {
            loading: Arc::clone(&self.loading),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

/// Lowers its flag when dropped, including on early return or cancellation.
#[derive(Debug)]
pub struct LoadingGuard {
    loading: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loading.store(false, Ordering::SeqCst);
    }
}

/// Holds the latest result of an assistance call alongside its loading flag.
#[derive(Debug)]
pub struct InsightSlot<T> {
    loading: LoadingFlag,
    value: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for InsightSlot<T> {
    fn clone(&self) -> Self {
        Self {
            loading: self.loading.clone(),
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> Default for InsightSlot<T> {
    fn default() -> Self {
        Self {
            loading: LoadingFlag::new(),
            value: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T: Clone> InsightSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Await `work` with the flag raised, then store its output.
    pub async fn run<F>(&self, work: F) -> T
    where
        F: Future<Output = T>,
    {
        let _guard = self.loading.begin();
        let value = work.await;
        *self.value.lock() = Some(value.clone());
        value
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn latest(&self) -> Option<T> {
        self.value.lock().clone()
    }
}
