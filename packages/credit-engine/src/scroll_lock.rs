use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::debug;

#[derive(Debug, Default)]
struct LockState {
    locked: AtomicBool,
    acquisitions: AtomicUsize,
    releases: AtomicUsize,
}

/// Shared "page cannot scroll" flag, held while a drawer is open.
///
/// The flag is only ever set through [`ScrollLock::acquire`], and the returned
/// guard clears it when dropped, so every way of closing the drawer (including
/// dropping the whole view) releases it.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    state: Arc<LockState>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.state.locked.store(true, Ordering::SeqCst);
        self.state.acquisitions.fetch_add(1, Ordering::SeqCst);
        debug!("scroll lock acquired");
        ScrollLockGuard {
            state: Arc::clone(&self.state),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked.load(Ordering::SeqCst)
    }

    pub fn acquisitions(&self) -> usize {
        self.state.acquisitions.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.state.releases.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    state: Arc<LockState>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.state.locked.store(false, Ordering::SeqCst);
        self.state.releases.fetch_add(1, Ordering::SeqCst);
        debug!("scroll lock released");
    }
}
