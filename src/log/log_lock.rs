use std::sync::{Condvar, Mutex, PoisonError};

/// Mutual-exclusion hook run around a whole dispatch.
///
/// [`Logger::log`](crate::Logger::log) calls [`lock`](Self::lock) once before the
/// first sink renders and [`unlock`](Self::unlock) once after the last one.
/// A closure `Fn(bool)` also works: it receives `true` to acquire and `false`
/// to release.
pub trait LogLock: Send + Sync {
    fn lock(&self);
    fn unlock(&self);
}

impl<F> LogLock for F
where
    F: Fn(bool) + Send + Sync,
{
    fn lock(&self) {
        self(true);
    }

    fn unlock(&self) {
        self(false);
    }
}

/// A ready-made [`LogLock`] that blocks other dispatching threads until released.
#[derive(Debug, Default)]
pub struct BlockingLock {
    held: Mutex<bool>,
    cond: Condvar,
}

impl BlockingLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogLock for BlockingLock {
    fn lock(&self) {
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        while *held {
            held = self.cond.wait(held).unwrap_or_else(PoisonError::into_inner);
        }
        *held = true;
    }

    fn unlock(&self) {
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        *held = false;
        drop(held);
        self.cond.notify_one();
    }
}

/// Holds an acquired [`LogLock`] and releases it on drop, even while unwinding.
pub(crate) struct LockGuard<'a> {
    lock: Option<&'a dyn LogLock>,
}

impl<'a> LockGuard<'a> {
    pub(crate) fn acquire(lock: Option<&'a dyn LogLock>) -> Self {
        if let Some(l) = lock {
            l.lock();
        }
        Self { lock }
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        if let Some(l) = self.lock {
            l.unlock();
        }
    }
}
