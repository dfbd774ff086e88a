//! Aliased handle to a registry-owned singleton.
//!
//! A [`Shared<T>`] is what [`acquire`](crate::acquire) hands out. Every handle for the same
//! registry slot points at the same storage, so a mutation made through one handle is seen
//! through all of them. Equality is identity, not value.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Handle to the single instance of `T` held by a registry.
///
/// Cloning a handle never clones the value; it adds another alias to the same storage.
pub struct Shared<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Shared<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }

    /// Run `f` with shared access to the instance.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// A poisoned lock is recovered by taking the inner value; a panic in another holder
    /// never makes the singleton unreachable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        f(&guard)
    }

    /// Run `f` with exclusive access to the instance.
    ///
    /// The change is visible through every other handle once `f` returns.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut guard)
    }

    /// Whether both handles denote the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this instance, the registry's own slot included.
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<T: Clone> Shared<T> {
    /// Copy the current value out of the shared storage.
    pub fn snapshot(&self) -> T {
        self.with(T::clone)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Shared<T> {}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Shared").field(value).finish())
    }
}
