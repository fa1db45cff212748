//! `Shared<T>` — an explicitly-passed handle to one shared instance.
//!
//! A hidden global accessor couples every caller to the same static cell
//! and makes the instance's lifetime invisible.  `Shared<T>` is the
//! alternative: construct the one instance during startup, then hand a
//! cheap handle to each consumer.  Cloning a handle never duplicates the
//! instance; all clones are pointer-identical views of the same object,
//! and the instance is dropped when the last handle goes away.

use std::fmt;
use std::sync::Arc;

/// A cloneable handle to a single shared instance of `T`.
///
/// # Example
/// ```
/// use sole::shared::Shared;
///
/// struct Pool {
///     size: usize,
/// }
///
/// fn worker(pool: Shared<Pool>) -> usize {
///     pool.get().size
/// }
///
/// let pool = Shared::new(Pool { size: 4 });
/// assert_eq!(worker(pool.clone()), 4);
/// assert_eq!(worker(pool), 4);
/// ```
pub struct Shared<T> {
    inner: Arc<T>,
}

impl<T> Shared<T> {
    /// Construct the one instance and the first handle to it.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Create a handle from an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self { inner: arc }
    }

    /// Borrow the shared instance.
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Return a reference to the inner `Arc<T>`.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.inner
    }

    /// Return `true` if `self` and `other` are handles to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to the instance.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

// A derived Clone would demand `T: Clone`; handles clone regardless.
impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({:?})", self.inner)
    }
}
