//! Set-once cells, lazy statics, and the `instance()` accessor pattern.
//!
//! Three flavors of "exactly one instance per process", from most to least
//! explicit:
//!
//! * [`Singleton<T>`] — a set-once cell for values installed at startup
//!   (`install` / `get`) or computed on first access (`get_or_init`).
//! * [`define_singleton!`] — declares a `static` backed by [`LazyLock`],
//!   for singletons naturally expressed as a static value.
//! * [`singleton!`] — attaches the canonical `Type::instance()` accessor to
//!   a type, backed by a hidden [`OnceLock`][std::sync::OnceLock].
//!
//! First access is race-free in every flavor: when several threads arrive
//! before construction has happened, exactly one initializer runs and all
//! callers observe the same object.  Every reference handed out for the
//! lifetime of the process refers to that one object.
//!
//! A singleton type should not implement `Clone` or `Copy`.  The accessor
//! hands out shared references, and without those impls the compiler rejects
//! every attempt to duplicate the instance:
//!
//! ```compile_fail
//! use sole::singleton;
//!
//! struct Logger {
//!     level: u8,
//! }
//! singleton!(Logger, LOGGER, Logger { level: 0 });
//!
//! // Copy-constructing a second instance from the first does not compile:
//! let duplicate: Logger = *Logger::instance();
//! ```
//!
//! Copy-assignment is rejected the same way; the accessor never yields the
//! `&mut` an assignment would need:
//!
//! ```compile_fail
//! use sole::singleton;
//!
//! struct Logger {
//!     level: u8,
//! }
//! singleton!(Logger, LOGGER, Logger { level: 0 });
//!
//! *Logger::instance() = Logger { level: 1 };
//! ```

use std::fmt;
use std::sync::OnceLock;

use crate::errors::{Error, Result};

/// Re-export of the canonical lazily-initialized static container.
pub use std::sync::LazyLock;

/// A set-once cell holding at most one value for the life of the process.
///
/// `Singleton<T>` is usable in `static` position via [`Singleton::new`],
/// which is `const`.  The cell starts empty; the first successful
/// [`install`][Singleton::install] or `get_or_*` call fills it, and from
/// then on every read returns a reference to that same value.
///
/// # Example
/// ```
/// use sole::singleton::Singleton;
///
/// struct Config {
///     verbose: bool,
/// }
///
/// static CONFIG: Singleton<Config> = Singleton::new();
///
/// CONFIG.install(Config { verbose: true }).unwrap();
/// assert!(CONFIG.get().unwrap().verbose);
/// ```
pub struct Singleton<T> {
    cell: OnceLock<T>,
}

impl<T> Singleton<T> {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Install `value` as the one instance.
    ///
    /// Fails with [`Error::AlreadyInstalled`] if a value is already present;
    /// the previously installed value is untouched and `value` is dropped.
    pub fn install(&self, value: T) -> Result<()> {
        self.cell.set(value).map_err(|_| Error::AlreadyInstalled)
    }

    /// Borrow the installed value.
    ///
    /// Fails with [`Error::NotInstalled`] if nothing has been installed yet.
    pub fn get(&self) -> Result<&T> {
        self.cell.get().ok_or(Error::NotInstalled)
    }

    /// Borrow the installed value, or `None` if the cell is still empty.
    pub fn try_get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Borrow the value, running `init` first if the cell is empty.
    ///
    /// When several threads race on an empty cell, exactly one `init` runs;
    /// the others block until it finishes and then observe its result.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(init)
    }

    /// Borrow the value, running the fallible `init` first if the cell is
    /// empty.
    ///
    /// An `Err` from `init` propagates to the caller and leaves the cell
    /// empty, so a later call may retry.  If two threads race past the
    /// emptiness check, both initializers may run; one constructed value
    /// wins and the other is dropped.
    ///
    /// # Example
    /// ```
    /// use sole::errors::Error;
    /// use sole::singleton::Singleton;
    ///
    /// let cell: Singleton<u16> = Singleton::new();
    ///
    /// let failed = cell.get_or_try_init(|| {
    ///     Err(Error::Initialization("port file missing".into()))
    /// });
    /// assert!(failed.is_err());
    /// assert!(!cell.is_installed());
    ///
    /// let port = cell.get_or_try_init(|| Ok(8080))?;
    /// assert_eq!(*port, 8080);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn get_or_try_init<F>(&self, init: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value = init()?;
        Ok(self.cell.get_or_init(|| value))
    }

    /// Return `true` if a value has been installed.
    pub fn is_installed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(v) => write!(f, "Singleton({:?})", v),
            None => write!(f, "Singleton(empty)"),
        }
    }
}

/// Declare a `static` singleton backed by [`LazyLock`].
///
/// The value is constructed on first access; later accesses observe the
/// same object.
///
/// # Example
/// ```
/// use sole::define_singleton;
///
/// struct Registry {
///     entries: Vec<String>,
/// }
///
/// define_singleton!(REGISTRY, Registry, Registry { entries: Vec::new() });
///
/// assert!(REGISTRY.entries.is_empty());
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($vis:vis $name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialized process-wide singleton.
        $vis static $name: $crate::singleton::LazyLock<$ty> =
            $crate::singleton::LazyLock::new(|| $init);
    };
}

/// Attach a `Type::instance()` accessor returning the one shared instance.
///
/// The first call constructs the instance; every call returns a reference
/// to the same object.  With two arguments the instance is built with
/// `Type::new()`; a third argument supplies the constructing expression.
///
/// # Example
/// ```
/// use sole::singleton;
///
/// struct Clock {
///     epoch: u64,
/// }
/// singleton!(Clock, CLOCK, Clock { epoch: 0 });
///
/// let a = Clock::instance();
/// let b = Clock::instance();
/// assert!(std::ptr::eq(a, b));
/// ```
#[macro_export]
macro_rules! singleton {
    ($ty:ty, $cell:ident) => {
        $crate::singleton!($ty, $cell, <$ty>::new());
    };

    ($ty:ty, $cell:ident, $init:expr) => {
        static $cell: std::sync::OnceLock<$ty> = std::sync::OnceLock::new();

        impl $ty {
            /// Return a reference to the process-wide instance, constructing
            /// it on first access.
            pub fn instance() -> &'static $ty {
                $cell.get_or_init(|| $init)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_then_get() {
        let cell = Singleton::new();
        cell.install(7_u32).unwrap();
        assert_eq!(cell.get().unwrap(), &7);
        assert!(cell.is_installed());
    }

    #[test]
    fn get_before_install() {
        let cell: Singleton<u32> = Singleton::new();
        assert_eq!(cell.get(), Err(Error::NotInstalled));
        assert_eq!(cell.try_get(), None);
        assert!(!cell.is_installed());
    }

    #[test]
    fn second_install_rejected() {
        let cell = Singleton::new();
        cell.install("first").unwrap();
        assert_eq!(cell.install("second"), Err(Error::AlreadyInstalled));
        assert_eq!(cell.get().unwrap(), &"first");
    }

    #[test]
    fn debug_formats_both_states() {
        let cell: Singleton<u32> = Singleton::new();
        assert_eq!(format!("{:?}", cell), "Singleton(empty)");
        cell.install(3).unwrap();
        assert_eq!(format!("{:?}", cell), "Singleton(3)");
    }
}
