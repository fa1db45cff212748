//! # sole
//!
//! Process-wide single-instance primitives.
//!
//! This crate provides the building blocks for declaring that a type has at
//! most one instance for the lifetime of the process: a set-once cell
//! ([`Singleton`]), a lazily-initialized static declaration
//! ([`define_singleton!`]), the canonical `Type::instance()` accessor
//! ([`singleton!`]), and an explicitly-passed handle ([`Shared`]) for code
//! that prefers dependency injection over a global accessor.
//!
//! First-access construction is race-free in all flavors: concurrent first
//! calls observe exactly one construction, synchronized by the standard
//! library's once-initialization primitives.  Identity is guaranteed:
//! every access yields a reference to the same underlying object.
//!
//! ## Quick start
//!
//! ```
//! use sole::singleton;
//!
//! struct Registry {
//!     routes: Vec<String>,
//! }
//! singleton!(Registry, REGISTRY, Registry { routes: Vec::new() });
//!
//! let a = Registry::instance();
//! let b = Registry::instance();
//! assert!(std::ptr::eq(a, b));
//! ```
//!
//! Keep the guarded type free of `Clone` and `Copy` impls and the compiler
//! rejects every attempt to duplicate the instance — see the
//! [`singleton`](mod@crate::singleton) module docs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `Result` alias.
pub mod errors;

/// Explicitly-passed shared handles (the dependency-injection alternative).
pub mod shared;

/// Set-once cells, lazy statics, and the `instance()` accessor pattern.
pub mod singleton;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use shared::Shared;
pub use singleton::{LazyLock, Singleton};
