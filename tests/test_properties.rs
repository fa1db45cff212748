//! Property tests for install-once semantics.

use proptest::prelude::*;

use sole::errors::Error;
use sole::singleton::Singleton;

proptest! {
    /// Whatever sequence of candidate values arrives, only the first
    /// installation wins and every later read observes it at the same
    /// address.
    #[test]
    fn first_install_wins(values in proptest::collection::vec(any::<u64>(), 1..8)) {
        let cell = Singleton::new();

        prop_assert!(cell.install(values[0]).is_ok());
        for &value in &values[1..] {
            prop_assert_eq!(cell.install(value), Err(Error::AlreadyInstalled));
        }

        prop_assert_eq!(cell.get().unwrap(), &values[0]);
        let first = cell.get().unwrap();
        let second = cell.get().unwrap();
        prop_assert!(std::ptr::eq(first, second));
    }

    /// A cell never reports a value it was not given, and an empty cell
    /// consistently reports `NotInstalled`.
    #[test]
    fn empty_cell_is_consistently_empty(reads in 1usize..16) {
        let cell: Singleton<u64> = Singleton::new();
        for _ in 0..reads {
            prop_assert_eq!(cell.get(), Err(Error::NotInstalled));
            prop_assert!(cell.try_get().is_none());
            prop_assert!(!cell.is_installed());
        }
    }
}
