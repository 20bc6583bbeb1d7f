//! Lazily initialized, process-wide single instance.
//!
//! `Singleton<T>` is meant to live in a `static`. It hands out `&'static T`
//! from a shared accessor ([`Singleton::get_or_init`]) and rejects any attempt
//! to install a second value ([`Singleton::try_init`]).

use std::sync::OnceLock;

use crate::error::DuplicateSingletonError;

#[derive(Debug)]
pub struct Singleton<T> {
    cell: OnceLock<T>,
}

impl<T> Singleton<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the instance, creating it with `init` on first access.
    ///
    /// Repeated calls return the same instance; `init` runs at most once.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(|| {
            tracing::debug!(type_name = type_name::<T>(), "singleton initialized");
            init()
        })
    }

    /// Installs the instance built by `init`.
    ///
    /// Fails with [`DuplicateSingletonError`] when an instance already exists;
    /// in that case `init` is not run and the existing instance is untouched.
    pub fn try_init(&self, init: impl FnOnce() -> T) -> Result<&T, DuplicateSingletonError> {
        let mut installed = false;
        let value = self.get_or_init(|| {
            installed = true;
            init()
        });

        if installed {
            Ok(value)
        } else {
            tracing::debug!(type_name = type_name::<T>(), "rejected duplicate singleton");
            Err(DuplicateSingletonError::new(type_name::<T>()))
        }
    }

    /// Returns the instance if it has been created.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn type_name<T>() -> &'static str {
    std::any::type_name::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    #[test]
    fn get_or_init_creates_once_and_returns_same_instance() {
        let cell: Singleton<Vec<u32>> = Singleton::new();
        let calls = Cell::new(0);

        let first = cell.get_or_init(|| {
            calls.set(calls.get() + 1);
            vec![1, 2, 3]
        });
        let second = cell.get_or_init(|| {
            calls.set(calls.get() + 1);
            vec![9]
        });

        assert!(std::ptr::eq(first, second));
        assert_eq!(second, &vec![1, 2, 3]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn get_is_none_until_initialized() {
        let cell: Singleton<String> = Singleton::new();
        assert!(cell.get().is_none());
        assert!(!cell.is_initialized());

        cell.get_or_init(|| "ready".to_string());
        assert_eq!(cell.get().map(String::as_str), Some("ready"));
        assert!(cell.is_initialized());
    }

    #[test]
    fn try_init_installs_when_empty() {
        let cell: Singleton<u32> = Singleton::new();
        let value = cell.try_init(|| 7).unwrap();
        assert_eq!(*value, 7);
        assert_eq!(cell.get(), Some(&7));
    }

    #[test]
    fn try_init_rejects_second_instance_without_running_init() {
        let cell: Singleton<u32> = Singleton::new();
        cell.try_init(|| 1).unwrap();

        let ran = Cell::new(false);
        let err = cell
            .try_init(|| {
                ran.set(true);
                2
            })
            .unwrap_err();

        assert!(!ran.get());
        assert_eq!(err.type_name(), "u32");
        assert_eq!(cell.get(), Some(&1));
    }

    #[test]
    fn try_init_after_shared_access_is_rejected() {
        let cell: Singleton<u32> = Singleton::new();
        cell.get_or_init(|| 5);

        let err = cell.try_init(|| 6).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(cell.get(), Some(&5));
    }

    #[test]
    fn static_cell_is_shared_across_threads() {
        static SHARED: Singleton<String> = Singleton::new();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let value = SHARED.get_or_init(|| format!("thread-{i}"));
                    value as *const String as usize
                })
            })
            .collect();

        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
