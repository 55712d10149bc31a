//! Singleton pattern backed by a per-type instance registry.
//!
//! A registry holds at most one instance per type. The first request for a
//! type constructs it; every later request returns the identical `Arc`.
//! Instances live as long as the registry's statics, i.e. the whole process,
//! and there is no way to remove one.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

/// Storage static backing a registry: one type-erased instance per `TypeId`.
#[doc(hidden)]
pub type SingletonStorage = LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>;

/// Init-once access to per-type shared instances.
///
/// Implementors only point at their storage static; most code should use a
/// registry generated by [`define_singleton_registry!`](crate::define_singleton_registry).
pub trait SingletonRegistry {
    fn storage() -> &'static SingletonStorage;

    /// Return the shared instance of `T`, creating it with `T::default()` on first use.
    fn get_instance<T: Default + Send + Sync + 'static>(&self) -> Arc<T> {
        self.get_instance_with(T::default)
    }

    /// Return the shared instance of `T`, creating it with `init` on first use.
    ///
    /// `init` runs at most once per type, under the storage lock, so threads
    /// racing the first call still observe a single instance. `init` must not
    /// call into the same registry.
    ///
    /// If `init` panics, nothing is stored and the panic propagates; the next
    /// call tries again. The map is only written after `init` returns, so a
    /// lock poisoned that way is recovered.
    fn get_instance_with<T, F>(&self, init: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let type_name = std::any::type_name::<T>();
        let mut instances = Self::storage().lock().unwrap_or_else(|p| p.into_inner());

        let stored = instances
            .get(&TypeId::of::<T>())
            .and_then(|any_arc| any_arc.clone().downcast::<T>().ok());

        match stored {
            Some(instance) => {
                log::trace!("reusing singleton {}", type_name);
                instance
            }
            None => {
                let instance = Arc::new(init());
                instances.insert(TypeId::of::<T>(), instance.clone());
                log::debug!("created singleton {}", type_name);
                instance
            }
        }
    }
}

// Not re-exported, and registries have no removal operation, so the instance
// stored here is the only `Singleton` for the life of the process.
define_singleton_registry!(process);

/// A type with at most one instance per process.
///
/// `Singleton` has no public constructor and no `Default`, so
/// [`Singleton::instance`] is the only way to obtain one.
///
/// ```rust
/// use creational_patterns::Singleton;
/// use std::sync::Arc;
///
/// let one = Singleton::instance();
/// let two = Singleton::instance();
/// assert!(Arc::ptr_eq(&one, &two));
/// ```
#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    /// The process-wide instance, created on first call.
    pub fn instance() -> Arc<Singleton> {
        process::get_instance_with(|| Singleton { _private: () })
    }
}

#[cfg(test)]
mod tests {
    use super::{Singleton, SingletonRegistry, SingletonStorage};

    use std::collections::HashMap;
    use std::panic;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, LazyLock, Mutex};

    static STORAGE: SingletonStorage = LazyLock::new(|| Mutex::new(HashMap::new()));

    struct HandRolled;

    impl SingletonRegistry for HandRolled {
        fn storage() -> &'static SingletonStorage {
            &STORAGE
        }
    }

    // Each test asks for its own local types, so the shared storage above
    // never sees the same type from two tests.

    #[test]
    fn test_default_instance_is_shared() {
        #[derive(Default)]
        struct Hits(AtomicUsize);

        let one: Arc<Hits> = HandRolled.get_instance();
        one.0.fetch_add(3, Ordering::SeqCst);

        let two: Arc<Hits> = HandRolled.get_instance();
        assert!(Arc::ptr_eq(&one, &two));
        assert_eq!(two.0.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_later_initializers_are_ignored() {
        struct Label(&'static str);

        let calls = AtomicUsize::new(0);
        let make = |label| {
            calls.fetch_add(1, Ordering::SeqCst);
            Label(label)
        };

        let first = HandRolled.get_instance_with(|| make("first"));
        let second = HandRolled.get_instance_with(|| make("second"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.0, "first");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_types_do_not_collide() {
        #[derive(Default)]
        struct Width(u32);
        #[derive(Default)]
        struct Height(u32);

        let width = HandRolled.get_instance_with(|| Width(640));
        let height: Arc<Height> = HandRolled.get_instance();

        assert_eq!(width.0, 640);
        assert_eq!(height.0, 0);
    }

    #[test]
    fn test_panicking_init_leaves_registry_usable() {
        #[derive(Debug)]
        struct Fragile(u8);

        let outcome = panic::catch_unwind(|| {
            HandRolled.get_instance_with(|| -> Fragile { panic!("init failed") })
        });
        assert!(outcome.is_err());

        let recovered = HandRolled.get_instance_with(|| Fragile(7));
        assert_eq!(recovered.0, 7);

        let again = HandRolled.get_instance_with(|| Fragile(8));
        assert!(Arc::ptr_eq(&recovered, &again));
    }

    #[test]
    fn test_singleton_instance_identity() {
        let one = Singleton::instance();
        let two = Singleton::instance();
        assert!(Arc::ptr_eq(&one, &two));
    }
}
