//! Macro for creating isolated singleton registries.

/// Creates a singleton registry module with a single macro invocation.
///
/// The generated module contains a private storage static, an `Api` type
/// implementing `SingletonRegistry`, and free functions delegating to it.
/// Every invocation owns its own storage, so the same type gets one instance
/// per registry.
///
/// # Examples
///
/// ```rust
/// use creational_patterns::define_singleton_registry;
/// use std::sync::Arc;
///
/// define_singleton_registry!(left);
/// define_singleton_registry!(right);
///
/// let l: Arc<String> = left::get_instance_with(|| "left".to_string());
/// let r: Arc<String> = right::get_instance_with(|| "right".to_string());
///
/// assert!(Arc::ptr_eq(&l, &left::get_instance::<String>()));
/// assert!(!Arc::ptr_eq(&l, &r));
/// ```
#[macro_export]
macro_rules! define_singleton_registry {
    ($name:ident) => {
        #[allow(dead_code)]
        pub mod $name {
            use std::collections::HashMap;
            use std::sync::{Arc, LazyLock, Mutex};

            static STORAGE: $crate::SingletonStorage =
                LazyLock::new(|| Mutex::new(HashMap::new()));

            /// Zero-sized type that implements the registry API.
            pub struct Api;

            impl $crate::SingletonRegistry for Api {
                fn storage() -> &'static $crate::SingletonStorage {
                    &STORAGE
                }
            }

            /// Constant for trait-based access to this registry.
            pub const API: Api = Api;

            /// Return the shared instance of `T`, creating it with `T::default()` on first use.
            pub fn get_instance<T>() -> Arc<T>
            where
                T: Default + Send + Sync + 'static,
            {
                use $crate::SingletonRegistry;
                API.get_instance()
            }

            /// Return the shared instance of `T`, creating it with `init` on first use.
            pub fn get_instance_with<T, F>(init: F) -> Arc<T>
            where
                T: Send + Sync + 'static,
                F: FnOnce() -> T,
            {
                use $crate::SingletonRegistry;
                API.get_instance_with(init)
            }
        }
    };
}
