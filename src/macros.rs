//! Macros for creating isolated singleton registries.
//!
//! Each registry owns its storage and trace callback, so the same singleton type can have
//! one instance per registry without the registries seeing each other.

/// Creates a complete singleton registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `RegistryApi`, and an `API` constant of it
/// - Free functions mirroring the crate-level ones
///
/// # Examples
///
/// ```rust
/// use restaurant_patterns::{define_registry, Cheeseburger};
///
/// define_registry!(kitchen);
///
/// let burger1 = kitchen::acquire::<Cheeseburger>();
/// let burger2 = kitchen::acquire::<Cheeseburger>();
///
/// burger1.with_mut(|b| b.add_topping("bacon"));
/// assert_eq!(burger2.with(|b| b.toppings().len()), 5);
/// assert_eq!(burger1, burger2);
/// ```
///
/// # Multiple Registries
///
/// ```rust
/// use restaurant_patterns::{define_registry, Cheeseburger};
///
/// define_registry!(lunch);
/// define_registry!(dinner);
///
/// let a = lunch::acquire::<Cheeseburger>();
/// let b = dinner::acquire::<Cheeseburger>();
///
/// // Same type, separate instances
/// assert_ne!(a, b);
/// ```
///
/// # Trait-Based Usage
///
/// ```rust
/// use restaurant_patterns::{define_registry, Cheeseburger, RegistryApi};
///
/// define_registry!(app);
///
/// let burger = app::API.acquire::<Cheeseburger>();
/// assert!(app::API.contains::<Cheeseburger>());
/// # drop(burger);
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::collections::HashMap;
            use std::sync::{LazyLock, Mutex};

            // Storage for singleton slots (module-private)
            static STORAGE: $crate::StorageCell = LazyLock::new(|| Mutex::new(HashMap::new()));

            // Trace callback storage (module-private)
            static TRACE: $crate::TraceCell = LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the registry API.
            ///
            /// All registry operations are provided by the `RegistryApi` trait's
            /// default implementations. This struct only provides access to the statics.
            #[derive(Debug, Clone, Copy, Default)]
            pub struct Api;

            impl $crate::RegistryApi for Api {
                fn storage() -> &'static $crate::StorageCell {
                    &STORAGE
                }

                fn trace() -> &'static $crate::TraceCell {
                    &TRACE
                }
            }

            /// Constant for trait-based access to this registry.
            pub const API: Api = Api;

            /// Acquire the single instance of `T`, creating it on first use.
            pub fn acquire<T: $crate::Singleton>() -> $crate::Shared<T> {
                use $crate::RegistryApi;
                API.acquire()
            }

            /// Check whether the singleton for `T` has been created.
            pub fn contains<T: $crate::Singleton>() -> bool {
                use $crate::RegistryApi;
                API.contains::<T>()
            }

            /// Return the singleton for `T` if it already exists.
            pub fn peek<T: $crate::Singleton>() -> Option<$crate::Shared<T>> {
                use $crate::RegistryApi;
                API.peek()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::RegistryApi;
                API.clear_trace_callback()
            }
        }
    };
}
