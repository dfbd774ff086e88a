//! The default process-wide registry.
//!
//! Every singleton acquired through the crate-level free functions lives here, from its
//! first acquisition until the process exits. Use `define_registry!` for an isolated one.
//!
//! # Examples
//!
//! ```
//! use restaurant_patterns::{acquire, Cheeseburger};
//!
//! let burger1 = acquire::<Cheeseburger>();
//! let burger2 = acquire::<Cheeseburger>();
//!
//! burger1.with_mut(|b| b.add_topping("pickles"));
//! assert!(burger2.with(|b| b.toppings().iter().any(|t| t == "pickles")));
//! assert_eq!(burger1, burger2);
//! ```

use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
};

use crate::registry_trait::{RegistryApi, Singleton, StorageCell, TraceCell};
use crate::{RegistryEvent, Shared};

/// Global thread-safe storage of singleton slots.
static GLOBAL_STORAGE: StorageCell = LazyLock::new(|| Mutex::new(HashMap::new()));

/// Holds an optional user-defined tracing callback for the default registry.
static GLOBAL_TRACE: TraceCell = LazyLock::new(|| Mutex::new(None));

/// Zero-sized accessor for the default registry.
///
/// Pass [`GLOBAL`] wherever a `RegistryApi` implementor is expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl RegistryApi for Global {
    fn storage() -> &'static StorageCell {
        &GLOBAL_STORAGE
    }

    fn trace() -> &'static TraceCell {
        &GLOBAL_TRACE
    }
}

/// The default registry.
pub const GLOBAL: Global = Global;

/// Acquires the single instance of `T` from the default registry, creating it on first use.
///
/// # Examples
///
/// ```
/// use restaurant_patterns::{acquire, Cheeseburger};
///
/// assert!(acquire::<Cheeseburger>() == acquire::<Cheeseburger>());
/// ```
pub fn acquire<T: Singleton>() -> Shared<T> {
    GLOBAL.acquire()
}

/// Checks whether the singleton for `T` has been created in the default registry.
pub fn contains<T: Singleton>() -> bool {
    GLOBAL.contains::<T>()
}

/// Returns the singleton for `T` from the default registry if it already exists.
pub fn peek<T: Singleton>() -> Option<Shared<T>> {
    GLOBAL.peek()
}

/// Sets a tracing callback invoked on every interaction with the default registry.
///
/// # Example
/// ```rust
/// use restaurant_patterns::set_trace_callback;
///
/// set_trace_callback(|event| println!("[registry-trace] {}", event));
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    GLOBAL.set_trace_callback(callback)
}

/// Clears the tracing callback of the default registry.
pub fn clear_trace_callback() {
    GLOBAL.clear_trace_callback()
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
