//! Core trait defining registry behavior.
//!
//! This module provides the `RegistryApi` trait with default implementations for
//! lazy, once-only creation of singleton instances and for tracing.
//!
//! The registry is type-based: each type (`TypeId`) owns at most one slot, filled on the
//! first `acquire` and never replaced afterwards. Every acquirer receives a [`Shared`]
//! handle to that same slot.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use crate::{RegistryEvent, Shared};

/// Storage static backing a registry.
///
/// Note: `define_registry!` declares its statics with this alias.
pub type StorageCell = LazyLock<Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>>;

/// User-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the registry is
/// interacted with. It must be thread-safe because registries are process-wide.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Trace callback static backing a registry.
pub type TraceCell = LazyLock<Mutex<Option<Arc<TraceCallback>>>>;

/// A type with exactly one logical instance per registry.
///
/// `initialize` is the fixed construction sequence. It runs once, on the first
/// [`RegistryApi::acquire`] for the type, while the registry lock is held; it must not
/// acquire from the same registry.
pub trait Singleton: Send + 'static {
    fn initialize() -> Self;
}

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// two accessor methods (`storage` and `trace`) to be implemented by the implementor.
pub trait RegistryApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceCell;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback will be invoked for every registry operation (acquire, contains, peek).
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method recovers by extracting the inner value.
    ///
    /// # Safety Restrictions
    ///
    /// The callback must NOT call any registry methods on the same registry,
    /// as this will cause a deadlock. The callback is invoked while holding
    /// the trace lock.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Events are still mirrored to `tracing` at debug level.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a registry event to `tracing` and to the current callback, if any.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic will propagate to the caller.
    /// The storage lock is not held during callback execution.
    fn emit_event(&self, event: &RegistryEvent) {
        tracing::debug!(target: "restaurant_patterns::registry", %event, "registry event");

        let guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    fn storage() -> &'static StorageCell;

    /// Acquire the single instance of `T`, creating it on first use.
    ///
    /// The lookup and the one-time `T::initialize()` happen under the storage lock, so
    /// concurrent first calls still initialise exactly once. Later calls return a handle to
    /// the same storage; nothing is re-initialised and earlier mutations stay visible.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// A poisoned storage lock is recovered. Slots are only ever inserted, never
    /// rewritten, so the map stays consistent.
    fn acquire<T: Singleton>(&self) -> Shared<T> {
        let (shared, created) = {
            let mut map = Self::storage().lock().unwrap_or_else(|p| p.into_inner());

            match map
                .get(&TypeId::of::<T>())
                .and_then(|slot| slot.downcast_ref::<Shared<T>>())
            {
                Some(existing) => (existing.clone(), false),
                None => {
                    let shared = Shared::new(T::initialize());
                    map.insert(TypeId::of::<T>(), Box::new(shared.clone()));
                    (shared, true)
                }
            }
        };

        self.emit_event(&RegistryEvent::Acquire {
            type_name: std::any::type_name::<T>(),
            created,
        });

        shared
    }

    /// Check whether the singleton for `T` has been created. Never creates it.
    fn contains<T: Singleton>(&self) -> bool {
        let found = Self::storage()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains_key(&TypeId::of::<T>());

        self.emit_event(&RegistryEvent::Contains {
            type_name: std::any::type_name::<T>(),
            found,
        });

        found
    }

    /// Return the singleton for `T` only if it already exists.
    fn peek<T: Singleton>(&self) -> Option<Shared<T>> {
        let shared = Self::storage()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref::<Shared<T>>())
            .cloned();

        self.emit_event(&RegistryEvent::Peek {
            type_name: std::any::type_name::<T>(),
            found: shared.is_some(),
        });

        shared
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
