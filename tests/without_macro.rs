//! Integration tests using a registry implemented WITHOUT the macro.
//!
//! Shows the manual setup the macro expands to: two statics plus a zero-sized type
//! implementing `RegistryApi`.
//!
//! NOTE: All tests use #[serial] because they share the same static registry (MY_REGISTRY).

use restaurant_patterns::{
    Cheeseburger, RegistryApi, RegistryEvent, Singleton, StorageCell, TraceCell,
};
use serial_test::serial;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

// ============================================================================
// Manual Registry Implementation (Without Macro)
// ============================================================================

static MY_STORAGE: StorageCell = LazyLock::new(|| Mutex::new(HashMap::new()));

static MY_TRACE: TraceCell = LazyLock::new(|| Mutex::new(None));

struct MyRegistry;

impl RegistryApi for MyRegistry {
    fn storage() -> &'static StorageCell {
        &MY_STORAGE
    }

    fn trace() -> &'static TraceCell {
        &MY_TRACE
    }
}

const MY_REGISTRY: MyRegistry = MyRegistry;

/// Kitchen-wide tally of orders, one per registry.
#[derive(Debug, Clone, PartialEq)]
struct OrderTally {
    served: u32,
}

impl Singleton for OrderTally {
    fn initialize() -> Self {
        OrderTally { served: 0 }
    }
}

// ============================================================================
// Tests Using Manual Implementation
// ============================================================================

#[test]
#[serial]
fn test_acquire_cheeseburger() {
    let burger = MY_REGISTRY.acquire::<Cheeseburger>();
    assert_eq!(burger.with(|b| b.toppings()[0].clone()), "cheese");
    assert!(burger == MY_REGISTRY.acquire::<Cheeseburger>());
}

#[test]
#[serial]
fn test_tally_accumulates_across_handles() {
    let before = MY_REGISTRY.acquire::<OrderTally>().with(|t| t.served);

    for _ in 0..3 {
        let tally = MY_REGISTRY.acquire::<OrderTally>();
        tally.with_mut(|t| t.served += 1);
    }

    let tally = MY_REGISTRY.acquire::<OrderTally>();
    assert_eq!(tally.with(|t| t.served), before + 3);
}

#[test]
#[serial]
fn test_peek_matches_acquire() {
    let acquired = MY_REGISTRY.acquire::<OrderTally>();
    let peeked = MY_REGISTRY.peek::<OrderTally>().unwrap();
    assert_eq!(acquired, peeked);
    assert!(MY_REGISTRY.contains::<OrderTally>());
}

#[test]
#[serial]
fn test_manual_registry_tracing() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    MY_REGISTRY.set_trace_callback(move |event: &RegistryEvent| {
        events_clone.lock().unwrap().push(event.clone());
    });

    let _ = MY_REGISTRY.acquire::<Cheeseburger>();
    let _ = MY_REGISTRY.contains::<Cheeseburger>();

    MY_REGISTRY.clear_trace_callback();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(matches!(captured[0], RegistryEvent::Acquire { .. }));
    assert!(matches!(
        captured[1],
        RegistryEvent::Contains { found: true, .. }
    ));
}
