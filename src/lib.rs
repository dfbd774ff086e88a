//! # Restaurant Patterns
//!
//! Classic object-composition patterns served restaurant style, built around a
//! thread-safe singleton registry.
//!
//! The registry hands out exactly one instance per singleton type. The instance is
//! created on first acquisition, never replaced, and every acquirer aliases the same
//! storage through a [`Shared`] handle.
//!
//! ## Quick Start
//!
//! ```rust
//! use restaurant_patterns::{acquire, Cheeseburger};
//!
//! let burger1 = acquire::<Cheeseburger>();
//! let burger2 = acquire::<Cheeseburger>();
//!
//! burger1.with_mut(|b| {
//!     b.replace_topping(1, "onions");
//! });
//!
//! assert_eq!(burger1.with(Cheeseburger::describe), burger2.with(Cheeseburger::describe));
//! assert!(burger1 == burger2);
//! ```
//!
//! ## Patterns
//!
//! - **Singleton**: [`acquire`], [`Singleton`], [`Shared`], [`define_registry!`]
//! - **Builder**: [`Order::builder`] chains courses into an immutable [`Order`]
//! - **Decorator**: [`Coffee`] wrapped by [`Extra`]s through [`PricedExt`]
//! - **Facade**: [`RestaurantFacade::order_food`]
//! - **Composite**: [`Menu`] of [`MenuItem`]s and nested menus
//!
//! ## Main Functions
//!
//! - [`acquire`] - Get the one instance of a singleton type, creating it on first use
//! - [`contains`] - Check whether a singleton has been created
//! - [`peek`] - Get a singleton only if it already exists
//! - [`set_trace_callback`] - Observe registry operations

mod builder;
mod burger;
mod composite;
mod decorator;
pub mod demo;
mod error;
mod facade;
mod macros;
mod registry;
mod registry_event;
mod registry_trait;
mod shared;

pub use builder::{Order, OrderBuilder};
pub use burger::{Cheeseburger, HOUSE_TOPPINGS};
pub use composite::{Menu, MenuItem, MenuNode};
pub use decorator::{Coffee, Decorated, Extra, Priced, PricedExt};
pub use error::Error;
pub use facade::{Chef, RestaurantFacade, Waiter};
pub use registry::{
    acquire, clear_trace_callback, contains, peek, set_trace_callback, Global, GLOBAL,
};
pub use registry_event::RegistryEvent;
pub use registry_trait::{RegistryApi, Singleton, StorageCell, TraceCallback, TraceCell};
pub use shared::Shared;
