//! The singleton cheeseburger.

use crate::Singleton;

/// Toppings every cheeseburger starts with, in order.
pub const HOUSE_TOPPINGS: [&str; 4] = ["cheese", "lettuce", "tomato", "beef patty"];

/// A cheeseburger with an ordered list of toppings.
///
/// Acquire it through a registry to get the one shared burger; mutations made through any
/// handle show up through every other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cheeseburger {
    toppings: Vec<String>,
}

impl Cheeseburger {
    pub fn add_topping(&mut self, topping: impl Into<String>) {
        self.toppings.push(topping.into());
    }

    /// Overwrite the topping at `index`, returning the one it replaced.
    ///
    /// An index past the end leaves the burger untouched and returns `None`.
    pub fn replace_topping(&mut self, index: usize, topping: impl Into<String>) -> Option<String> {
        self.toppings
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, topping.into()))
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn describe(&self) -> String {
        format!(
            "A cheeseburger with toppings: {}",
            self.toppings.join(", ")
        )
    }
}

impl Singleton for Cheeseburger {
    fn initialize() -> Self {
        let mut burger = Cheeseburger {
            toppings: Vec::with_capacity(HOUSE_TOPPINGS.len()),
        };
        for topping in HOUSE_TOPPINGS {
            burger.add_topping(topping);
        }
        burger
    }
}
