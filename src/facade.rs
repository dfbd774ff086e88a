//! One call to order food; the waiter and chef stay behind the counter.

use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct Chef;

impl Chef {
    pub fn cook(&self, item: &str, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Cooking {item}...")
    }
}

#[derive(Debug, Default)]
pub struct Waiter;

impl Waiter {
    pub fn take_order(&self, item: &str, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Order received for {item}")
    }

    pub fn serve(&self, item: &str, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Serving {item}...")
    }
}

/// Front of house: takes the order, has it cooked, serves it.
#[derive(Debug, Default)]
pub struct RestaurantFacade {
    chef: Chef,
    waiter: Waiter,
}

impl RestaurantFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_food(&self, item: &str, out: &mut impl Write) -> io::Result<()> {
        tracing::debug!(item, "order placed");

        self.waiter.take_order(item, out)?;
        self.chef.cook(item, out)?;
        self.waiter.serve(item, out)
    }
}
