//! The five restaurant demonstrations, printed in a fixed order.
//!
//! Each demo writes to the given sink so the binary can point it at stdout and tests can
//! capture it. The singleton demo acquires from whichever registry it is handed.

use std::io::Write;

use crate::{
    Cheeseburger, Coffee, Error, Menu, MenuItem, Order, Priced, PricedExt, RegistryApi,
    RestaurantFacade,
};

/// A demonstration, in the order they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Pattern {
    Builder,
    Singleton,
    Decorator,
    Facade,
    Composite,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Builder,
        Pattern::Singleton,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Composite,
    ];
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print builder snapshots as JSON instead of the object dump.
    pub json: bool,
}

/// Run the selected demos in their fixed order. An empty selection runs all of them.
pub fn run<R: RegistryApi>(
    registry: &R,
    selection: &[Pattern],
    options: &Options,
    out: &mut impl Write,
) -> Result<(), Error> {
    for pattern in Pattern::ALL {
        if !selection.is_empty() && !selection.contains(&pattern) {
            continue;
        }

        tracing::debug!(?pattern, "running demo");
        match pattern {
            Pattern::Builder => builder(options, out)?,
            Pattern::Singleton => singleton(registry, out)?,
            Pattern::Decorator => decorator(out)?,
            Pattern::Facade => facade(out)?,
            Pattern::Composite => composite(out)?,
        }
    }

    out.flush()?;
    Ok(())
}

pub fn builder(options: &Options, out: &mut impl Write) -> Result<(), Error> {
    let order1 = Order::builder()
        .drink("Coke")
        .main_course("Burger")
        .dessert("Pie")
        .build();
    let order2 = Order::builder().drink("Sprite").main_course("Pizza").build();

    for order in [&order1, &order2] {
        if options.json {
            writeln!(out, "{}", serde_json::to_string(order)?)?;
        } else {
            writeln!(out, "{order}")?;
        }
    }
    Ok(())
}

pub fn singleton<R: RegistryApi>(registry: &R, out: &mut impl Write) -> Result<(), Error> {
    let burger1 = registry.acquire::<Cheeseburger>();
    let burger2 = registry.acquire::<Cheeseburger>();

    // Written through one handle, read through both.
    burger1.with_mut(|burger| burger.replace_topping(1, "onions"));

    writeln!(out, "{}", burger1.with(Cheeseburger::describe))?;
    writeln!(out, "{}", burger2.with(Cheeseburger::describe))?;
    writeln!(out, "{}", burger1 == burger2)?;
    Ok(())
}

pub fn decorator(out: &mut impl Write) -> Result<(), Error> {
    let coffee1 = Coffee.with_milk().size_xl();
    let coffee2 = Coffee.with_sugar();

    writeln!(out, "{} {}", coffee1.cost(), coffee2.cost())?;
    Ok(())
}

pub fn facade(out: &mut impl Write) -> Result<(), Error> {
    RestaurantFacade::new().order_food("Pizza", out)?;
    Ok(())
}

pub fn composite(out: &mut impl Write) -> Result<(), Error> {
    let mut main_menu = Menu::new();
    main_menu
        .add(MenuItem::new("Pizza"))
        .add(MenuItem::new(Coffee.description()))
        .add(MenuItem::new("Cheeseburger"));

    main_menu.display(out)?;
    Ok(())
}
