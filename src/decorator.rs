//! Priced items with additive extras.
//!
//! An extra wraps whatever it is applied to and adds its surcharge on top. The chain is
//! built explicitly, one wrapper per extra, and the base item is never modified.
//!
//! ```
//! use restaurant_patterns::{Coffee, Priced, PricedExt};
//!
//! let latte = Coffee.with_milk().size_xl();
//! assert_eq!(latte.cost(), 10);
//! assert_eq!(latte.description(), "Coffee, milk, size XL");
//! ```

use std::fmt;

pub trait Priced {
    fn cost(&self) -> u32;

    fn description(&self) -> String;
}

impl<P: Priced + ?Sized> Priced for Box<P> {
    fn cost(&self) -> u32 {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Plain coffee, the base of every chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coffee;

impl Coffee {
    pub const BASE_COST: u32 = 5;
}

impl Priced for Coffee {
    fn cost(&self) -> u32 {
        Self::BASE_COST
    }

    fn description(&self) -> String {
        "Coffee".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extra {
    Milk,
    Sugar,
    SizeXl,
}

impl Extra {
    pub fn surcharge(self) -> u32 {
        match self {
            Extra::Milk => 2,
            Extra::Sugar => 1,
            Extra::SizeXl => 3,
        }
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extra::Milk => f.write_str("milk"),
            Extra::Sugar => f.write_str("sugar"),
            Extra::SizeXl => f.write_str("size XL"),
        }
    }
}

/// One link of the chain: the previous item plus a single extra.
pub struct Decorated {
    inner: Box<dyn Priced>,
    extra: Extra,
}

impl Decorated {
    pub fn new(inner: impl Priced + 'static, extra: Extra) -> Self {
        Self {
            inner: Box::new(inner),
            extra,
        }
    }

    pub fn extra(&self) -> Extra {
        self.extra
    }
}

impl Priced for Decorated {
    fn cost(&self) -> u32 {
        self.inner.cost() + self.extra.surcharge()
    }

    fn description(&self) -> String {
        format!("{}, {}", self.inner.description(), self.extra)
    }
}

impl fmt::Debug for Decorated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorated")
            .field("inner", &self.inner.description())
            .field("extra", &self.extra)
            .finish()
    }
}

/// Chaining helpers available on every priced item.
pub trait PricedExt: Priced + Sized + 'static {
    fn with(self, extra: Extra) -> Decorated {
        Decorated::new(self, extra)
    }

    fn with_milk(self) -> Decorated {
        self.with(Extra::Milk)
    }

    fn with_sugar(self) -> Decorated {
        self.with(Extra::Sugar)
    }

    fn size_xl(self) -> Decorated {
        self.with(Extra::SizeXl)
    }
}

impl<P: Priced + 'static> PricedExt for P {}
