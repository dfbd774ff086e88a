//! Orders assembled course by course.
//!
//! ```
//! use restaurant_patterns::Order;
//!
//! let order = Order::builder().drink("Coke").main_course("Burger").build();
//! assert_eq!(order.to_string(), "{ drink: 'Coke', mainCourse: 'Burger' }");
//! ```

use std::fmt;

use serde::Serialize;

/// A finished order. Courses never set are absent, not defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    drink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    main_course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dessert: Option<String>,
}

impl Order {
    pub fn builder() -> OrderBuilder {
        OrderBuilder::new()
    }

    pub fn drink(&self) -> Option<&str> {
        self.drink.as_deref()
    }

    pub fn main_course(&self) -> Option<&str> {
        self.main_course.as_deref()
    }

    pub fn dessert(&self) -> Option<&str> {
        self.dessert.as_deref()
    }

    fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("drink", self.drink()),
            ("mainCourse", self.main_course()),
            ("dessert", self.dessert()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

/// Prints the order as a console object dump: `{ drink: 'Coke', mainCourse: 'Burger' }`.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = self.fields().peekable();
        if fields.peek().is_none() {
            return f.write_str("{}");
        }

        f.write_str("{ ")?;
        let mut first = true;
        for (key, value) in fields {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{key}: '{value}'")?;
        }
        f.write_str(" }")
    }
}

/// Collects courses through chained calls; `build` takes a snapshot.
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drink(&mut self, drink: impl Into<String>) -> &mut Self {
        self.order.drink = Some(drink.into());
        self
    }

    pub fn main_course(&mut self, main_course: impl Into<String>) -> &mut Self {
        self.order.main_course = Some(main_course.into());
        self
    }

    pub fn dessert(&mut self, dessert: impl Into<String>) -> &mut Self {
        self.order.dessert = Some(dessert.into());
        self
    }

    /// Snapshot of the courses set so far. Later builder calls do not reach it.
    pub fn build(&self) -> Order {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_order() {
        let order = Order::builder()
            .drink("Coke")
            .main_course("Burger")
            .dessert("Pie")
            .build();

        assert_eq!(order.drink(), Some("Coke"));
        assert_eq!(order.main_course(), Some("Burger"));
        assert_eq!(order.dessert(), Some("Pie"));
        assert_eq!(
            order.to_string(),
            "{ drink: 'Coke', mainCourse: 'Burger', dessert: 'Pie' }"
        );
    }

    #[test]
    fn test_unset_course_is_absent() {
        let order = Order::builder().drink("Sprite").main_course("Pizza").build();

        assert_eq!(order.dessert(), None);
        assert_eq!(order.to_string(), "{ drink: 'Sprite', mainCourse: 'Pizza' }");
        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"{"drink":"Sprite","mainCourse":"Pizza"}"#
        );
    }

    #[test]
    fn test_empty_order() {
        let order = OrderBuilder::new().build();
        assert_eq!(order, Order::default());
        assert_eq!(order.to_string(), "{}");
        assert_eq!(serde_json::to_string(&order).unwrap(), "{}");
    }

    #[test]
    fn test_snapshot_is_independent_of_builder() {
        let mut builder = Order::builder();
        builder.drink("Tea");
        let before = builder.build();

        builder.drink("Coffee").dessert("Cake");
        let after = builder.build();

        assert_eq!(before.to_string(), "{ drink: 'Tea' }");
        assert_eq!(after.to_string(), "{ drink: 'Coffee', dessert: 'Cake' }");
    }
}
