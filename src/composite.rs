//! Menus made of items and other menus.
//!
//! Display is pre-order depth-first: a menu prints its `Menu:` header, then each child in
//! the order it was added, descending into nested menus as they come.

use std::io::{self, Write};

/// A single dish, shown by its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    label: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Item(MenuItem),
    Menu(Menu),
}

impl MenuNode {
    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            MenuNode::Item(item) => writeln!(out, "{}", item.label),
            MenuNode::Menu(menu) => menu.display(out),
        }
    }
}

impl From<MenuItem> for MenuNode {
    fn from(item: MenuItem) -> Self {
        MenuNode::Item(item)
    }
}

impl From<Menu> for MenuNode {
    fn from(menu: Menu) -> Self {
        MenuNode::Menu(menu)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    children: Vec<MenuNode>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: impl Into<MenuNode>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Menu:")?;
        for child in &self.children {
            child.display(out)?;
        }
        Ok(())
    }

    /// Leaf labels in pre-order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        self.collect_labels(&mut labels);
        labels
    }

    fn collect_labels<'a>(&'a self, labels: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                MenuNode::Item(item) => labels.push(item.label()),
                MenuNode::Menu(menu) => menu.collect_labels(labels),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(menu: &Menu) -> String {
        let mut out = Vec::new();
        menu.display(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flat_menu_keeps_insertion_order() {
        let mut menu = Menu::new();
        menu.add(MenuItem::new("Pizza"))
            .add(MenuItem::new("Coffee"))
            .add(MenuItem::new("Cheeseburger"));

        assert_eq!(render(&menu), "Menu:\nPizza\nCoffee\nCheeseburger\n");
        assert_eq!(menu.labels(), vec!["Pizza", "Coffee", "Cheeseburger"]);
    }

    #[test]
    fn test_nested_menu_is_depth_first() {
        let mut desserts = Menu::new();
        desserts.add(MenuItem::new("Pie")).add(MenuItem::new("Ice cream"));

        let mut menu = Menu::new();
        menu.add(MenuItem::new("Soup"))
            .add(desserts)
            .add(MenuItem::new("Tea"));

        assert_eq!(
            render(&menu),
            "Menu:\nSoup\nMenu:\nPie\nIce cream\nTea\n"
        );
        assert_eq!(menu.labels(), vec!["Soup", "Pie", "Ice cream", "Tea"]);
    }

    #[test]
    fn test_empty_menu() {
        let menu = Menu::new();
        assert!(menu.is_empty());
        assert_eq!(render(&menu), "Menu:\n");
        assert!(menu.labels().is_empty());
    }
}
