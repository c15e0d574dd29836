use crate::shell::model::item::MenuItem;

/// The house menu, populated once at startup and never mutated afterwards.
/// Items keep their insertion order.
#[derive(Debug)]
pub(crate) struct Menu {
    name: String,
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: vec![],
        }
    }

    pub fn house_menu() -> Self {
        let mut menu = Menu::new("Our Restaurant");
        for (name, price_cents) in [
            ("Burger", 599),
            ("Pizza", 899),
            ("Salad", 399),
            ("Soda", 199),
        ] {
            menu.add(MenuItem::new(name, price_cents));
        }
        menu
    }

    pub fn add(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look an item up by name. Whitespace around the name is ignored and the
    /// match is ASCII-case-insensitive, so "burger" finds "Burger".
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        let name = name.trim();
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }
}
