use crate::shell::util::money;
use serde::Serialize;
use std::fmt;

/// A named, priced product offered for order. Copied freely between the menu
/// and orders, value semantics throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct MenuItem {
    pub name: String,
    pub price_cents: u32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price_cents: u32) -> Self {
        Self {
            name: name.into(),
            price_cents,
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, money::format_cents(self.price_cents))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn displays_name_and_price() {
        let item = MenuItem::new("Burger", 599);
        assert_eq!(item.to_string(), "Burger - $5.99");
    }
}
