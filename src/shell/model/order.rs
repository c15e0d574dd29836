use crate::shell::error::TillError;
use crate::shell::model::item::MenuItem;
use crate::shell::model::menu::Menu;
use serde::Serialize;

/// The items a customer has selected, in the order they were rung up. Grows
/// monotonically; there is no removal or quantity tracking.
#[derive(Debug, Default, Serialize)]
pub(crate) struct Order {
    items: Vec<MenuItem>,
}

impl Order {
    /// Resolve a selection through the menu and append it. An order can only
    /// ever hold items the menu actually lists.
    pub fn add_from_menu(&mut self, menu: &Menu, name: &str) -> Result<MenuItem, TillError> {
        let item = menu
            .find(name)
            .ok_or_else(|| TillError::UnknownItem {
                name: name.trim().to_string(),
            })?
            .clone();
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn total_cents(&self) -> u32 {
        self.items.iter().map(|item| item.price_cents).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(Order::default().total_cents(), 0);
    }

    #[test]
    fn total_is_the_sum_of_selected_prices() {
        let menu = Menu::house_menu();
        let mut order = Order::default();
        order.add_from_menu(&menu, "Burger").unwrap();
        order.add_from_menu(&menu, "Pizza").unwrap();
        assert_eq!(order.total_cents(), 1498);
    }

    #[test]
    fn unknown_selection_leaves_the_order_unchanged() {
        let menu = Menu::house_menu();
        let mut order = Order::default();
        order.add_from_menu(&menu, "Burger").unwrap();
        let err = order.add_from_menu(&menu, "Sushi").unwrap_err();
        assert_eq!(err.to_string(), "Sushi is not on the menu");
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total_cents(), 599);
    }
}
