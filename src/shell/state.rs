use crate::shell::model::menu::Menu;

/// What the till holds for the whole run: the house menu and the bill-number
/// sequence.
pub(crate) struct TillState {
    menu: Menu,
    next_bill_no: u64,
}

impl TillState {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            next_bill_no: 1,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn issue_bill_no(&mut self) -> u64 {
        let no = self.next_bill_no;
        self.next_bill_no += 1;
        no
    }
}
