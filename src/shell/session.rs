//! The interactive dine-in flow: list the menu, take the order, settle the
//! bill, then show the front-of-house board.

use crate::shell::model::bill::Bill;
use crate::shell::model::config::{ReceiptFormat, TillConfig};
use crate::shell::model::menu::Menu;
use crate::shell::model::order::Order;
use crate::shell::model::reservation::Reservation;
use crate::shell::model::staff::{Chef, Customer, Waiter};
use crate::shell::model::table::Table;
use crate::shell::state::TillState;
use crate::shell::util::{money, time};
use log::{info, warn};
use std::io::{self, BufRead, Write};

pub(crate) fn serve<R, W>(
    state: &mut TillState,
    config: &TillConfig,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    info!(
        "serving the '{}' menu for table={} covers={}",
        state.menu().name(),
        config.table_id,
        config.covers
    );

    list_menu(state.menu(), out)?;
    let order = take_order(state.menu(), input, out)?;
    let bill = Bill::settle(
        state.issue_bill_no(),
        config.table_id,
        config.covers,
        order,
    );
    info!(
        "bill #{} settled, total={}",
        bill.no,
        money::format_cents(bill.total_cents())
    );
    checkout(&bill, config.receipt, out)?;
    front_of_house_board(out)
}

fn list_menu<W: Write>(menu: &Menu, out: &mut W) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    for item in menu.items() {
        writeln!(out, "Menu Item: {item}")?;
    }
    writeln!(out)
}

/// Prompt for item names until the guest answers anything but `y` to the
/// continuation question. Unknown names are reported and skipped; end of
/// input closes the order the same way an `n` would.
fn take_order<R, W>(menu: &Menu, input: &mut R, out: &mut W) -> io::Result<Order>
where
    R: BufRead,
    W: Write,
{
    let mut order = Order::default();
    loop {
        write!(out, "Enter the item name to add to your order: ")?;
        out.flush()?;
        let Some(name) = read_token(input)? else {
            break;
        };
        match order.add_from_menu(menu, &name) {
            Ok(item) => writeln!(out, "{} added to the order.", item.name)?,
            Err(e) => {
                warn!("selection rejected, {}", e);
                writeln!(out, "{e}.")?;
            }
        }
        write!(out, "Do you want to add more items? (y/n): ")?;
        out.flush()?;
        match read_token(input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }
    Ok(order)
}

fn checkout<W: Write>(bill: &Bill, format: ReceiptFormat, out: &mut W) -> io::Result<()> {
    match format {
        ReceiptFormat::Text => writeln!(out, "{bill}")?,
        ReceiptFormat::Json => writeln!(out, "{}", bill.render_json())?,
    }
    writeln!(out)
}

/// Today's hard-coded board, printed after checkout as a parting overview of
/// the floor.
fn front_of_house_board<W: Write>(out: &mut W) -> io::Result<()> {
    let today = time::helper::get_utc_now().date_naive();
    writeln!(out, "{}", Reservation::new("Moreau", today, 1))?;
    writeln!(out, "{}", Table::new("Table 1", 4))?;
    writeln!(out, "{}", Waiter::new("Priya", 101))?;
    writeln!(out, "{}", Chef::new("Marco", 201))?;
    writeln!(out, "{}", Customer::new("Dana", 301))
}

/// Next whitespace-trimmed line, skipping blank ones. `None` on end of input.
fn read_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let token = line.trim();
        if !token.is_empty() {
            return Ok(Some(token.to_string()));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn transcript_of(script: &str, receipt: ReceiptFormat) -> String {
        let mut state = TillState::new(Menu::house_menu());
        let config = TillConfig::new(3, 4, receipt);
        let mut input = Cursor::new(script);
        let mut out = Vec::new();
        serve(&mut state, &config, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bill_total_matches_the_selected_items() {
        let transcript = transcript_of("Burger\ny\nPizza\nn\n", ReceiptFormat::Text);
        assert!(transcript.contains("Burger added to the order."));
        assert!(transcript.contains("Pizza added to the order."));
        assert!(transcript.contains("Total Bill: $14.98"));
    }

    #[test]
    fn unknown_item_is_reported_and_skipped() {
        let transcript = transcript_of("Sushi\nn\n", ReceiptFormat::Text);
        assert!(transcript.contains("Sushi is not on the menu."));
        assert!(transcript.contains("Total Bill: $0.00"));
    }

    #[test]
    fn end_of_input_closes_the_order() {
        let transcript = transcript_of("Burger\n", ReceiptFormat::Text);
        assert!(transcript.contains("Total Bill: $5.99"));
    }

    #[test]
    fn empty_session_bills_zero() {
        let transcript = transcript_of("", ReceiptFormat::Text);
        assert!(transcript.contains("Total Bill: $0.00"));
    }

    #[test]
    fn blank_lines_are_skipped_before_a_selection() {
        let transcript = transcript_of("\n\nSalad\nn\n", ReceiptFormat::Text);
        assert!(transcript.contains("Salad added to the order."));
        assert!(transcript.contains("Total Bill: $3.99"));
    }

    #[test]
    fn json_receipt_is_emitted_when_configured() {
        let transcript = transcript_of("Burger\ny\nPizza\nn\n", ReceiptFormat::Json);
        assert!(transcript.contains("\"total_cents\": 1498"));
        assert!(transcript.contains("\"table_id\": 3"));
    }

    #[test]
    fn board_follows_the_receipt() {
        let transcript = transcript_of("n\n", ReceiptFormat::Text);
        let receipt_at = transcript.find("Total Bill:").unwrap();
        let board_at = transcript.find("Reservation Details:").unwrap();
        assert!(receipt_at < board_at);
        assert!(transcript.contains("Waiter Details:\nName: Priya\nEmployee ID: 101"));
        assert!(transcript.contains("Chef Details:\nName: Marco\nEmployee ID: 201"));
        assert!(transcript.contains("Customer Details:\nName: Dana\nCustomer ID: 301"));
    }
}
