use crate::shell::model::order::Order;
use crate::shell::util::money;
use crate::shell::util::time;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The priced summary of an order. Derived at checkout and only lives long
/// enough to be printed.
#[derive(Debug)]
pub(crate) struct Bill {
    pub no: u64,
    pub table_id: u8,
    pub customer_count: u8,
    pub created_at: DateTime<Utc>,
    order: Order,
}

impl Bill {
    pub fn settle(no: u64, table_id: u8, customer_count: u8, order: Order) -> Self {
        Self {
            no,
            table_id,
            customer_count,
            created_at: time::helper::get_utc_now(),
            order,
        }
    }

    pub fn total_cents(&self) -> u32 {
        self.order.total_cents()
    }

    pub fn render_json(&self) -> String {
        format!(
            "{:#}",
            json!({
                "no": self.no,
                "table_id": self.table_id,
                "customer_count": self.customer_count,
                "created_at": self.created_at.format(TIMESTAMP_FORMAT).to_string(),
                "items": self.order.items(),
                "total_cents": self.total_cents(),
            })
        )
    }
}

/// The fixed-format text receipt.
impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Bill #{} | table {} | covers {} | {}",
            self.no,
            self.table_id,
            self.customer_count,
            self.created_at.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(f, "Your Order:")?;
        for item in self.order.items() {
            writeln!(f, "Menu Item: {item}")?;
        }
        writeln!(f)?;
        write!(f, "Total Bill: {}", money::format_cents(self.total_cents()))
    }
}
