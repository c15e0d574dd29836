use chrono::NaiveDate;
use std::fmt;

/// A booked table for a named guest.
#[derive(Debug, Clone)]
pub(crate) struct Reservation {
    pub guest: String,
    pub date: NaiveDate,
    pub table_no: u8,
}

impl Reservation {
    pub fn new(guest: impl Into<String>, date: NaiveDate, table_no: u8) -> Self {
        Self {
            guest: guest.into(),
            date,
            table_no,
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation Details:")?;
        write!(
            f,
            "Name: {}\nDate: {}\nTable: {}",
            self.guest, self.date, self.table_no
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn displays_a_labeled_block() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let reservation = Reservation::new("Moreau", date, 1);
        assert_eq!(
            reservation.to_string(),
            "Reservation Details:\nName: Moreau\nDate: 2025-01-01\nTable: 1"
        );
    }
}
