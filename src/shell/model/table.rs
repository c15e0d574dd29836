use std::fmt;

/// A seating table on the floor.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    pub name: String,
    pub capacity: u8,
}

impl Table {
    pub fn new(name: impl Into<String>, capacity: u8) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table Details:")?;
        write!(f, "Name: {}\nCapacity: {}", self.name, self.capacity)
    }
}
