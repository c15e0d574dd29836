//! Inert personnel records shown on the front-of-house board.

use std::fmt;

#[derive(Debug, Clone)]
pub(crate) struct Waiter {
    pub name: String,
    pub employee_id: u32,
}

impl Waiter {
    pub fn new(name: impl Into<String>, employee_id: u32) -> Self {
        Self {
            name: name.into(),
            employee_id,
        }
    }
}

impl fmt::Display for Waiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Waiter Details:")?;
        write!(f, "Name: {}\nEmployee ID: {}", self.name, self.employee_id)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Chef {
    pub name: String,
    pub employee_id: u32,
}

impl Chef {
    pub fn new(name: impl Into<String>, employee_id: u32) -> Self {
        Self {
            name: name.into(),
            employee_id,
        }
    }
}

impl fmt::Display for Chef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chef Details:")?;
        write!(f, "Name: {}\nEmployee ID: {}", self.name, self.employee_id)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Customer {
    pub name: String,
    pub customer_id: u32,
}

impl Customer {
    pub fn new(name: impl Into<String>, customer_id: u32) -> Self {
        Self {
            name: name.into(),
            customer_id,
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer Details:")?;
        write!(f, "Name: {}\nCustomer ID: {}", self.name, self.customer_id)
    }
}
