//! The domain types shared by the data source, the view-model orchestrator
//! and the presentation layer.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

/// The ID of an employee in the remote data source.
///
/// The empty string is reserved as the sentinel meaning "no employee", which
/// backs the "All Employees" entry in the filter control.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Create an employee ID from a raw string.
    ///
    /// The empty string is a valid input and produces the sentinel ID, since
    /// that is exactly what the filter control submits when the user picks
    /// "All Employees".
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The sentinel ID representing "no employee selected".
    pub fn sentinel() -> Self {
        Self(String::new())
    }

    /// Whether this ID is the "no employee selected" sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.0.is_empty()
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee that transactions can be filtered by.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The ID of the employee in the data source.
    pub id: EmployeeId,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
}

impl Employee {
    /// The placeholder employee representing "no filter".
    ///
    /// It is always offered as the first entry in the filter control and its
    /// name renders as the option label "All Employees".
    pub fn sentinel() -> Self {
        Self {
            id: EmployeeId::sentinel(),
            first_name: "All".to_owned(),
            last_name: "Employees".to_owned(),
        }
    }

    /// The employee's full name as shown in the filter control and the
    /// transaction table.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single transaction as returned by the remote data source.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction in the data source.
    pub id: String,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The employee the transaction belongs to.
    pub employee: Employee,
}

/// An opaque continuation token for the paginated all-transactions feed.
///
/// Only the data source assigns meaning to the token; the orchestrator
/// stores it and hands it back verbatim on the next page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    /// Wrap a raw token produced by the data source.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of the all-transactions feed.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionPage {
    /// The transactions on this page, in feed order.
    pub data: Vec<Transaction>,
    /// The cursor for the next page, or `None` when the feed is exhausted.
    pub next_page: Option<PageCursor>,
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeId};

    #[test]
    fn empty_id_is_sentinel() {
        assert!(EmployeeId::new("").is_sentinel());
        assert!(EmployeeId::sentinel().is_sentinel());
        assert!(!EmployeeId::new("e1").is_sentinel());
    }

    #[test]
    fn sentinel_employee_labels_as_all_employees() {
        let sentinel = Employee::sentinel();

        assert!(sentinel.id.is_sentinel());
        assert_eq!(sentinel.full_name(), "All Employees");
    }
}
