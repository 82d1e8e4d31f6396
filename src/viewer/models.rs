//! Shared view-model structs for the viewer page.

use time::Date;
use unicode_segmentation::UnicodeSegmentation;

use crate::model::Transaction;

/// The max number of graphemes to display in the transaction table rows
/// before truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 40;

/// Renders a transaction as a table row.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct TransactionTableRow {
    /// The value of the transaction in dollars.
    pub(crate) amount: f64,
    /// When the transaction happened.
    pub(crate) date: Date,
    /// A text description of what the transaction was for, truncated for
    /// display.
    pub(crate) description: String,
    /// The full name of the employee the transaction belongs to.
    pub(crate) employee_name: String,
}

impl TransactionTableRow {
    pub(crate) fn new_from_transaction(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount,
            date: transaction.date,
            description: truncate_description(&transaction.description),
            employee_name: transaction.employee.full_name(),
        }
    }
}

fn truncate_description(description: &str) -> String {
    let graphemes: Vec<&str> = description.graphemes(true).collect();

    if graphemes.len() <= MAX_DESCRIPTION_GRAPHEMES {
        description.to_owned()
    } else {
        format!("{}...", graphemes[..MAX_DESCRIPTION_GRAPHEMES].concat())
    }
}
