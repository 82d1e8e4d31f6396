//! An in-memory mock of the remote data source.
//!
//! The mock serves a deterministic seed dataset embedded in the binary and
//! implements the same paging contract a real transport would: opaque
//! cursors, a fixed page size and per-employee scoping.

use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    model::{Employee, EmployeeId, PageCursor, Transaction, TransactionPage},
    source::{PageConfig, TransactionSource},
};

const SEED_JSON: &str = include_str!("seed.json");

/// The shape of the embedded seed file. Transactions reference employees by
/// ID and are joined against the employee list when the source is built.
#[derive(Debug, Deserialize)]
struct SeedData {
    employees: Vec<Employee>,
    transactions: Vec<SeedTransaction>,
}

#[derive(Debug, Deserialize)]
struct SeedTransaction {
    id: String,
    amount: f64,
    date: Date,
    description: String,
    employee_id: EmployeeId,
}

/// A mock remote data source serving transactions from memory.
#[derive(Debug, Clone)]
pub struct MockTransactionSource {
    employees: Vec<Employee>,
    transactions: Vec<Transaction>,
    page_size: usize,
}

impl MockTransactionSource {
    /// Create a source over the embedded seed dataset.
    ///
    /// # Panics
    ///
    /// Panics if the embedded seed file is malformed or references an
    /// unknown employee. Both are build-time mistakes in the seed file, not
    /// runtime conditions.
    pub fn with_seed_data(config: PageConfig) -> Self {
        let seed: SeedData =
            serde_json::from_str(SEED_JSON).expect("embedded seed file must be valid JSON");

        let transactions = seed
            .transactions
            .into_iter()
            .map(|transaction| {
                let employee = seed
                    .employees
                    .iter()
                    .find(|employee| employee.id == transaction.employee_id)
                    .unwrap_or_else(|| {
                        panic!(
                            "seed transaction {} references unknown employee {}",
                            transaction.id, transaction.employee_id
                        )
                    });

                Transaction {
                    id: transaction.id,
                    amount: transaction.amount,
                    date: transaction.date,
                    description: transaction.description,
                    employee: employee.clone(),
                }
            })
            .collect();

        Self {
            employees: seed.employees,
            transactions,
            page_size: config.page_size,
        }
    }

    /// Create a source over an explicit dataset.
    pub fn new(
        employees: Vec<Employee>,
        transactions: Vec<Transaction>,
        config: PageConfig,
    ) -> Self {
        Self {
            employees,
            transactions,
            page_size: config.page_size,
        }
    }

    fn decode_cursor(&self, cursor: &PageCursor) -> Result<usize, Error> {
        cursor.as_str().parse().map_err(|_| Error::Fetch {
            operation: "transactions page",
            reason: format!("invalid page cursor \"{}\"", cursor.as_str()),
        })
    }

    fn encode_cursor(offset: usize) -> PageCursor {
        PageCursor::new(offset.to_string())
    }
}

impl TransactionSource for MockTransactionSource {
    async fn employees(&self) -> Result<Vec<Employee>, Error> {
        Ok(self.employees.clone())
    }

    async fn transactions_page(
        &self,
        cursor: Option<&PageCursor>,
    ) -> Result<TransactionPage, Error> {
        let start = match cursor {
            Some(cursor) => self.decode_cursor(cursor)?,
            None => 0,
        };
        let end = self.transactions.len().min(start + self.page_size);
        // A cursor at or beyond the end yields an empty, exhausted page
        // rather than an error so over-paging clients terminate cleanly.
        let data = if start < end {
            self.transactions[start..end].to_vec()
        } else {
            Vec::new()
        };
        let next_page = (end < self.transactions.len()).then(|| Self::encode_cursor(end));

        Ok(TransactionPage { data, next_page })
    }

    async fn transactions_for_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Transaction>, Error> {
        if !self
            .employees
            .iter()
            .any(|employee| &employee.id == employee_id)
        {
            return Err(Error::UnknownEmployee(employee_id.clone()));
        }

        Ok(self
            .transactions
            .iter()
            .filter(|transaction| &transaction.employee.id == employee_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        model::{EmployeeId, PageCursor},
        source::{MockTransactionSource, PageConfig, TransactionSource},
    };

    fn seeded_source(page_size: usize) -> MockTransactionSource {
        MockTransactionSource::with_seed_data(PageConfig { page_size })
    }

    #[tokio::test]
    async fn first_page_respects_page_size() {
        let source = seeded_source(5);

        let page = source.transactions_page(None).await.unwrap();

        assert_eq!(page.data.len(), 5);
        assert!(page.next_page.is_some());
    }

    #[tokio::test]
    async fn cursor_chain_visits_every_transaction_once() {
        let source = seeded_source(5);
        let mut seen = Vec::new();

        let mut cursor = None;
        loop {
            let page = source.transactions_page(cursor.as_ref()).await.unwrap();
            seen.extend(page.data.into_iter().map(|transaction| transaction.id));

            match page.next_page {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        assert_eq!(seen.len(), 13, "seed dataset holds 13 transactions");
        let mut deduplicated = seen.clone();
        deduplicated.sort();
        deduplicated.dedup();
        assert_eq!(deduplicated.len(), seen.len(), "no transaction repeats");
    }

    #[tokio::test]
    async fn last_page_is_marked_exhausted() {
        let source = seeded_source(10);

        let first = source.transactions_page(None).await.unwrap();
        let second = source
            .transactions_page(first.next_page.as_ref())
            .await
            .unwrap();

        assert_eq!(second.data.len(), 3);
        assert_eq!(second.next_page, None);
    }

    #[tokio::test]
    async fn cursor_past_the_end_yields_empty_exhausted_page() {
        let source = seeded_source(5);

        let page = source
            .transactions_page(Some(&PageCursor::new("9000")))
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[tokio::test]
    async fn garbled_cursor_is_a_fetch_error() {
        let source = seeded_source(5);

        let result = source
            .transactions_page(Some(&PageCursor::new("not-a-cursor")))
            .await;

        assert!(matches!(result, Err(Error::Fetch { .. })));
    }

    #[tokio::test]
    async fn employee_scoped_fetch_only_returns_their_transactions() {
        let source = seeded_source(5);
        let employee_id = EmployeeId::new("emp-003");

        let transactions = source
            .transactions_for_employee(&employee_id)
            .await
            .unwrap();

        assert!(!transactions.is_empty());
        assert!(
            transactions
                .iter()
                .all(|transaction| transaction.employee.id == employee_id)
        );
    }

    #[tokio::test]
    async fn unknown_employee_is_an_error() {
        let source = seeded_source(5);

        let result = source
            .transactions_for_employee(&EmployeeId::new("emp-999"))
            .await;

        assert_eq!(
            result,
            Err(Error::UnknownEmployee(EmployeeId::new("emp-999")))
        );
    }

    #[tokio::test]
    async fn employee_list_does_not_include_the_sentinel() {
        let source = seeded_source(5);

        let employees = source.employees().await.unwrap();

        assert_eq!(employees.len(), 4);
        assert!(employees.iter().all(|employee| !employee.id.is_sentinel()));
    }
}
